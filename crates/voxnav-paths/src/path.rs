use voxnav_core::Position;

/// An ordered route from start to goal inclusive, plus its accumulated
/// cost.
///
/// "No route found" is represented by the empty path — it is an expected
/// outcome of a search, not an error. Callers must check [`Path::is_empty`]
/// before consuming the steps.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<Position>,
    cost: f64,
}

impl Path {
    pub(crate) fn new(steps: Vec<Position>, cost: f64) -> Self {
        Self { steps, cost }
    }

    /// The empty path, signalling that no route was found.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the search failed to find a route.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of positions in the route (0 for the empty path).
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Total movement cost of the route (0 for the empty path).
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The route positions in start-to-goal order.
    #[inline]
    pub fn steps(&self) -> &[Position] {
        &self.steps
    }

    /// First position (the start), if any.
    pub fn first(&self) -> Option<Position> {
        self.steps.first().copied()
    }

    /// Last position (the goal), if any.
    pub fn last(&self) -> Option<Position> {
        self.steps.last().copied()
    }

    /// Iterate over the route positions.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.steps.iter().copied()
    }
}

impl IntoIterator for Path {
    type Item = Position;
    type IntoIter = std::vec::IntoIter<Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
