use hashbrown::HashMap;
use voxnav_core::Position;

/// Default node-expansion budget per search.
pub const DEFAULT_BUDGET: usize = 5000;

// ---------------------------------------------------------------------------
// Internal node arena
// ---------------------------------------------------------------------------

/// One search node per distinct position discovered during a search.
///
/// `parent` is a non-owning index into the arena, used only for path
/// reconstruction.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) pos: Position,
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) parent: usize,
    pub(crate) closed: bool,
}

/// Entry in the open frontier, ordered for use in `BinaryHeap`.
#[derive(Clone, Copy)]
pub(crate) struct OpenEntry {
    pub(crate) f: f64,
    pub(crate) pos: Position,
    pub(crate) idx: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so BinaryHeap (a max-heap) pops the smallest f first;
        // ties broken by lexicographic position order so that routes are
        // reproducible on equal-cost frontiers.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for OpenEntry {}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Weighted-A* route search over voxel terrain.
///
/// A `PathFinder` owns all per-search state (node arena, position index,
/// open frontier, scratch buffers) and reuses the allocations across
/// queries; the state itself is cleared at the start of every search, so
/// no search observes another's results. Concurrent searches each need
/// their own instance.
pub struct PathFinder {
    pub(crate) budget: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) index: HashMap<Position, usize>,
    pub(crate) open: std::collections::BinaryHeap<OpenEntry>,
    pub(crate) nbuf: Vec<Position>,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathFinder {
    /// Create a finder with the default expansion budget.
    pub fn new() -> Self {
        Self::with_budget(DEFAULT_BUDGET)
    }

    /// Create a finder with a custom expansion budget.
    ///
    /// The budget bounds worst-case work: a search that expands this many
    /// nodes without reaching the goal gives up and reports no route.
    ///
    /// # Panics
    ///
    /// Panics if `budget` is zero — a finder that can do no work is a
    /// caller contract violation, not a "no path" outcome.
    pub fn with_budget(budget: usize) -> Self {
        assert!(budget > 0, "expansion budget must be nonzero");
        Self {
            budget,
            nodes: Vec::new(),
            index: HashMap::new(),
            open: std::collections::BinaryHeap::new(),
            nbuf: Vec::with_capacity(26),
        }
    }

    /// The current expansion budget.
    #[inline]
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Change the expansion budget for subsequent searches.
    ///
    /// # Panics
    ///
    /// Panics if `budget` is zero.
    pub fn set_budget(&mut self, budget: usize) {
        assert!(budget > 0, "expansion budget must be nonzero");
        self.budget = budget;
    }
}
