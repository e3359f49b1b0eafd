//! Block classification and the world query capability.

use crate::geom::Position;

/// Coarse classification of a single voxel for navigation purposes.
///
/// The mapping from concrete world blocks to categories is supplied by the
/// embedder through [`VoxelQuery`]; the navigation crates only ever see
/// these seven buckets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockCategory {
    /// Air and air-like blocks (tall grass, ferns, dead bushes, snow
    /// layers): can be moved through, never supports footing.
    #[default]
    Empty,
    /// Ordinary solid terrain: blocks movement, supports footing.
    Solid,
    /// Water: can be moved through and swum in, but movement over it is
    /// heavily penalized.
    Water,
    /// Lava: blocks movement and never supports footing.
    Lava,
    /// Soul-sand-like terrain: solid footing that slows movement.
    Slowing,
    /// Honey-like terrain: solid footing that grabs at the walker.
    Sticky,
    /// Ice-like terrain: solid footing with poor traction.
    Slippery,
}

impl BlockCategory {
    /// Whether a walker can occupy a cell of this category.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, BlockCategory::Empty | BlockCategory::Water)
    }

    /// Whether a cell of this category can be stood (or swum) upon.
    ///
    /// Water counts: a walker treads water rather than falling through it.
    /// Lava never does; routes must not rest on it at any price.
    #[inline]
    pub const fn supports_footing(self) -> bool {
        !matches!(self, BlockCategory::Empty | BlockCategory::Lava)
    }

    /// Extra movement cost for stepping onto this category of floor.
    #[inline]
    pub const fn surcharge(self) -> f64 {
        match self {
            BlockCategory::Water => 5.0,
            BlockCategory::Slowing => 2.0,
            BlockCategory::Sticky => 3.0,
            BlockCategory::Slippery => 1.5,
            // Lava is excluded as footing outright, so it carries no
            // surcharge; Empty and Solid are free.
            _ => 0.0,
        }
    }
}

/// Read-only voxel world capability.
///
/// Implementations must be side-effect-free and safe to call concurrently
/// from multiple searches; the world must not be mutated while a search
/// reads it.
pub trait VoxelQuery {
    /// Classify the block at `pos`.
    fn category(&self, pos: Position) -> BlockCategory;
}

/// Any classification closure can stand in as a world.
impl<F> VoxelQuery for F
where
    F: Fn(Position) -> BlockCategory,
{
    fn category(&self, pos: Position) -> BlockCategory {
        self(pos)
    }
}
