//! A dense in-memory voxel store implementing [`VoxelQuery`].

use crate::block::{BlockCategory, VoxelQuery};
use crate::geom::{Position, Volume};

/// A dense 3D grid of [`BlockCategory`] values over a bounded [`Volume`].
///
/// Cells outside the volume read as [`BlockCategory::Empty`], so the void
/// surrounding the grid is passable but offers no footing — searches are
/// naturally confined without any explicit bounds checks in the engine.
#[derive(Debug, Clone)]
pub struct VoxelGrid {
    bounds: Volume,
    cells: Vec<BlockCategory>,
}

impl VoxelGrid {
    /// Create a grid filled with [`BlockCategory::Empty`].
    pub fn new(bounds: Volume) -> Self {
        Self {
            bounds,
            cells: vec![BlockCategory::Empty; bounds.len()],
        }
    }

    /// The bounding volume of this grid.
    #[inline]
    pub fn bounds(&self) -> Volume {
        self.bounds
    }

    #[inline]
    fn index(&self, p: Position) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let w = self.bounds.width() as usize;
        let d = self.bounds.depth() as usize;
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        let z = (p.z - self.bounds.min.z) as usize;
        Some((y * d + z) * w + x)
    }

    /// The category at `p`, or `Empty` outside the bounds.
    #[inline]
    pub fn get(&self, p: Position) -> BlockCategory {
        self.index(p)
            .map_or(BlockCategory::Empty, |i| self.cells[i])
    }

    /// Set the category at `p`. Writes outside the bounds are ignored.
    pub fn set(&mut self, p: Position, cat: BlockCategory) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cat;
        }
    }

    /// Fill the intersection of `vol` and the grid bounds with `cat`.
    pub fn fill(&mut self, vol: Volume, cat: BlockCategory) {
        for p in vol.intersect(self.bounds).iter() {
            self.set(p, cat);
        }
    }

    /// Fill one horizontal layer (all cells at height `y`) with `cat`.
    pub fn fill_layer(&mut self, y: i32, cat: BlockCategory) {
        let b = self.bounds;
        self.fill(
            Volume::new(
                Position::new(b.min.x, y, b.min.z),
                Position::new(b.max.x, y + 1, b.max.z),
            ),
            cat,
        );
    }
}

impl VoxelQuery for VoxelGrid {
    #[inline]
    fn category(&self, pos: Position) -> BlockCategory {
        self.get(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Volume {
        Volume::new(Position::ZERO, Position::new(4, 3, 4))
    }

    #[test]
    fn get_set_round_trip() {
        let mut g = VoxelGrid::new(bounds());
        let p = Position::new(2, 1, 3);
        assert_eq!(g.get(p), BlockCategory::Empty);
        g.set(p, BlockCategory::Sticky);
        assert_eq!(g.get(p), BlockCategory::Sticky);
        // Neighboring cells are untouched.
        assert_eq!(g.get(p.up()), BlockCategory::Empty);
        assert_eq!(g.get(p.shift(1, 0, 0)), BlockCategory::Empty);
    }

    #[test]
    fn out_of_bounds_reads_empty_and_writes_are_ignored() {
        let mut g = VoxelGrid::new(bounds());
        let outside = Position::new(-1, 0, 0);
        assert_eq!(g.get(outside), BlockCategory::Empty);
        g.set(outside, BlockCategory::Solid);
        assert_eq!(g.get(outside), BlockCategory::Empty);
    }

    #[test]
    fn fill_layer_covers_whole_slice() {
        let mut g = VoxelGrid::new(bounds());
        g.fill_layer(0, BlockCategory::Solid);
        for x in 0..4 {
            for z in 0..4 {
                assert_eq!(g.get(Position::new(x, 0, z)), BlockCategory::Solid);
                assert_eq!(g.get(Position::new(x, 1, z)), BlockCategory::Empty);
            }
        }
    }

    #[test]
    fn fill_clips_to_bounds() {
        let mut g = VoxelGrid::new(bounds());
        g.fill(
            Volume::new(Position::new(2, 1, 2), Position::new(9, 9, 9)),
            BlockCategory::Water,
        );
        assert_eq!(g.get(Position::new(3, 2, 3)), BlockCategory::Water);
        assert_eq!(g.get(Position::new(1, 1, 2)), BlockCategory::Empty);
    }
}
