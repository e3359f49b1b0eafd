//! Geometry primitives: [`Position`] and [`Volume`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A 3D integer voxel coordinate. Y is the vertical axis.
///
/// Ordering is lexicographic by `(x, y, z)`; the search engine relies on
/// this as a deterministic tie-break between equally promising cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    /// Origin (0, 0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Return a position shifted by (dx, dy, dz).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// The cell directly above.
    #[inline]
    pub const fn up(self) -> Self {
        self.shift(0, 1, 0)
    }

    /// The cell directly below.
    #[inline]
    pub const fn down(self) -> Self {
        self.shift(0, -1, 0)
    }

    /// Same horizontal column, at the given height.
    #[inline]
    pub const fn at_height(self, y: i32) -> Self {
        Self { x: self.x, y, z: self.z }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// ---------------------------------------------------------------------------
// Volume
// ---------------------------------------------------------------------------

/// A half-open axis-aligned box \[min, max). `min` is inclusive, `max` is
/// exclusive on every axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Volume {
    pub min: Position,
    pub max: Position,
}

impl Volume {
    /// Create a volume from two corners, auto-canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(a: Position, b: Position) -> Self {
        Self {
            min: Position::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Position::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Extent on the x axis.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Extent on the y axis.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Extent on the z axis.
    #[inline]
    pub fn depth(self) -> i32 {
        self.max.z - self.min.z
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize) * (self.depth() as usize)
    }

    /// Whether the volume contains no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y || self.min.z >= self.max.z
    }

    /// Whether `p` is inside the half-open volume.
    #[inline]
    pub fn contains(self, p: Position) -> bool {
        p.x >= self.min.x
            && p.x < self.max.x
            && p.y >= self.min.y
            && p.y < self.max.y
            && p.z >= self.min.z
            && p.z < self.max.z
    }

    /// Intersection of two volumes (may be empty).
    pub fn intersect(self, other: Self) -> Self {
        let r = Self {
            min: Position::new(
                self.min.x.max(other.min.x),
                self.min.y.max(other.min.y),
                self.min.z.max(other.min.z),
            ),
            max: Position::new(
                self.max.x.min(other.max.x),
                self.max.y.min(other.max.y),
                self.max.z.min(other.max.z),
            ),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Iterate over all cells in x-then-z-then-y order.
    pub fn iter(self) -> impl Iterator<Item = Position> {
        let v = self;
        (v.min.y..v.max.y).flat_map(move |y| {
            (v.min.z..v.max.z)
                .flat_map(move |z| (v.min.x..v.max.x).map(move |x| Position::new(x, y, z)))
        })
    }
}
