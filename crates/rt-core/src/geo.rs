//! Integer grid positions and the Manhattan metric.
//!
//! Stops sit on an integer grid.  The base weight of a freshly added
//! adjacency is the Manhattan distance between its endpoints.

use crate::cost::Cost;

/// A position on the integer stop grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `|x1 - x2| + |y1 - y2|`, exact for every pair of `i32` points
    /// (at most `2 * (2^32 - 1)`).
    pub fn manhattan(self, other: GridPoint) -> Cost {
        Cost::from(self.x.abs_diff(other.x)) + Cost::from(self.y.abs_diff(other.y))
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
