//! Grid coordinates and ship orientation.

use core::fmt;

/// A point on the board: `x` is the row, `y` the column, both 0-indexed.
///
/// Signed so that contour computation can step one cell past the edge and
/// let bounds filtering discard the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate shifted by (`dx`, `dy`). May land off the board.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Successive cells increment the row index.
    Vertical,
    /// Successive cells increment the column index.
    Horizontal,
}

impl Orientation {
    /// Step vector for one segment along the hull.
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::Vertical => (1, 0),
            Orientation::Horizontal => (0, 1),
        }
    }
}
