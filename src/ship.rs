//! Ship placement and damage tracking.

use core::fmt;

use crate::coord::{Coord, Orientation};

/// A straight-line ship anchored at its bow, with remaining undamaged
/// segments tracked as hits land.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    bow: Coord,
    length: u8,
    orientation: Orientation,
    remaining: u8,
}

impl Ship {
    /// Place a ship of `length` segments with its bow at `bow`, extending
    /// along `orientation`. Bounds are checked by the board, not here.
    pub fn new(bow: Coord, length: u8, orientation: Orientation) -> Self {
        Self {
            bow,
            length,
            orientation,
            remaining: length,
        }
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Undamaged segments left. Zero means destroyed.
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    pub fn is_destroyed(&self) -> bool {
        self.remaining == 0
    }

    /// The cells this ship occupies, stepping from the bow along its
    /// orientation.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let (dx, dy) = self.orientation.step();
        (0..self.length as i32).map(move |i| self.bow.offset(dx * i, dy * i))
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Register one hit, saturating at zero remaining segments.
    pub fn register_hit(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: {}, length: {}, orientation: {:?}, remaining: {} }}",
            self.bow, self.length, self.orientation, self.remaining,
        )
    }
}
