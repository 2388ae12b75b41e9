//! Game board state: ship placement, adjacency enforcement and shot
//! resolution.

use std::collections::HashSet;

use crate::common::{BoardError, ShotOutcome};
use crate::coord::Coord;
use crate::ship::Ship;

/// State of a single grid cell. Exactly one state per cell at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Open water, never shot at.
    Empty,
    /// Undamaged ship segment.
    Occupied,
    /// Ship segment that was struck.
    Hit,
    /// Open water that was shot at.
    Miss,
    /// Open water adjacent to a destroyed ship, known to hold no ship.
    MarkedEmpty,
}

/// A square board owning its ships, with two distinct coordinate sets:
///
/// * `reserved` — occupied cells plus each ship's contour, written at
///   placement time and consulted only by [`Board::add_ship`]. It never
///   blocks shooting.
/// * `shots` — every cell fired at (or marked known-empty when a ship
///   sinks), growing monotonically during play.
#[derive(Debug)]
pub struct Board {
    size: u8,
    grid: Vec<Cell>,
    ships: Vec<Ship>,
    reserved: HashSet<Coord>,
    shots: HashSet<Coord>,
    live_ships: usize,
    concealed: bool,
}

/// Chebyshev-distance-1 neighborhood offsets, the cell itself included.
const NEAR: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    /// Create an empty board of `size`×`size` cells.
    pub fn new(size: u8) -> Self {
        Self {
            size,
            grid: vec![Cell::Empty; size as usize * size as usize],
            ships: Vec::new(),
            reserved: HashSet::new(),
            shots: HashSet::new(),
            live_ships: 0,
            concealed: false,
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether rendering must hide undamaged ship cells.
    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    /// Ships with at least one undamaged segment. Zero means defeat.
    pub fn live_ships(&self) -> usize {
        self.live_ships
    }

    pub fn is_defeated(&self) -> bool {
        self.live_ships == 0
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn contains(&self, coord: Coord) -> bool {
        (0..self.size as i32).contains(&coord.x) && (0..self.size as i32).contains(&coord.y)
    }

    /// Cell state at `coord`. Out-of-bounds coordinates report `OutOfBounds`.
    pub fn cell(&self, coord: Coord) -> Result<Cell, BoardError> {
        self.index(coord)
            .map(|i| self.grid[i])
            .ok_or(BoardError::OutOfBounds)
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.x as usize * self.size as usize + coord.y as usize)
        } else {
            None
        }
    }

    fn set_cell(&mut self, coord: Coord, cell: Cell) {
        if let Some(i) = self.index(coord) {
            self.grid[i] = cell;
        }
    }

    /// Place a ship, enforcing bounds and the no-touching rule: the new
    /// hull may not land on a cell occupied by, or 8-adjacent to, any
    /// existing ship. On rejection nothing is mutated; retrying with a
    /// different spot is the generator's job.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        for cell in ship.cells() {
            if !self.contains(cell) || self.reserved.contains(&cell) {
                return Err(BoardError::InvalidPlacement);
            }
        }
        for cell in ship.cells() {
            self.set_cell(cell, Cell::Occupied);
        }
        // Reserve the contour so later ships cannot touch this one, even
        // diagonally. No visual marking happens here; cells only render as
        // known-empty once the ship is destroyed.
        let contour: Vec<Coord> = self.contour_of(&ship);
        self.reserved.extend(contour);
        self.ships.push(ship);
        self.live_ships += 1;
        Ok(())
    }

    /// In-bounds neighborhood of the ship, occupied cells included.
    fn contour_of(&self, ship: &Ship) -> Vec<Coord> {
        let mut cells = Vec::new();
        for occupied in ship.cells() {
            for (dx, dy) in NEAR {
                let near = occupied.offset(dx, dy);
                if self.contains(near) && !cells.contains(&near) {
                    cells.push(near);
                }
            }
        }
        cells
    }

    /// Resolve a shot at `coord`.
    ///
    /// Fails without mutating anything when the coordinate is off the board
    /// or was targeted before. Otherwise records the shot and reports
    /// whether it hit, missed, or sank a ship. Any hit keeps the turn with
    /// the shooter.
    pub fn shoot(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        if !self.contains(coord) {
            return Err(BoardError::OutOfBounds);
        }
        if self.shots.contains(&coord) {
            return Err(BoardError::AlreadyTargeted);
        }
        self.shots.insert(coord);

        for i in 0..self.ships.len() {
            if !self.ships[i].contains(coord) {
                continue;
            }
            self.ships[i].register_hit();
            self.set_cell(coord, Cell::Hit);
            if self.ships[i].is_destroyed() {
                self.live_ships -= 1;
                let ship = self.ships[i].clone();
                self.mark_contour_empty(&ship);
                return Ok(ShotOutcome::Sunk);
            }
            return Ok(ShotOutcome::Hit);
        }

        self.set_cell(coord, Cell::Miss);
        Ok(ShotOutcome::Miss)
    }

    /// When a ship sinks, every surrounding cell is known to hold no ship:
    /// mark it visually and bar it from further shots. The ship's own cells
    /// are already in `shots` (all were hit) and keep their state.
    fn mark_contour_empty(&mut self, ship: &Ship) {
        for cell in self.contour_of(ship) {
            if self.shots.insert(cell) {
                self.set_cell(cell, Cell::MarkedEmpty);
            }
        }
    }
}
