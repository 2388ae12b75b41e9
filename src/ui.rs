//! Text rendering of a board for human display.

use crate::board::{Board, Cell};
use crate::coord::Coord;

/// Render the board as a 1-indexed text grid.
///
/// Markers: `o` open water, `■` ship, `X` hit, `.` miss or known-empty.
/// On a concealed board undamaged ship cells render as `O`, hiding the
/// fleet's shape from the opposing viewer.
pub fn render(board: &Board) -> String {
    let size = board.size() as i32;
    let mut out = String::from("  |");
    for col in 1..=size {
        out.push_str(&format!(" {col} |"));
    }
    for row in 0..size {
        out.push_str(&format!("\n{} |", row + 1));
        for col in 0..size {
            // cell() cannot fail inside the grid
            let cell = board.cell(Coord::new(row, col)).unwrap_or(Cell::Empty);
            let marker = match cell {
                Cell::Empty => "o",
                Cell::Occupied if board.is_concealed() => "O",
                Cell::Occupied => "■",
                Cell::Hit => "X",
                Cell::Miss | Cell::MarkedEmpty => ".",
            };
            out.push_str(&format!(" {marker} |"));
        }
    }
    out
}
