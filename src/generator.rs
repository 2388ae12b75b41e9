//! Randomized board generation with a bounded retry budget.

use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::GenerationError;
use crate::config::GameConfig;
use crate::coord::{Coord, Orientation};
use crate::ship::Ship;

/// Attempt to place the whole fleet from `cfg` onto a fresh board.
///
/// Each hull is retried with new random placements until it fits; the
/// attempt counter is shared across the fleet, and exhausting
/// `cfg.placement_budget` fails the whole board rather than one hull.
/// Restarting from empty avoids grinding on unsolvable partial layouts.
pub fn place_fleet(cfg: &GameConfig, rng: &mut SmallRng) -> Result<Board, GenerationError> {
    let mut board = Board::new(cfg.board_size);
    let mut attempts: u32 = 0;
    for &length in &cfg.fleet {
        loop {
            if attempts >= cfg.placement_budget {
                return Err(GenerationError::BudgetExhausted { attempts });
            }
            attempts += 1;
            let ship = random_ship(cfg.board_size, length, rng);
            if board.add_ship(ship).is_ok() {
                break;
            }
        }
    }
    debug!("fleet placed in {} attempts", attempts);
    Ok(board)
}

/// Generate a ready-to-play board, restarting generation from an empty
/// board whenever the attempt budget runs out. Placement failures are
/// silent from the player's perspective.
pub fn random_board(cfg: &GameConfig, rng: &mut SmallRng) -> Board {
    loop {
        match place_fleet(cfg, rng) {
            Ok(board) => return board,
            Err(err) => debug!("restarting board generation: {err}"),
        }
    }
}

/// Draw a uniformly random in-bounds placement for a hull of `length`.
fn random_ship(size: u8, length: u8, rng: &mut SmallRng) -> Ship {
    let orientation = if rng.random_bool(0.5) {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    let span = size.saturating_sub(length) as i32;
    let lateral = size as i32 - 1;
    let bow = match orientation {
        Orientation::Vertical => Coord::new(rng.random_range(0..=span), rng.random_range(0..=lateral)),
        Orientation::Horizontal => {
            Coord::new(rng.random_range(0..=lateral), rng.random_range(0..=span))
        }
    };
    Ship::new(bow, length, orientation)
}
