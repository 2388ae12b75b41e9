//! Randomized computer player.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::coord::Coord;
use crate::player::TargetSource;

/// Computer player that fires at uniformly random cells. Repeats and
/// misses are weeded out by the board's rejection path, not here.
pub struct AiPlayer {
    board_size: u8,
}

impl AiPlayer {
    pub fn new(board_size: u8) -> Self {
        Self { board_size }
    }
}

impl TargetSource for AiPlayer {
    fn next_target(&mut self, rng: &mut SmallRng) -> Coord {
        let x = rng.random_range(0..self.board_size as i32);
        let y = rng.random_range(0..self.board_size as i32);
        Coord::new(x, y)
    }
}
