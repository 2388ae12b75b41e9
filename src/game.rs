//! Match orchestration: two boards, two target sources, and the turn
//! state machine.

use log::info;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::config::GameConfig;
use crate::generator::random_board;
use crate::player::{resolve_move, TargetSource};

/// One side of the match. Side A moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Turn state machine. A hit keeps the mover; a miss flips the side; a
/// fleet reduced to zero live ships ends the match with no further moves
/// accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Turn(Side),
    Won(Side),
}

/// A full match: each side owns one board exclusively, and the opposing
/// side only reaches it through [`Board::shoot`].
pub struct Match {
    board_a: Board,
    board_b: Board,
    player_a: Box<dyn TargetSource>,
    player_b: Box<dyn TargetSource>,
    state: MatchState,
}

impl Match {
    /// Generate both boards from `cfg` and start with side A to move.
    /// Side B's board is concealed: it renders without revealing
    /// undamaged ship cells.
    pub fn new(
        cfg: &GameConfig,
        player_a: Box<dyn TargetSource>,
        player_b: Box<dyn TargetSource>,
        rng: &mut SmallRng,
    ) -> Self {
        let board_a = random_board(cfg, rng);
        let mut board_b = random_board(cfg, rng);
        board_b.set_concealed(true);
        Self {
            board_a,
            board_b,
            player_a,
            player_b,
            state: MatchState::Turn(Side::A),
        }
    }

    /// Build a match from pre-made boards and players, side A to move.
    /// Used by tests and by callers that place fleets themselves.
    pub fn with_boards(
        board_a: Board,
        board_b: Board,
        player_a: Box<dyn TargetSource>,
        player_b: Box<dyn TargetSource>,
    ) -> Self {
        Self {
            board_a,
            board_b,
            player_a,
            player_b,
            state: MatchState::Turn(Side::A),
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::A => &self.board_a,
            Side::B => &self.board_b,
        }
    }

    /// Resolve one move for the side to play, apply the turn-transfer
    /// rule and check the win condition. Returns the outcome, or `None`
    /// when the match is already decided.
    pub fn step(&mut self, rng: &mut SmallRng) -> Option<ShotOutcome> {
        let mover = match self.state {
            MatchState::Turn(side) => side,
            MatchState::Won(_) => return None,
        };
        let (source, enemy) = match mover {
            Side::A => (self.player_a.as_mut(), &mut self.board_b),
            Side::B => (self.player_b.as_mut(), &mut self.board_a),
        };
        let outcome = resolve_move(source, enemy, rng);
        info!("{mover:?} fired: {outcome:?}");
        if enemy.is_defeated() {
            self.state = MatchState::Won(mover);
        } else if !outcome.keeps_turn() {
            self.state = MatchState::Turn(mover.other());
        }
        Some(outcome)
    }

    /// Drive the match to its terminal state and return the winner.
    pub fn run(&mut self, rng: &mut SmallRng) -> Side {
        loop {
            if let MatchState::Won(side) = self.state {
                return side;
            }
            self.step(rng);
        }
    }
}
