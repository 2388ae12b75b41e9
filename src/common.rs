//! Common types: board errors and shot outcomes.

use thiserror::Error;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot struck an undepleted ship segment.
    Hit,
    /// Shot landed on open water.
    Miss,
    /// Shot destroyed the last remaining segment of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shooter keeps the turn. Any hit does; a miss passes
    /// the turn to the other side.
    pub fn keeps_turn(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by board operations. All are recoverable: shot errors
/// trigger a re-ask in the move loop, and placement errors tell the
/// generator to try a different spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Target coordinate lies outside the grid.
    #[error("that shot is off the board")]
    OutOfBounds,
    /// Cell was already shot at or is marked as known-empty.
    #[error("you already fired at that cell")]
    AlreadyTargeted,
    /// Ship placement is out of bounds or touches an existing ship.
    #[error("ship placement is out of bounds or touches another ship")]
    InvalidPlacement,
}

/// Generator-level failure, distinct from per-call board errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The shared placement attempt budget ran out before the whole fleet
    /// was placed. The caller restarts from an empty board.
    #[error("placement attempt budget exhausted after {attempts} tries")]
    BudgetExhausted { attempts: u32 },
}
