//! Interface implemented by different player types, plus the shared
//! move-resolution loop.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::coord::Coord;

/// A source of target coordinates for one side of the match.
///
/// Implementors only produce candidates; the board enforces the rules.
/// Selected at match setup, never swapped mid-game.
pub trait TargetSource {
    /// Produce the next cell to fire at.
    fn next_target(&mut self, rng: &mut SmallRng) -> Coord;

    /// Called when the board rejected the last target. The default logs
    /// it; interactive sources surface the message to the user instead.
    fn notify_rejected(&mut self, target: Coord, err: &BoardError) {
        log::debug!("target {target} rejected: {err}");
    }
}

/// Resolve one move: ask `source` for targets until the enemy board
/// accepts a shot, then return the outcome.
///
/// Rule violations never consume the turn; the loop simply re-asks, so it
/// is unbounded by design. It terminates as long as the board has any
/// untargeted cell the source can eventually name.
pub fn resolve_move(
    source: &mut dyn TargetSource,
    enemy: &mut Board,
    rng: &mut SmallRng,
) -> ShotOutcome {
    loop {
        let target = source.next_target(rng);
        match enemy.shoot(target) {
            Ok(outcome) => return outcome,
            Err(err) => source.notify_rejected(target, &err),
        }
    }
}
