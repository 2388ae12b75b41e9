//! Match configuration: board size, fleet manifest and placement budget.

pub const DEFAULT_BOARD_SIZE: u8 = 6;

/// Hull lengths a generated board must contain, longest first.
pub const DEFAULT_FLEET: [u8; 6] = [3, 2, 2, 1, 1, 1];

/// Random placement attempts shared across the whole fleet before the
/// generator gives up on a board and restarts from empty.
pub const DEFAULT_PLACEMENT_BUDGET: u32 = 2000;

/// Parameters fixed for the lifetime of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: u8,
    pub fleet: Vec<u8>,
    pub placement_budget: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            fleet: DEFAULT_FLEET.to_vec(),
            placement_budget: DEFAULT_PLACEMENT_BUDGET,
        }
    }
}
