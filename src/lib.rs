mod board;
mod common;
mod config;
mod coord;
mod game;
mod generator;
mod logging;
mod player;
mod player_ai;
mod player_cli;
mod ship;
mod ui;

pub use board::{Board, Cell};
pub use common::{BoardError, GenerationError, ShotOutcome};
pub use config::{GameConfig, DEFAULT_BOARD_SIZE, DEFAULT_FLEET, DEFAULT_PLACEMENT_BUDGET};
pub use coord::{Coord, Orientation};
pub use game::{Match, MatchState, Side};
pub use generator::{place_fleet, random_board};
pub use logging::init_logging;
pub use player::{resolve_move, TargetSource};
pub use player_ai::AiPlayer;
pub use player_cli::{parse_target, CliPlayer};
pub use ship::Ship;
pub use ui::render;
