mod board;
mod common;
mod config;
mod coord;
mod game;
mod logging;
mod placement;
mod player;
mod player_ai;
mod player_cli;
mod ship;
mod ui;

pub use board::{Board, CellState};
pub use common::{PlacementError, ShotError, ShotOutcome};
pub use config::{in_bounds, BOARD_SIZE, FLEET_LENGTHS, NUM_SHIPS, PLACEMENT_ATTEMPT_BUDGET};
pub use coord::Coord;
pub use game::{Combatant, Match, MatchState, Side};
pub use logging::init_logging;
pub use placement::random_board;
pub use player::MoveSource;
pub use player_ai::AiPlayer;
pub use player_cli::CliPlayer;
pub use ship::{HitOutcome, Orientation, Ship};
pub use ui::{greeting, render_board, render_pair};
