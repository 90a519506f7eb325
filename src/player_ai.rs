use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{ShotError, ShotOutcome};
use crate::coord::Coord;
use crate::player::MoveSource;

/// Computer move source: uniform random targeting over the whole board.
/// Repeat targets are simply rejected by the board and re-rolled.
pub struct AiPlayer {
    announce: bool,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self { announce: true }
    }

    /// An AI that does not print its moves, for simulations and tests.
    pub fn silent() -> Self {
        Self { announce: false }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, board_size: i32) -> Coord {
        Coord::new(
            rng.random_range(0..board_size),
            rng.random_range(0..board_size),
        )
    }

    fn notify_rejected(&mut self, target: Coord, reason: &ShotError) {
        log::debug!("computer shot at {} rejected: {}", target, reason);
    }

    fn notify_outcome(&mut self, target: Coord, outcome: ShotOutcome) {
        if self.announce {
            // 1-based row/column, matching the human input format.
            println!(
                "Computer shoots at {} {} -> {:?}",
                target.y + 1,
                target.x + 1,
                outcome
            );
        }
    }
}
