use rand::rngs::SmallRng;

use crate::common::{ShotError, ShotOutcome};
use crate::coord::Coord;

/// Target-selection capability of one combatant.
///
/// Implementations only pick coordinates; bounds and repeat-target checks
/// happen inside [`crate::Board::shoot`], and rejected picks come back
/// through [`MoveSource::notify_rejected`] before a new one is requested.
pub trait MoveSource {
    /// Choose the next target on an opponent board of the given size.
    fn select_target(&mut self, rng: &mut SmallRng, board_size: i32) -> Coord;

    /// A selected target was rejected by the opponent board.
    fn notify_rejected(&mut self, _target: Coord, _reason: &ShotError) {}

    /// An accepted shot resolved with the given outcome.
    fn notify_outcome(&mut self, _target: Coord, _outcome: ShotOutcome) {}
}
