//! Randomized fleet placement.

use rand::Rng;

use crate::board::Board;
use crate::config::{FLEET_LENGTHS, PLACEMENT_ATTEMPT_BUDGET};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

/// Produce a fully placed, play-ready board.
///
/// Each trial places the fleet longest ship first with a shared attempt
/// budget; an exhausted trial is discarded and a fresh board started. The
/// outer retry is unbounded, which is fine in practice: a single trial on a
/// 6x6 board succeeds far more often than not.
pub fn random_board<R: Rng>(rng: &mut R, size: i32, fog: bool) -> Board {
    let mut trials = 0u32;
    loop {
        trials += 1;
        if let Some(mut board) = try_place_fleet(rng, size) {
            log::debug!("fleet placed after {} trial(s)", trials);
            board.set_fog_of_war(fog);
            return board;
        }
    }
}

/// One full-board trial. Returns `None` if the attempt budget runs out
/// before the whole fleet is down.
fn try_place_fleet<R: Rng>(rng: &mut R, size: i32) -> Option<Board> {
    let mut board = Board::new(size);
    let mut attempts = 0u32;
    for &len in FLEET_LENGTHS.iter() {
        loop {
            attempts += 1;
            if attempts > PLACEMENT_ATTEMPT_BUDGET {
                return None;
            }
            if board.place(random_ship(rng, size, len)).is_ok() {
                break;
            }
        }
    }
    board.finalize_for_play();
    Some(board)
}

/// Sample a candidate ship. The bow range is tightened per orientation so
/// every candidate already fits the board; only overlap can reject it.
fn random_ship<R: Rng>(rng: &mut R, size: i32, len: i32) -> Ship {
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let (max_x, max_y) = match orientation {
        Orientation::Horizontal => (size - len, size - 1),
        Orientation::Vertical => (size - 1, size - len),
    };
    let bow = Coord::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
    Ship::new(bow, len, orientation)
}
