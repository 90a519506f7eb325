use crate::coord::Coord;

/// Side length of each player's board.
pub const BOARD_SIZE: i32 = 6;

/// Number of ships in the fixed fleet.
pub const NUM_SHIPS: usize = 7;

/// Ship lengths making up the fixed fleet, longest first.
pub const FLEET_LENGTHS: [i32; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Placement attempts shared across one full-board trial before the trial
/// is discarded and restarted from an empty board.
pub const PLACEMENT_ATTEMPT_BUDGET: u32 = 2000;

/// Whether `c` lies on a board of side length `size`.
pub fn in_bounds(c: Coord, size: i32) -> bool {
    c.x >= 0 && c.x < size && c.y >= 0 && c.y < size
}
