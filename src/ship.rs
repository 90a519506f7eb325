//! Ship definition: bow, length, orientation and remaining segments.

use core::fmt;

use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along +x from the bow.
    Horizontal,
    /// Extends along +y from the bow.
    Vertical,
}

/// Outcome of registering a single hit on a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// The ship lost a segment but is still afloat.
    Damaged,
    /// The hit took out the last remaining segment.
    Sunk,
}

/// A ship occupying a contiguous line of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    bow: Coord,
    length: i32,
    orientation: Orientation,
    lives: i32,
}

impl Ship {
    /// Create a ship with all segments intact. `length` must be at least 1.
    pub fn new(bow: Coord, length: i32, orientation: Orientation) -> Self {
        debug_assert!(length >= 1);
        Self {
            bow,
            length,
            orientation,
            lives: length,
        }
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn is_sunk(&self) -> bool {
        self.lives == 0
    }

    /// Coordinates occupied by this ship, bow first.
    pub fn cells(&self) -> Vec<Coord> {
        (0..self.length)
            .map(|i| match self.orientation {
                Orientation::Horizontal => Coord::new(self.bow.x + i, self.bow.y),
                Orientation::Vertical => Coord::new(self.bow.x, self.bow.y + i),
            })
            .collect()
    }

    /// Whether `target` lands on one of this ship's cells.
    pub fn covers(&self, target: Coord) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                target.y == self.bow.y
                    && target.x >= self.bow.x
                    && target.x < self.bow.x + self.length
            }
            Orientation::Vertical => {
                target.x == self.bow.x
                    && target.y >= self.bow.y
                    && target.y < self.bow.y + self.length
            }
        }
    }

    /// Record one confirmed hit. Must not be called once the ship is sunk;
    /// the board's bookkeeping guarantees each cell is hit at most once.
    pub fn register_hit(&mut self) -> HitOutcome {
        debug_assert!(self.lives > 0, "hit registered on a sunk ship");
        self.lives -= 1;
        if self.lives == 0 {
            HitOutcome::Sunk
        } else {
            HitOutcome::Damaged
        }
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} ship of length {} at {}",
            self.orientation, self.length, self.bow
        )
    }
}
