//! Board state: ship placement with buffer zones, shot resolution and
//! win detection.

use std::collections::HashSet;

use crate::common::{PlacementError, ShotError, ShotOutcome};
use crate::config::in_bounds;
use crate::coord::Coord;
use crate::ship::{HitOutcome, Ship};

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Occupied,
    Hit,
    Miss,
}

/// One player's board: their fleet plus the record of shots received.
///
/// The board goes through two phases. During placement, `placement_buffer`
/// holds every occupied cell plus the one-cell separation ring around each
/// ship, so later placements cannot overlap or touch. [`Board::finalize_for_play`]
/// ends that phase; from then on `shots` records every targeted cell.
pub struct Board {
    size: i32,
    ships: Vec<Ship>,
    cells: Vec<CellState>,
    placement_buffer: HashSet<Coord>,
    shots: HashSet<Coord>,
    sunk_count: usize,
    fog_of_war: bool,
}

impl Board {
    /// Create an empty board with fog of war disabled.
    pub fn new(size: i32) -> Self {
        debug_assert!(size >= 1);
        Self {
            size,
            ships: Vec::new(),
            cells: vec![CellState::Empty; (size * size) as usize],
            placement_buffer: HashSet::new(),
            shots: HashSet::new(),
            sunk_count: 0,
            fog_of_war: false,
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Whether rendering should hide intact ship cells.
    pub fn is_fog_of_war(&self) -> bool {
        self.fog_of_war
    }

    pub fn set_fog_of_war(&mut self, fog: bool) {
        self.fog_of_war = fog;
    }

    /// State of the cell at `c`, or `None` if out of bounds.
    pub fn cell(&self, c: Coord) -> Option<CellState> {
        if in_bounds(c, self.size) {
            Some(self.cells[(c.y * self.size + c.x) as usize])
        } else {
            None
        }
    }

    /// Whether `c` has already been shot at (or auto-cleared by a sink).
    pub fn is_targeted(&self, c: Coord) -> bool {
        self.shots.contains(&c)
    }

    fn set_cell(&mut self, c: Coord, state: CellState) {
        self.cells[(c.y * self.size + c.x) as usize] = state;
    }

    /// Place `ship` onto the board.
    ///
    /// Fails with [`PlacementError::OutOfBounds`] if any of its cells lies
    /// outside the board, and with [`PlacementError::Overlap`] if any cell is
    /// occupied or buffered by a previously placed ship. On success the
    /// ship's cells become [`CellState::Occupied`] and the cells plus their
    /// in-bounds 8-neighbors are added to the placement buffer, enforcing
    /// one cell of water between ships.
    pub fn place(&mut self, ship: Ship) -> Result<(), PlacementError> {
        let cells = ship.cells();
        if cells.iter().any(|&c| !in_bounds(c, self.size)) {
            return Err(PlacementError::OutOfBounds);
        }
        if cells.iter().any(|c| self.placement_buffer.contains(c)) {
            return Err(PlacementError::Overlap);
        }
        for &c in &cells {
            self.set_cell(c, CellState::Occupied);
            self.placement_buffer.insert(c);
        }
        for &c in &cells {
            for n in c.neighbors() {
                if in_bounds(n, self.size) {
                    self.placement_buffer.insert(n);
                }
            }
        }
        log::debug!("placed {} on {}x{} board", ship, self.size, self.size);
        self.ships.push(ship);
        Ok(())
    }

    /// End the placement phase. Drops the placement buffer; all subsequent
    /// targeting bookkeeping happens in the shot record. Called exactly once,
    /// after the whole fleet is placed and before the first shot.
    pub fn finalize_for_play(&mut self) {
        self.placement_buffer.clear();
    }

    /// Resolve a shot at `target`.
    ///
    /// Fails with [`ShotError::OutOfBounds`] for targets off the board and
    /// [`ShotError::AlreadyTargeted`] for cells shot at before. A hit that
    /// sinks a ship also marks every in-bounds 8-neighbor of the ship as
    /// [`CellState::Miss`] and records it as targeted, since the separation
    /// rule guarantees those cells hold only water.
    pub fn shoot(&mut self, target: Coord) -> Result<ShotOutcome, ShotError> {
        if !in_bounds(target, self.size) {
            return Err(ShotError::OutOfBounds);
        }
        if !self.shots.insert(target) {
            return Err(ShotError::AlreadyTargeted);
        }
        match self.ships.iter().position(|s| s.covers(target)) {
            Some(i) => {
                self.set_cell(target, CellState::Hit);
                match self.ships[i].register_hit() {
                    HitOutcome::Sunk => {
                        self.sunk_count += 1;
                        self.clear_around(i);
                        Ok(ShotOutcome::Sunk)
                    }
                    HitOutcome::Damaged => Ok(ShotOutcome::Hit),
                }
            }
            None => {
                self.set_cell(target, CellState::Miss);
                Ok(ShotOutcome::Miss)
            }
        }
    }

    /// Mark the water ring around a freshly sunk ship as missed.
    fn clear_around(&mut self, ship_index: usize) {
        let cells = self.ships[ship_index].cells();
        for c in cells {
            for n in c.neighbors() {
                if in_bounds(n, self.size) && self.shots.insert(n) {
                    self.set_cell(n, CellState::Miss);
                }
            }
        }
    }

    /// True once every placed ship has been sunk.
    pub fn is_match_won(&self) -> bool {
        self.sunk_count == self.ships.len()
    }
}
