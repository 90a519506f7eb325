//! Common types: shot outcomes and board errors.

use core::fmt;

/// Result of a resolved shot on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot hit an undepleted ship segment.
    Hit,
    /// Shot landed in open water.
    Miss,
    /// Shot took out a ship's last segment.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shooter is entitled to another shot.
    pub fn grants_extra_shot(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned when placing a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Some cell of the ship lies outside the board.
    OutOfBounds,
    /// Some cell of the ship is occupied or buffered by another ship.
    Overlap,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "ship placement is out of bounds"),
            PlacementError::Overlap => write!(f, "ship placement overlaps or touches another ship"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Errors returned when shooting at a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target lies outside the board.
    OutOfBounds,
    /// Target was already shot at.
    AlreadyTargeted,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds => write!(f, "you are trying to shoot out of the board"),
            ShotError::AlreadyTargeted => write!(f, "the cell is already shelled"),
        }
    }
}

impl std::error::Error for ShotError {}
