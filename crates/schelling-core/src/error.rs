//! Invariant-violation errors for population bookkeeping.
//!
//! These signal programming errors: correct use of the relocation rule
//! never produces them. They are returned rather than panicking so a host
//! can report the failing run, and `debug_assert!`ed where detected.

use crate::id::Cell;
use std::error::Error;
use std::fmt;

/// A population precondition did not hold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Relocation was asked to move the occupant of an empty cell.
    SourceEmpty {
        /// The empty source cell.
        cell: Cell,
    },
    /// Relocation (or construction) targeted a cell that is already occupied.
    DestinationOccupied {
        /// The occupied destination cell.
        cell: Cell,
    },
    /// A random empty cell was requested but every cell is occupied.
    NoEmptyCells,
    /// A cell lies outside the grid.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceEmpty { cell } => write!(f, "cannot relocate from empty cell {cell}"),
            Self::DestinationOccupied { cell } => {
                write!(f, "destination cell {cell} is already occupied")
            }
            Self::NoEmptyCells => write!(f, "no empty cells available"),
            Self::CellOutOfBounds { cell } => write!(f, "cell {cell} is outside the grid"),
        }
    }
}

impl Error for InvariantViolation {}
