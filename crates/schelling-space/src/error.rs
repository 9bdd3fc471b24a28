//! Error types for grid construction and coordinate queries.

use schelling_core::Cell;
use std::fmt;

/// Errors arising from grid construction or coordinate queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// A dimension exceeds the representable maximum.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// A cell is outside the bounds of the grid.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Human-readable description of the valid range.
        bounds: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
            Self::CellOutOfBounds { cell, bounds } => {
                write!(f, "cell {cell} out of bounds: {bounds}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
