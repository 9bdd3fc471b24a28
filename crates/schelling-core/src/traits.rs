//! Core abstraction trait for reading grid occupancy.

use crate::id::{Category, Cell};

/// Read-only view of which category, if any, occupies each cell.
///
/// Implemented by the live population and by the frozen per-sweep
/// snapshot, so neighbourhood evaluation can run against either.
pub trait Occupancy {
    /// The occupant of `cell`, or `None` if the cell is empty or
    /// outside the grid.
    fn occupant(&self, cell: Cell) -> Option<Category>;

    /// Number of occupied cells.
    fn occupied_count(&self) -> usize;
}
