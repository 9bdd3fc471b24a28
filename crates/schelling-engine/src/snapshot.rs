//! Frozen per-iteration view of the occupied-mapping.

use indexmap::IndexMap;

use schelling_core::{Category, Cell, Occupancy};
use schelling_space::Grid;

/// Immutable copy of the occupied-mapping taken at the start of a sweep.
///
/// Every agent's satisfaction in that sweep is judged against this view,
/// so moves made earlier in the same sweep are invisible to later agents'
/// decisions. Iteration order is the sweep order.
#[derive(Clone, Debug)]
pub struct SweepSnapshot {
    grid: Grid,
    agents: IndexMap<Cell, Category>,
}

impl SweepSnapshot {
    pub(crate) fn new(grid: Grid, agents: IndexMap<Cell, Category>) -> Self {
        Self { grid, agents }
    }

    /// The grid the snapshot was taken on.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Agents in sweep order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Category)> + '_ {
        self.agents.iter().map(|(&cell, &category)| (cell, category))
    }

    /// Number of agents in the snapshot.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the snapshot holds no agents.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl Occupancy for SweepSnapshot {
    fn occupant(&self, cell: Cell) -> Option<Category> {
        self.agents.get(&cell).copied()
    }

    fn occupied_count(&self) -> usize {
        self.agents.len()
    }
}
