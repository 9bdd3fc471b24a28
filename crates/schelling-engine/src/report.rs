//! Read-only state handed to reporting collaborators.
//!
//! Rendering and plotting live outside the engine. They receive a
//! [`PopulationSnapshot`] at the start and end of a run, plus the
//! [`SimulationReport`] scalars used for labelling and batch studies.

use std::fmt;

use schelling_core::{Category, Cell, MAX_RACES};

use crate::metrics::IterationReport;
use crate::population::Population;
use crate::simulation::RunOutcome;

/// Agent positions and categories at one moment of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopulationSnapshot {
    /// Grid columns.
    pub width: u32,
    /// Grid rows.
    pub height: u32,
    /// Every occupied cell with its category, in sweep order.
    pub agents: Vec<(Cell, Category)>,
}

impl PopulationSnapshot {
    /// Capture the current occupancy of `population`.
    pub fn capture(population: &Population) -> Self {
        let grid = population.grid();
        Self {
            width: grid.width(),
            height: grid.height(),
            agents: population.agents().collect(),
        }
    }

    /// Number of agents of each category, indexed by [`Category::index`].
    pub fn category_counts(&self) -> [usize; MAX_RACES as usize] {
        let mut counts = [0; MAX_RACES as usize];
        for (_, category) in &self.agents {
            counts[category.index()] += 1;
        }
        counts
    }
}

/// Renders one text row per `y` (row 0 first), `.` for empty cells and the
/// category digit for occupied ones, rows separated by `\n`. Agents outside
/// `width × height` are not drawn.
impl fmt::Display for PopulationSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut rows = vec![vec![b'.'; w]; h];
        for (cell, category) in &self.agents {
            if let Some(slot) = rows
                .get_mut(cell.y as usize)
                .and_then(|row| row.get_mut(cell.x as usize))
            {
                *slot = b'0' + category.get();
            }
        }
        for (y, row) in rows.iter().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}

/// Everything a reporting sink needs from one completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationReport {
    /// Category count of the run, for labelling.
    pub races: u8,
    /// Similarity threshold of the run, for labelling.
    pub similarity_threshold: f64,
    /// How the run ended.
    pub outcome: RunOutcome,
    /// One record per completed sweep.
    pub history: Vec<IterationReport>,
    /// Occupancy before the first sweep.
    pub initial: PopulationSnapshot,
    /// Occupancy after the last sweep.
    pub final_state: PopulationSnapshot,
    /// [`average_similarity`](crate::average_similarity) of the final state.
    pub average_similarity: Option<f64>,
}

impl SimulationReport {
    /// Total relocations across the run.
    pub fn total_moves(&self) -> usize {
        self.history.iter().map(|r| r.moves).sum()
    }
}
