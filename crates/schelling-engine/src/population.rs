//! The authoritative cell-to-occupant state of one simulation run.
//!
//! A [`Population`] partitions every cell of its [`Grid`] into exactly one
//! of two sets: the occupied-mapping (cell → [`Category`]) or the empty
//! set. Relocation moves an occupant into an empty cell and the vacated
//! cell into the empty set, so both set sizes are preserved for the whole
//! run.

use indexmap::{IndexMap, IndexSet};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use schelling_core::{Category, Cell, InvariantViolation, Occupancy};
use schelling_space::Grid;

use crate::config::{ConfigError, SimulationConfig};
use crate::snapshot::SweepSnapshot;

/// Grid occupancy: which cells hold which category, and which are empty.
///
/// The occupied-mapping keeps insertion order; that order is the sweep
/// order of the next [`SweepSnapshot`].
#[derive(Clone, Debug)]
pub struct Population {
    grid: Grid,
    occupied: IndexMap<Cell, Category>,
    empty: IndexSet<Cell>,
}

impl Population {
    /// Randomly partition the grid described by `config`.
    ///
    /// All cells are enumerated in canonical order and shuffled with `rng`.
    /// The first `floor(empty_ratio * cells)` become empty; the remainder
    /// is dealt round-robin into `races` groups (element `j` of the
    /// remainder joins group `j % races`), and group `i` receives category
    /// `i + 1`. Group sizes therefore differ by at most one.
    pub fn build<R: Rng + ?Sized>(
        config: &SimulationConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.grid()?;

        let mut cells: Vec<Cell> = grid.cells().collect();
        cells.shuffle(rng);

        let n_empty = config.empty_count();
        let (empty_cells, remaining) = cells.split_at(n_empty);

        let races = usize::from(config.races);
        let mut occupied = IndexMap::with_capacity(remaining.len());
        for (j, &cell) in remaining.iter().enumerate() {
            let category = Category::from_index(j % races)
                .ok_or(ConfigError::InvalidRaces { races: config.races })?;
            occupied.insert(cell, category);
        }
        let empty: IndexSet<Cell> = empty_cells.iter().copied().collect();

        debug!(
            width = grid.width(),
            height = grid.height(),
            occupied = occupied.len(),
            empty = empty.len(),
            races = config.races,
            "population built"
        );

        Ok(Self {
            grid,
            occupied,
            empty,
        })
    }

    /// Build a population with an exact layout.
    ///
    /// `agents` are inserted in the given order (which becomes the sweep
    /// order); every other cell of `grid` is empty. Fails if an agent lies
    /// outside the grid or two agents share a cell.
    pub fn from_agents<I>(grid: Grid, agents: I) -> Result<Self, InvariantViolation>
    where
        I: IntoIterator<Item = (Cell, Category)>,
    {
        let mut occupied = IndexMap::new();
        for (cell, category) in agents {
            if !grid.contains(cell) {
                return Err(InvariantViolation::CellOutOfBounds { cell });
            }
            if occupied.insert(cell, category).is_some() {
                return Err(InvariantViolation::DestinationOccupied { cell });
            }
        }
        let empty = grid
            .cells()
            .filter(|cell| !occupied.contains_key(cell))
            .collect();
        Ok(Self {
            grid,
            occupied,
            empty,
        })
    }

    /// The grid this population lives on.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// O(1) lookup of the category occupying `cell`.
    pub fn occupant(&self, cell: Cell) -> Option<Category> {
        self.occupied.get(&cell).copied()
    }

    /// Whether `cell` is currently empty.
    pub fn is_empty_cell(&self, cell: Cell) -> bool {
        self.empty.contains(&cell)
    }

    /// Number of occupied cells.
    pub fn occupied_len(&self) -> usize {
        self.occupied.len()
    }

    /// Number of empty cells.
    pub fn empty_len(&self) -> usize {
        self.empty.len()
    }

    /// Occupied cells and their categories, in sweep order.
    pub fn agents(&self) -> impl Iterator<Item = (Cell, Category)> + '_ {
        self.occupied.iter().map(|(&cell, &category)| (cell, category))
    }

    /// Empty cells, in no particular order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.empty.iter().copied()
    }

    /// Number of agents of each category, indexed by [`Category::index`].
    pub fn category_counts(&self) -> [usize; schelling_core::MAX_RACES as usize] {
        let mut counts = [0; schelling_core::MAX_RACES as usize];
        for category in self.occupied.values() {
            counts[category.index()] += 1;
        }
        counts
    }

    /// Freeze the current occupied-mapping for one sweep.
    pub fn sweep_snapshot(&self) -> SweepSnapshot {
        SweepSnapshot::new(self.grid, self.occupied.clone())
    }

    /// Move the occupant of `from` into the empty cell `to`.
    ///
    /// Afterwards `from` is empty and `to` holds the moved category. On
    /// error the population is left unchanged.
    pub fn relocate(&mut self, from: Cell, to: Cell) -> Result<(), InvariantViolation> {
        for cell in [from, to] {
            if !self.grid.contains(cell) {
                return Err(InvariantViolation::CellOutOfBounds { cell });
            }
        }
        if !self.empty.contains(&to) {
            return Err(InvariantViolation::DestinationOccupied { cell: to });
        }
        let category = self
            .occupied
            .swap_remove(&from)
            .ok_or(InvariantViolation::SourceEmpty { cell: from })?;

        self.empty.swap_remove(&to);
        self.occupied.insert(to, category);
        self.empty.insert(from);

        debug_assert_eq!(
            self.occupied.len() + self.empty.len(),
            self.grid.cell_count(),
            "relocation broke the partition"
        );
        Ok(())
    }

    /// A uniformly random currently-empty cell.
    pub fn random_empty_cell<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Cell, InvariantViolation> {
        if self.empty.is_empty() {
            return Err(InvariantViolation::NoEmptyCells);
        }
        let index = rng.random_range(0..self.empty.len());
        self.empty
            .get_index(index)
            .copied()
            .ok_or(InvariantViolation::NoEmptyCells)
    }
}

impl Occupancy for Population {
    fn occupant(&self, cell: Cell) -> Option<Category> {
        Population::occupant(self, cell)
    }

    fn occupied_count(&self) -> usize {
        self.occupied.len()
    }
}
