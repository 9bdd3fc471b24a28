//! The iteration/convergence loop.
//!
//! [`Simulation`] owns the [`Population`] of the current run exclusively.
//! Each [`step()`](Simulation::step) is one sweep:
//!
//! 1. freeze the occupied-mapping into a [`SweepSnapshot`](crate::SweepSnapshot);
//! 2. for every agent of the snapshot, in snapshot order, judge
//!    satisfaction against the snapshot and, if unsatisfied, relocate it
//!    to a random empty cell of the *live* population;
//! 3. count the moves and update the state machine.
//!
//! # State machine
//!
//! ```text
//! NotStarted ──step──▶ Running ──step (0 moves)──────────▶ Converged
//!                        │  ▲
//!                        └──┘ step (moves > 0, budget left)
//!                        │
//!                        └──step (moves > 0, budget spent)──▶ Exhausted
//!
//! NotStarted | Running ──step (relocation error)──▶ Failed
//! ```
//!
//! Only completed sweeps advance the iteration count or enter the history.
//! A sweep that fails part-way leaves the moves it already made in the
//! population and ends the run in `Failed`.
//!
//! Single-threaded and synchronous: there are no suspension points inside
//! a sweep. A host wanting cancellation can drive [`step()`](Simulation::step)
//! itself and stop between iterations.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, info_span, warn};

use crate::config::{ConfigError, SimulationConfig};
use crate::error::SimError;
use crate::metrics::{average_similarity, IterationReport};
use crate::population::Population;
use crate::relocation::attempt_move;
use crate::report::{PopulationSnapshot, SimulationReport};

// ── State ───────────────────────────────────────────────────────

/// Lifecycle of one simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationState {
    /// Populated (or awaiting population) but no sweep has run.
    NotStarted,
    /// At least one sweep has run and the run has not terminated.
    Running {
        /// Index of the last completed sweep.
        iteration: u32,
    },
    /// A sweep made zero moves.
    Converged {
        /// Sweeps run, including the final zero-move sweep.
        iterations: u32,
    },
    /// The iteration budget ran out while agents were still moving.
    Exhausted {
        /// Sweeps run (equal to the budget).
        iterations: u32,
    },
    /// A sweep returned an error before completing.
    Failed {
        /// Index of the sweep that failed.
        iteration: u32,
    },
}

impl SimulationState {
    /// Whether the run has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Converged { .. } | Self::Exhausted { .. } | Self::Failed { .. }
        )
    }
}

/// Terminal state of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The last sweep made zero moves.
    Converged {
        /// Sweeps run.
        iterations: u32,
    },
    /// The budget ran out with agents still moving.
    Exhausted {
        /// Sweeps run.
        iterations: u32,
    },
}

impl RunOutcome {
    /// Number of sweeps the run took.
    pub fn iterations(&self) -> u32 {
        match *self {
            Self::Converged { iterations } | Self::Exhausted { iterations } => iterations,
        }
    }
}

// ── Simulation ──────────────────────────────────────────────────

/// One Schelling simulation: configuration, owned population, and
/// progress.
///
/// # Example
///
/// ```
/// use schelling_engine::{Simulation, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .dimensions(20, 20)
///     .similarity_threshold(0.4)
///     .n_iterations(50)
///     .seed(7)
///     .build()
///     .unwrap();
/// let mut sim = Simulation::new(config).unwrap();
/// let report = sim.run_seeded().unwrap();
/// assert!(report.outcome.iterations() <= 50);
/// assert!(report.average_similarity.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
    state: SimulationState,
    population: Option<Population>,
    history: Vec<IterationReport>,
}

impl Simulation {
    /// Create a simulation from a validated configuration.
    ///
    /// No population exists until [`populate()`](Self::populate) or one of
    /// the `run` methods is called.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: SimulationState::NotStarted,
            population: None,
            history: Vec::new(),
        })
    }

    /// Create a simulation around an existing population.
    ///
    /// The population's grid must match the configured extents, and every
    /// agent's category must be within `1..=config.races`.
    pub fn with_population(
        config: SimulationConfig,
        population: Population,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = population.grid();
        if (grid.width(), grid.height()) != (config.width, config.height) {
            return Err(ConfigError::GridMismatch {
                expected: (config.width, config.height),
                actual: (grid.width(), grid.height()),
            });
        }
        if let Some((_, category)) = population
            .agents()
            .find(|(_, category)| category.get() > config.races)
        {
            return Err(ConfigError::CategoryOutOfRange {
                category: category.get(),
                races: config.races,
            });
        }
        Ok(Self {
            config,
            state: SimulationState::NotStarted,
            population: Some(population),
            history: Vec::new(),
        })
    }

    /// The run configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// The population of the current run, if one has been built.
    pub fn population(&self) -> Option<&Population> {
        self.population.as_ref()
    }

    /// Sweep records of the current run, oldest first.
    pub fn history(&self) -> &[IterationReport] {
        &self.history
    }

    /// The terminal outcome, once the run has ended.
    pub fn outcome(&self) -> Option<RunOutcome> {
        match self.state {
            SimulationState::Converged { iterations } => Some(RunOutcome::Converged { iterations }),
            SimulationState::Exhausted { iterations } => Some(RunOutcome::Exhausted { iterations }),
            _ => None,
        }
    }

    /// Build a fresh population, discarding any previous run.
    pub fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Population, SimError> {
        let population = Population::build(&self.config, rng)?;
        self.state = SimulationState::NotStarted;
        self.history.clear();
        Ok(&*self.population.insert(population))
    }

    /// Run one sweep and advance the state machine.
    ///
    /// # Errors
    ///
    /// [`SimError::NotPopulated`] before a population exists,
    /// [`SimError::Finished`] once the run is terminal, and
    /// [`SimError::Invariant`] if relocation finds no empty cell for an
    /// unsatisfied agent (only possible with `empty_ratio == 0`). The
    /// latter moves the run to [`SimulationState::Failed`].
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<IterationReport, SimError> {
        let population = self.population.as_mut().ok_or(SimError::NotPopulated)?;
        let iteration = match self.state {
            SimulationState::NotStarted => 1,
            SimulationState::Running { iteration } => iteration + 1,
            SimulationState::Converged { .. }
            | SimulationState::Exhausted { .. }
            | SimulationState::Failed { .. } => {
                return Err(SimError::Finished);
            }
        };

        let threshold = self.config.similarity_threshold;
        let snapshot = population.sweep_snapshot();
        let mut moves = 0;
        for (cell, _) in snapshot.iter() {
            match attempt_move(population, &snapshot, cell, threshold, rng) {
                Ok(true) => moves += 1,
                Ok(false) => {}
                Err(e) => {
                    warn!(iteration, %cell, error = %e, "relocation failed");
                    self.state = SimulationState::Failed { iteration };
                    return Err(e.into());
                }
            }
        }

        let report = IterationReport { iteration, moves };
        info!(iteration, moves, "sweep complete");
        self.history.push(report);

        self.state = if moves == 0 {
            SimulationState::Converged {
                iterations: iteration,
            }
        } else if iteration >= self.config.n_iterations {
            SimulationState::Exhausted {
                iterations: iteration,
            }
        } else {
            SimulationState::Running { iteration }
        };
        if let Some(outcome) = self.outcome() {
            info!(?outcome, "simulation finished");
        }
        Ok(report)
    }

    /// Step the current population until the run terminates, calling
    /// `observer` after every sweep.
    pub fn finish<R, F>(&mut self, rng: &mut R, mut observer: F) -> Result<RunOutcome, SimError>
    where
        R: Rng + ?Sized,
        F: FnMut(&IterationReport),
    {
        let _span = info_span!(
            "simulation",
            width = self.config.width,
            height = self.config.height,
            races = self.config.races,
            threshold = self.config.similarity_threshold,
        )
        .entered();
        loop {
            let report = self.step(rng)?;
            observer(&report);
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
        }
    }

    /// Build a fresh population and run it to completion.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<RunOutcome, SimError> {
        self.run_with_observer(rng, |_| {})
    }

    /// [`run()`](Self::run), reporting each sweep to `observer`.
    pub fn run_with_observer<R, F>(&mut self, rng: &mut R, observer: F) -> Result<RunOutcome, SimError>
    where
        R: Rng + ?Sized,
        F: FnMut(&IterationReport),
    {
        self.populate(rng)?;
        self.finish(rng, observer)
    }

    /// Populate, capture the initial state, run to completion, and report.
    pub fn perform<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SimulationReport, SimError> {
        let initial = PopulationSnapshot::capture(self.populate(rng)?);
        let outcome = self.finish(rng, |_| {})?;
        let population = self.population.as_ref().ok_or(SimError::NotPopulated)?;
        let average_similarity = average_similarity(population);
        debug!(?average_similarity, "final segregation");
        Ok(SimulationReport {
            races: self.config.races,
            similarity_threshold: self.config.similarity_threshold,
            outcome,
            history: self.history.clone(),
            initial,
            final_state: PopulationSnapshot::capture(population),
            average_similarity,
        })
    }

    /// [`perform()`](Self::perform) with a `ChaCha8Rng` seeded from
    /// `config.seed`.
    pub fn run_seeded(&mut self) -> Result<SimulationReport, SimError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.perform(&mut rng)
    }
}
