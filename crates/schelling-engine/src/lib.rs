//! Simulation engine for the Schelling segregation model.
//!
//! A [`Simulation`] owns one [`Population`] per run. Each iteration it
//! freezes the occupancy into a [`SweepSnapshot`], asks every agent of the
//! snapshot whether it is satisfied with its neighbourhood (evaluated
//! against the frozen view), and relocates unsatisfied agents to a
//! uniformly random empty cell of the live population. The run stops when
//! a sweep makes no moves or the iteration budget is spent.
//!
//! After a run, [`average_similarity`] summarises how segregated the grid
//! became, and [`threshold_sweep`] tabulates that figure across a range of
//! similarity thresholds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod evaluate;
pub mod metrics;
pub mod population;
pub mod relocation;
pub mod report;
pub mod simulation;
pub mod snapshot;
pub mod study;

pub use config::{ConfigError, SimulationConfig, SimulationConfigBuilder};
pub use error::SimError;
pub use evaluate::{evaluate, evaluate_in, is_satisfied};
pub use metrics::{average_similarity, IterationReport};
pub use population::Population;
pub use relocation::attempt_move;
pub use report::{PopulationSnapshot, SimulationReport};
pub use simulation::{RunOutcome, Simulation, SimulationState};
pub use snapshot::SweepSnapshot;
pub use study::{threshold_sweep, SweepPoint, DEFAULT_SWEEP_THRESHOLDS};
