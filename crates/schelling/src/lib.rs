//! Schelling: the Schelling model of residential segregation.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Schelling sub-crates. For most users, adding `schelling` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use schelling::prelude::*;
//!
//! // A 30x30 grid, a third empty, three races, mildly demanding agents.
//! let config = SimulationConfig::builder()
//!     .dimensions(30, 30)
//!     .empty_ratio(0.3)
//!     .races(3)
//!     .similarity_threshold(0.4)
//!     .n_iterations(100)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut sim = Simulation::new(config).unwrap();
//! let report = sim.run_seeded().unwrap();
//!
//! assert_eq!(report.initial.agents.len(), report.final_state.agents.len());
//! assert_eq!(report.history.len(), report.outcome.iterations() as usize);
//! let similarity = report.average_similarity.unwrap();
//! assert!((0.0..=1.0).contains(&similarity));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `schelling-core` | Cells, categories, neighbour evaluations, occupancy trait |
//! | [`space`] | `schelling-space` | Bounded grid and Moore neighbourhood |
//! | [`engine`] | `schelling-engine` | Configuration, population, sweeps, metric, studies |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`schelling-core`).
///
/// Contains [`types::Cell`], [`types::Category`], [`types::Evaluation`],
/// and the [`types::Occupancy`] view trait.
pub use schelling_core as types;

/// Bounded grid geometry (`schelling-space`).
///
/// [`space::Grid`] enumerates cells and clips the eight-cell neighbourhood
/// at the edges.
pub use schelling_space as space;

/// Simulation engine (`schelling-engine`).
///
/// [`engine::Simulation`] drives sweeps over an [`engine::Population`];
/// [`engine::threshold_sweep`] runs one simulation per threshold.
pub use schelling_engine as engine;

/// Common imports for typical Schelling usage.
///
/// ```rust
/// use schelling::prelude::*;
/// ```
///
/// This imports configuration, the simulation driver, reports, the metric,
/// and the core cell types.
pub mod prelude {
    // Core types
    pub use schelling_core::{Category, Cell, Evaluation};

    // Space
    pub use schelling_space::Grid;

    // Errors
    pub use schelling_core::InvariantViolation;
    pub use schelling_engine::{ConfigError, SimError};

    // Engine
    pub use schelling_engine::{
        average_similarity, threshold_sweep, IterationReport, Population, PopulationSnapshot,
        RunOutcome, Simulation, SimulationConfig, SimulationReport, SweepPoint,
    };
}
