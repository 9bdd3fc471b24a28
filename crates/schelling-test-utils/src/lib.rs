//! Test utilities and fixtures for Schelling model development.
//!
//! Provides a deterministic RNG constructor and [`population_from_rows`],
//! which builds a
//! [`Population`](schelling_engine::Population) with an exact, human-readable layout.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{config_for_rows, population_from_rows, seeded_rng};

