//! Core types and traits for the Schelling segregation model.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: cell coordinates,
//! agent categories, neighbourhood evaluations, the [`Occupancy`] read
//! trait and the invariant-violation error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod evaluation;
pub mod id;
pub mod traits;

pub use error::InvariantViolation;
pub use evaluation::Evaluation;
pub use id::{Category, Cell, MAX_RACES};
pub use traits::Occupancy;
