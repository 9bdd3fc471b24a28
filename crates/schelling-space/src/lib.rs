//! Grid coordinate utilities for the Schelling segregation model.
//!
//! [`Grid`] is a stateless description of a `width × height` lattice. It
//! enumerates every cell in canonical order and computes the 8-connected
//! neighbourhood of a cell, clipped at the grid boundary (cells outside
//! the grid are skipped, never wrapped).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::SpaceError;
pub use grid::{Grid, Neighbours, OFFSETS_8};
