//! Top-level error type for simulation runs.

use std::error::Error;
use std::fmt;

use schelling_core::InvariantViolation;

use crate::config::ConfigError;

/// Errors from [`Simulation`](crate::Simulation) operations.
#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    /// The configuration was rejected before any grid was built.
    Config(ConfigError),
    /// Population bookkeeping broke an invariant mid-run.
    Invariant(InvariantViolation),
    /// [`step`](crate::Simulation::step) was called before
    /// [`populate`](crate::Simulation::populate).
    NotPopulated,
    /// [`step`](crate::Simulation::step) was called after the run reached
    /// a terminal state.
    Finished,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Invariant(e) => write!(f, "invariant violated: {e}"),
            Self::NotPopulated => write!(f, "simulation has not been populated"),
            Self::Finished => write!(f, "simulation already finished"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Invariant(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<InvariantViolation> for SimError {
    fn from(e: InvariantViolation) -> Self {
        Self::Invariant(e)
    }
}
