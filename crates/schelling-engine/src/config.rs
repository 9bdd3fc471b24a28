//! Simulation configuration, validation, and error types.
//!
//! [`SimulationConfig`] is the immutable input of one simulation run.
//! [`validate()`](SimulationConfig::validate) checks every field before a
//! grid is built; [`SimulationConfig::builder`] offers a validating
//! builder for callers that only override a few defaults.

use std::error::Error;
use std::fmt;

use schelling_core::MAX_RACES;
use schelling_space::{Grid, SpaceError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimulationConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid extents are unusable (zero or too large).
    Space(SpaceError),
    /// `races` is outside `1..=4`.
    InvalidRaces {
        /// The configured race count.
        races: u8,
    },
    /// `empty_ratio` is NaN, infinite, or outside `[0, 1)`.
    InvalidEmptyRatio {
        /// The invalid value.
        value: f64,
    },
    /// `similarity_threshold` is NaN, infinite, or outside `[0, 1]`.
    InvalidThreshold {
        /// The invalid value.
        value: f64,
    },
    /// `n_iterations` is zero.
    InvalidIterations,
    /// A supplied population does not match the configured extents.
    GridMismatch {
        /// `(width, height)` from the configuration.
        expected: (u32, u32),
        /// `(width, height)` of the population's grid.
        actual: (u32, u32),
    },
    /// A supplied population holds a category beyond the configured `races`.
    CategoryOutOfRange {
        /// The offending category number.
        category: u8,
        /// The configured race count.
        races: u8,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "grid: {e}"),
            Self::InvalidRaces { races } => {
                write!(f, "races must be in 1..={MAX_RACES}, got {races}")
            }
            Self::InvalidEmptyRatio { value } => {
                write!(f, "empty_ratio must be finite and in [0, 1), got {value}")
            }
            Self::InvalidThreshold { value } => {
                write!(
                    f,
                    "similarity_threshold must be finite and in [0, 1], got {value}"
                )
            }
            Self::InvalidIterations => write!(f, "n_iterations must be at least 1"),
            Self::GridMismatch { expected, actual } => write!(
                f,
                "population grid is {}x{}, configuration expects {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Self::CategoryOutOfRange { category, races } => write!(
                f,
                "population holds category {category}, configuration allows 1..={races}"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for one simulation run.
///
/// Immutable for the life of a run. The `Default` reproduces the
/// reference study: a 50×50 grid, 30% empty, two races, threshold 0.3,
/// and a budget of 500 iterations.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Grid columns. Must be at least 1.
    pub width: u32,
    /// Grid rows. Must be at least 1.
    pub height: u32,
    /// Fraction of cells left empty, in `[0, 1)`.
    pub empty_ratio: f64,
    /// Minimum similar-neighbour fraction an agent accepts, in `[0, 1]`.
    pub similarity_threshold: f64,
    /// Iteration budget. Must be at least 1.
    pub n_iterations: u32,
    /// Number of agent categories, in `1..=4`.
    pub races: u8,
    /// Seed for [`Simulation::run_seeded`](crate::Simulation::run_seeded).
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            empty_ratio: 0.3,
            similarity_threshold: 0.3,
            n_iterations: 500,
            races: 2,
            seed: 0,
        }
    }
}

impl SimulationConfig {
    /// Start a builder from the default configuration.
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder {
            config: Self::default(),
        }
    }

    /// Base configuration of the threshold study; the threshold itself is
    /// overwritten per point.
    pub fn sweep_base() -> Self {
        Self {
            similarity_threshold: 0.0,
            ..Self::default()
        }
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid extents.
        self.grid()?;
        // 2. Race count.
        if self.races == 0 || self.races > MAX_RACES {
            return Err(ConfigError::InvalidRaces { races: self.races });
        }
        // 3. Empty ratio in [0, 1).
        if !self.empty_ratio.is_finite() || !(0.0..1.0).contains(&self.empty_ratio) {
            return Err(ConfigError::InvalidEmptyRatio {
                value: self.empty_ratio,
            });
        }
        // 4. Threshold in [0, 1].
        if !self.similarity_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.similarity_threshold)
        {
            return Err(ConfigError::InvalidThreshold {
                value: self.similarity_threshold,
            });
        }
        // 5. Iteration budget.
        if self.n_iterations == 0 {
            return Err(ConfigError::InvalidIterations);
        }
        Ok(())
    }

    /// The grid described by `width` and `height`.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::new(self.width, self.height)?)
    }

    /// Number of cells left empty at build time:
    /// `floor(empty_ratio * width * height)`.
    pub fn empty_count(&self) -> usize {
        let total = (self.width as usize) * (self.height as usize);
        (self.empty_ratio * total as f64).floor() as usize
    }
}

// ── SimulationConfigBuilder ────────────────────────────────────────

/// Builder for [`SimulationConfig`]. Unset fields keep their defaults.
#[derive(Clone, Debug)]
pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl SimulationConfigBuilder {
    /// Set grid width and height.
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Set the fraction of empty cells (default: 0.3).
    pub fn empty_ratio(mut self, ratio: f64) -> Self {
        self.config.empty_ratio = ratio;
        self
    }

    /// Set the similarity threshold (default: 0.3).
    pub fn similarity_threshold(mut self, threshold: f64) -> Self {
        self.config.similarity_threshold = threshold;
        self
    }

    /// Set the iteration budget (default: 500).
    pub fn n_iterations(mut self, n: u32) -> Self {
        self.config.n_iterations = n;
        self
    }

    /// Set the number of categories (default: 2).
    pub fn races(mut self, races: u8) -> Self {
        self.config.races = races;
        self
    }

    /// Set the seed used by seeded runs (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Build the configuration, validating all fields.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
        assert!(SimulationConfig::sweep_base().validate().is_ok());
    }

    #[test]
    fn validate_zero_width_fails() {
        let cfg = SimulationConfig {
            width: 0,
            ..SimulationConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::Space(SpaceError::EmptySpace)) => {}
            other => panic!("expected Space(EmptySpace), got {other:?}"),
        }
    }

    #[test]
    fn validate_races_out_of_range_fails() {
        for races in [0u8, 5, 255] {
            let cfg = SimulationConfig {
                races,
                ..SimulationConfig::default()
            };
            assert_eq!(cfg.validate(), Err(ConfigError::InvalidRaces { races }));
        }
    }

    #[test]
    fn validate_every_race_count_in_range_succeeds() {
        for races in 1..=MAX_RACES {
            let cfg = SimulationConfig {
                races,
                ..SimulationConfig::default()
            };
            assert!(cfg.validate().is_ok(), "races = {races}");
        }
    }

    #[test]
    fn validate_empty_ratio_bounds() {
        for value in [1.0, 1.5, -0.1, f64::NAN, f64::INFINITY] {
            let cfg = SimulationConfig {
                empty_ratio: value,
                ..SimulationConfig::default()
            };
            match cfg.validate() {
                Err(ConfigError::InvalidEmptyRatio { .. }) => {}
                other => panic!("expected InvalidEmptyRatio for {value}, got {other:?}"),
            }
        }
        let zero = SimulationConfig {
            empty_ratio: 0.0,
            ..SimulationConfig::default()
        };
        assert!(zero.validate().is_ok());
    }

    #[test]
    fn validate_threshold_bounds() {
        for value in [-0.01, 1.01, f64::NAN] {
            let cfg = SimulationConfig {
                similarity_threshold: value,
                ..SimulationConfig::default()
            };
            match cfg.validate() {
                Err(ConfigError::InvalidThreshold { .. }) => {}
                other => panic!("expected InvalidThreshold for {value}, got {other:?}"),
            }
        }
        for value in [0.0, 1.0] {
            let cfg = SimulationConfig {
                similarity_threshold: value,
                ..SimulationConfig::default()
            };
            assert!(cfg.validate().is_ok());
        }
    }

    #[test]
    fn validate_zero_iterations_fails() {
        let cfg = SimulationConfig {
            n_iterations: 0,
            ..SimulationConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidIterations));
    }

    #[test]
    fn empty_count_floors() {
        let cfg = SimulationConfig {
            width: 4,
            height: 1,
            empty_ratio: 0.25,
            ..SimulationConfig::default()
        };
        assert_eq!(cfg.empty_count(), 1);
        let cfg = SimulationConfig {
            width: 3,
            height: 3,
            empty_ratio: 0.3,
            ..SimulationConfig::default()
        };
        assert_eq!(cfg.empty_count(), 2);
        assert_eq!(SimulationConfig::default().empty_count(), 750);
    }

    #[test]
    fn builder_overrides_and_validates() {
        let cfg = SimulationConfig::builder()
            .dimensions(10, 20)
            .races(3)
            .similarity_threshold(0.5)
            .empty_ratio(0.1)
            .n_iterations(7)
            .seed(99)
            .build()
            .unwrap();
        assert_eq!((cfg.width, cfg.height), (10, 20));
        assert_eq!(cfg.races, 3);
        assert_eq!(cfg.n_iterations, 7);
        assert_eq!(cfg.seed, 99);

        let err = SimulationConfig::builder().races(9).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidRaces { races: 9 });
    }

    #[test]
    fn space_error_is_source() {
        let err = ConfigError::from(SpaceError::EmptySpace);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("grid:"));
    }
}
