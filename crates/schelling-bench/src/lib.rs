//! Reference profiles for benchmarking and studying the Schelling model.
//!
//! - [`reference_runs`]: the three 50x50 runs at thresholds 0.3, 0.5, 0.8
//! - [`stress_profile`]: a 200x200 grid for stress testing
//! - [`run_threshold_study`]: the default threshold sweep, seeded
//! - [`format_sweep_table`]: `(threshold, average_similarity)` rows as text

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt::Write as _;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use schelling_engine::{
    threshold_sweep, SimError, SimulationConfig, SweepPoint, DEFAULT_SWEEP_THRESHOLDS,
};
use tracing::info;

/// Thresholds of the three reference runs.
pub const REFERENCE_THRESHOLDS: [f64; 3] = [0.3, 0.5, 0.8];

/// Build a reference run: 50x50 grid, empty ratio 0.3, two races,
/// 500 iterations.
pub fn reference_profile(similarity_threshold: f64, seed: u64) -> SimulationConfig {
    SimulationConfig {
        similarity_threshold,
        seed,
        ..SimulationConfig::default()
    }
}

/// The three reference runs, in threshold order.
pub fn reference_runs(seed: u64) -> Vec<SimulationConfig> {
    REFERENCE_THRESHOLDS
        .iter()
        .map(|&threshold| reference_profile(threshold, seed))
        .collect()
}

/// Build a stress profile: 200x200 grid (40K cells), four races.
///
/// Same density as [`reference_profile`] at 16x the cell count.
pub fn stress_profile(seed: u64) -> SimulationConfig {
    SimulationConfig {
        width: 200,
        height: 200,
        races: 4,
        similarity_threshold: 0.5,
        seed,
        ..SimulationConfig::default()
    }
}

/// Run [`DEFAULT_SWEEP_THRESHOLDS`] over [`SimulationConfig::sweep_base`]
/// with one `ChaCha8Rng` seeded from `seed`.
pub fn run_threshold_study(seed: u64) -> Result<Vec<SweepPoint>, SimError> {
    let base = SimulationConfig {
        seed,
        ..SimulationConfig::sweep_base()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points = threshold_sweep(&base, &DEFAULT_SWEEP_THRESHOLDS, &mut rng)?;
    info!(points = points.len(), seed, "threshold study complete");
    Ok(points)
}

/// Render sweep points as a fixed-width table.
///
/// Grids without agents print `-` in place of the metric.
pub fn format_sweep_table(points: &[SweepPoint]) -> String {
    let mut out = String::from("threshold  avg_similarity  iterations\n");
    for point in points {
        let avg = match point.average_similarity {
            Some(v) => format!("{v:.4}"),
            None => "-".to_string(),
        };
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{:>9.2}  {:>14}  {:>10}",
            point.threshold,
            avg,
            point.outcome.iterations()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use schelling_engine::RunOutcome;

    #[test]
    fn reference_runs_validate() {
        let runs = reference_runs(42);
        assert_eq!(runs.len(), 3);
        for (config, &threshold) in runs.iter().zip(REFERENCE_THRESHOLDS.iter()) {
            config.validate().unwrap();
            assert_eq!(config.similarity_threshold, threshold);
            assert_eq!((config.width, config.height), (50, 50));
            assert_eq!(config.empty_ratio, 0.3);
            assert_eq!(config.races, 2);
            assert_eq!(config.n_iterations, 500);
        }
    }

    #[test]
    fn stress_profile_validates() {
        let config = stress_profile(42);
        config.validate().unwrap();
        assert_eq!(config.empty_count(), 12_000);
    }

    #[test]
    fn sweep_table_has_one_row_per_point() {
        let points = [
            SweepPoint {
                threshold: 0.1,
                average_similarity: Some(0.51234),
                outcome: RunOutcome::Converged { iterations: 3 },
            },
            SweepPoint {
                threshold: 0.7,
                average_similarity: None,
                outcome: RunOutcome::Exhausted { iterations: 500 },
            },
        ];
        let table = format_sweep_table(&points);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("0.10"));
        assert!(lines[1].contains("0.5123"));
        assert!(lines[2].contains("0.70"));
        assert!(lines[2].trim_end().ends_with("500"));
        assert!(lines[2].contains(" - "));
    }
}
