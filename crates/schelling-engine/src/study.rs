//! Threshold study: how segregation grows with individual preference.
//!
//! Runs one independent simulation per similarity threshold and tabulates
//! the final [`average_similarity`](crate::average_similarity). Plotting
//! the resulting curve is left to the caller.

use rand::Rng;
use tracing::info;

use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::simulation::{RunOutcome, Simulation};

/// Thresholds of the reference study: `0.0, 0.1, ..., 0.7`.
pub const DEFAULT_SWEEP_THRESHOLDS: [f64; 8] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];

/// One row of a threshold study.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepPoint {
    /// Similarity threshold of the run.
    pub threshold: f64,
    /// Final segregation metric, `None` if the grid had no agents.
    pub average_similarity: Option<f64>,
    /// How the run ended.
    pub outcome: RunOutcome,
}

/// Run `base` once per threshold and collect the final segregation metric.
///
/// Each run builds a fresh population. `rng` is threaded through the runs
/// in input order, so the whole study is reproducible from one seed.
/// Results are returned in the order of `thresholds`.
pub fn threshold_sweep<R: Rng + ?Sized>(
    base: &SimulationConfig,
    thresholds: &[f64],
    rng: &mut R,
) -> Result<Vec<SweepPoint>, SimError> {
    let mut points = Vec::with_capacity(thresholds.len());
    for &threshold in thresholds {
        let config = SimulationConfig {
            similarity_threshold: threshold,
            ..base.clone()
        };
        let mut sim = Simulation::new(config)?;
        let report = sim.perform(rng)?;
        info!(
            threshold,
            average_similarity = ?report.average_similarity,
            iterations = report.outcome.iterations(),
            "threshold point complete"
        );
        points.push(SweepPoint {
            threshold,
            average_similarity: report.average_similarity,
            outcome: report.outcome,
        });
    }
    Ok(points)
}
