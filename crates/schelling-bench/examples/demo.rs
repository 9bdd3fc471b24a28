//! Reference study: the three reference runs, then the default threshold
//! sweep.
//!
//! Set `RUST_LOG=info` to see per-sweep progress, or `RUST_LOG=debug` for
//! population details.

use schelling_bench::{format_sweep_table, reference_runs, run_threshold_study};
use schelling_engine::Simulation;
use tracing_subscriber::EnvFilter;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    println!("=== Schelling Reference Runs ===\n");
    for config in reference_runs(0) {
        let threshold = config.similarity_threshold;
        let mut sim = Simulation::new(config).unwrap();
        let report = sim.run_seeded().unwrap();

        println!(
            "threshold {threshold:.1}: {:?} after {} sweeps, {} moves",
            report.outcome,
            report.outcome.iterations(),
            report.total_moves(),
        );
        match report.average_similarity {
            Some(v) => println!("  average similarity {v:.4}"),
            None => println!("  no agents"),
        }
        println!("\nInitial:\n{}\n\nFinal:\n{}\n", report.initial, report.final_state);
    }

    println!("=== Threshold Sweep ===\n");
    let points = run_threshold_study(0).unwrap();
    print!("{}", format_sweep_table(&points));
}
