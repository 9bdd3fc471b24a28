//! Criterion benchmarks for whole reference runs and single sweeps.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use schelling_bench::{reference_profile, stress_profile};
use schelling_engine::Simulation;
use schelling_test_utils::seeded_rng;

fn bench_sweep_2500(c: &mut Criterion) {
    let config = reference_profile(0.8, 42);
    let mut rng = seeded_rng(42);

    c.bench_function("sweep_2500", |b| {
        b.iter_batched(
            || {
                let mut sim = Simulation::new(config.clone()).unwrap();
                sim.populate(&mut rng).unwrap();
                sim
            },
            |mut sim| {
                let report = sim.step(&mut seeded_rng(7)).unwrap();
                black_box(report);
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_sweep_40k(c: &mut Criterion) {
    let config = stress_profile(42);
    let mut rng = seeded_rng(42);

    c.bench_function("sweep_40k", |b| {
        b.iter_batched(
            || {
                let mut sim = Simulation::new(config.clone()).unwrap();
                sim.populate(&mut rng).unwrap();
                sim
            },
            |mut sim| {
                let report = sim.step(&mut seeded_rng(7)).unwrap();
                black_box(report);
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

fn bench_reference_run_03(c: &mut Criterion) {
    let config = reference_profile(0.3, 42);

    let mut group = c.benchmark_group("reference_run");
    group.sample_size(20);
    group.bench_function("threshold_0.3", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(config.clone()).unwrap();
            let report = sim.run_seeded().unwrap();
            black_box(report.average_similarity);
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_sweep_2500,
    bench_sweep_40k,
    bench_reference_run_03
);
criterion_main!(benches);
