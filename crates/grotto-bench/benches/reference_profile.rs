//! Criterion benchmarks for whole-map generation and edit commits.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grotto_bench::{reference_map, reference_profile, stress_profile};
use grotto_map::generate_map;
use grotto_region::VoronoiPartitioner;

/// Benchmark: generate the 2000-region reference map.
fn bench_generate_reference(c: &mut Criterion) {
    let config = reference_profile(42).unwrap();
    let partitioner = VoronoiPartitioner::new(config.bounds);

    c.bench_function("generate_reference_2k", |b| {
        b.iter(|| {
            black_box(generate_map(&config, &partitioner).unwrap());
        });
    });
}

/// Benchmark: generate the 10K-region stress map.
fn bench_generate_stress(c: &mut Criterion) {
    let config = stress_profile(42).unwrap();
    let partitioner = VoronoiPartitioner::new(config.bounds);

    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("generate_stress_10k", |b| {
        b.iter(|| {
            black_box(generate_map(&config, &partitioner).unwrap());
        });
    });
    group.finish();
}

/// Benchmark: toggle one region and commit (full border recompute).
fn bench_toggle_commit(c: &mut Criterion) {
    let mut map = reference_map(42).unwrap();
    let site = map.model.regions()[0].site();

    c.bench_function("toggle_commit_reference", |b| {
        b.iter(|| {
            map.model.toggle_at(site).unwrap();
            black_box(map.model.commit_edit().unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_generate_reference,
    bench_generate_stress,
    bench_toggle_commit
);
criterion_main!(benches);
