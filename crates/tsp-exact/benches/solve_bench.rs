//! Criterion benchmarks for the exhaustive solver.
//! Focus sizes: n in {4, 6, 8, 9}; one bench per facade so the streaming
//! overhead (a tour clone per step) shows up next to the batch fold.
//! Results: by default under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, SeedableRng};
use tsp_exact::api::{sample_points_with, solve, solve_streaming, tour_count, SampleCfg};

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(10);
    for &n in &[4usize, 6, 8, 9] {
        let mut rng = StdRng::seed_from_u64(43 + n as u64);
        let pts = sample_points_with(&mut rng, SampleCfg::new(n));
        if let Some(tours) = tour_count(n) {
            group.throughput(Throughput::Elements(tours));
        }
        group.bench_with_input(BenchmarkId::new("batch", n), &pts, |b, pts| {
            b.iter(|| solve(black_box(pts)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("stream_drain", n), &pts, |b, pts| {
            b.iter(|| solve_streaming(black_box(pts)).unwrap().finish())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
