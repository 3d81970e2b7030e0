//! Criterion benchmarks for hill climbing with random restarts.
//!
//! Uses uniformly scattered points so the measurement reflects the
//! O(n^2) neighborhood scan with O(n) tour evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_tsp_climb::climb::HillClimber;
use u_tsp_climb::dataset;
use u_tsp_climb::distance::{DistanceMatrix, Point};
use u_tsp_climb::TspSolver;

fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            Point::new(
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..100.0),
                format!("P{i}"),
            )
        })
        .collect()
}

fn bench_single_climb(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_climb");
    group.sample_size(10);

    for &n in &[10usize, 20, 40] {
        let matrix = DistanceMatrix::from_points(&random_points(n, 42));
        let start: Vec<usize> = (0..n).rev().collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &(matrix, start), |b, (m, s)| {
            b.iter(|| {
                let result = HillClimber::climb(black_box(m), black_box(s.clone()));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_campus_restarts(c: &mut Criterion) {
    let mut group = c.benchmark_group("campus_restarts");
    group.sample_size(10);

    for &k in &[10usize, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            let mut solver = TspSolver::new(dataset::campuses())
                .expect("valid")
                .with_seed(42);
            b.iter(|| {
                solver.run(black_box(k)).expect("run");
                black_box(solver.best_distance())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_climb, bench_campus_restarts);
criterion_main!(benches);
