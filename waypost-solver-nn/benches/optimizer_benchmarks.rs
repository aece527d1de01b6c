//! Criterion benchmarks for the nearest-neighbour optimiser.
//!
//! Measures optimisation time across fleet sizes (25, 50, 100, 200 stops)
//! with and without 2-opt refinement.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package waypost-solver-nn
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use waypost_core::{RouteOptimizer, RouteRequest};
use waypost_solver_nn::{NearestNeighbourConfig, NearestNeighbourOptimizer};

mod bench_support;

use bench_support::{BENCHMARK_SEED, DEPOT, generate_clustered_points};

/// Fleet sizes to benchmark.
const PROBLEM_SIZES: &[usize] = &[25, 50, 100, 200];

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_neighbour");
    for &size in PROBLEM_SIZES {
        let request = RouteRequest::new(DEPOT, generate_clustered_points(size, BENCHMARK_SEED));
        group.throughput(Throughput::Elements(size as u64));

        for refine in [false, true] {
            let optimizer = NearestNeighbourOptimizer::with_config(NearestNeighbourConfig {
                refine,
                ..NearestNeighbourConfig::default()
            });
            let label = if refine { "greedy+2opt" } else { "greedy" };
            group.bench_with_input(BenchmarkId::new(label, size), &request, |b, req| {
                b.iter(|| optimizer.optimize(req));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_optimize);
criterion_main!(benches);
