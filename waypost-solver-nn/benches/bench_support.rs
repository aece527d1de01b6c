//! Benchmark support utilities for the nearest-neighbour optimiser.
//!
//! Provides deterministic stop generation with clustered distributions so
//! benchmark runs are reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use waypost_core::{Coordinate, RoutePoint};

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Number of cluster centres, e.g. towns in a deployment region.
const CLUSTER_COUNT: usize = 5;

/// Spread of stops around a cluster centre (in degrees, ~5 km).
const CLUSTER_SPREAD: f64 = 0.05;

/// Side of the square region cluster centres fall in (in degrees, ~100 km).
const AREA_SIZE: f64 = 1.0;

/// Depot at the south-west corner of the benchmark region.
pub const DEPOT: Coordinate = Coordinate::new(0.0, 32.0);

/// Generate a clustered stop distribution for benchmarks.
#[must_use]
pub fn generate_clustered_points(count: usize, seed: u64) -> Vec<RoutePoint> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let centres: Vec<Coordinate> = (0..CLUSTER_COUNT)
        .map(|_| {
            #[expect(clippy::float_arithmetic, reason = "Required for coordinate offset")]
            let centre = Coordinate::new(
                DEPOT.latitude + rng.gen_range(0.0..AREA_SIZE),
                DEPOT.longitude + rng.gen_range(0.0..AREA_SIZE),
            );
            centre
        })
        .collect();

    (0..count)
        .map(|i| {
            #[expect(
                clippy::integer_division_remainder_used,
                reason = "Modulo for cyclic assignment is intentional"
            )]
            let cluster_idx = i % CLUSTER_COUNT;
            let centre = centres.get(cluster_idx).copied().unwrap_or(DEPOT);

            #[expect(clippy::float_arithmetic, reason = "Required for coordinate offset")]
            let location = Coordinate::new(
                centre.latitude + rng.gen_range(-CLUSTER_SPREAD..CLUSTER_SPREAD),
                centre.longitude + rng.gen_range(-CLUSTER_SPREAD..CLUSTER_SPREAD),
            );
            RoutePoint::new(format!("device-{i}"), location)
        })
        .collect()
}
