//! Test-only utilities for `waypost-solver-nn`.
//!
//! The helpers in this module are available to unit tests, behavioural tests
//! and benchmarks. They are gated behind the `test-support` feature (and
//! `cfg(test)`).

use waypost_core::{Coordinate, RoutePoint, path_distance};

/// Length of `start → stops… → end` in kilometres.
///
/// # Examples
/// ```rust
/// use waypost_core::{Coordinate, RoutePoint};
/// use waypost_solver_nn::test_support::route_length;
///
/// let depot = Coordinate::new(0.0, 0.0);
/// let stops = [RoutePoint::new("a", Coordinate::new(0.0, 1.0))];
/// assert!((route_length(depot, depot, &stops) - 222.39).abs() < 1.0);
/// ```
#[must_use]
pub fn route_length(start: Coordinate, end: Coordinate, stops: &[RoutePoint]) -> f64 {
    path_distance(
        std::iter::once(start)
            .chain(stops.iter().map(|stop| stop.location))
            .chain(std::iter::once(end)),
    )
}

/// Shortest achievable [`route_length`] over every ordering of `stops`.
///
/// Enumerates all permutations, so only use it for a handful of stops.
/// Returns the length of the empty route when `stops` is empty.
#[must_use]
pub fn optimal_route_length(start: Coordinate, end: Coordinate, stops: &[RoutePoint]) -> f64 {
    let mut order = stops.to_vec();
    let mut best = route_length(start, end, &order);
    permute(&mut order, 0, &mut |candidate| {
        best = best.min(route_length(start, end, candidate));
    });
    best
}

/// Recursive permutation by swapping, visiting each ordering once.
fn permute<F>(items: &mut [RoutePoint], fixed: usize, visit: &mut F)
where
    F: FnMut(&[RoutePoint]),
{
    if fixed >= items.len() {
        visit(items);
        return;
    }
    for swap_with in fixed..items.len() {
        items.swap(fixed, swap_with);
        permute(items, fixed + 1, visit);
        items.swap(fixed, swap_with);
    }
}
