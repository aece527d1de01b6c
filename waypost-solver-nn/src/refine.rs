//! 2-opt improvement over a constructed route.
//!
//! The pass treats the route as the open path `start → stops… → end` and
//! reverses a contiguous run of stops whenever doing so shortens that path.
//! Because the end location is part of the cost, a route finishing away from
//! its depot is pulled towards that end, which the greedy construction alone
//! ignores.

use waypost_core::{Coordinate, RoutePoint, haversine_distance};

/// Improve `stops` in place with 2-opt segment reversals.
///
/// Each pass tries every segment `[i, j]` and applies a reversal when it
/// shortens the path by more than `epsilon_km`. Passes repeat until one makes
/// no change or `max_passes` have run. Returns the number of passes run.
///
/// # Examples
/// ```
/// use waypost_core::{Coordinate, RoutePoint, path_distance};
/// use waypost_solver_nn::two_opt_refine;
///
/// let depot = Coordinate::new(0.0, 0.0);
/// let mut stops = vec![
///     RoutePoint::new("ne", Coordinate::new(1.0, 1.0)),
///     RoutePoint::new("n", Coordinate::new(1.0, 0.0)),
///     RoutePoint::new("e", Coordinate::new(0.0, 1.0)),
/// ];
/// let length = |stops: &[RoutePoint]| {
///     path_distance(
///         std::iter::once(depot)
///             .chain(stops.iter().map(|s| s.location))
///             .chain(std::iter::once(depot)),
///     )
/// };
/// let before = length(stops.as_slice());
/// let passes = two_opt_refine(depot, depot, &mut stops, 100, 1e-9);
/// assert!(passes >= 1);
/// assert!(length(stops.as_slice()) < before);
/// ```
pub fn two_opt_refine(
    start: Coordinate,
    end: Coordinate,
    stops: &mut [RoutePoint],
    max_passes: u32,
    epsilon_km: f64,
) -> u32 {
    let len = stops.len();
    if len < 2 || max_passes == 0 {
        return 0;
    }

    let mut passes = 0;
    while passes < max_passes {
        passes += 1;
        let mut improved = false;
        for i in 0..len - 1 {
            for j in i + 1..len {
                let Some(gain) = reversal_gain(start, end, stops, i, j) else {
                    continue;
                };
                if gain > epsilon_km
                    && let Some(segment) = stops.get_mut(i..=j)
                {
                    segment.reverse();
                    improved = true;
                }
            }
        }
        if !improved {
            return passes;
        }
    }

    if has_improving_move(start, end, stops, epsilon_km) {
        log::warn!("2-opt refinement hit its pass cap of {max_passes} with improving moves left");
    }
    passes
}

/// Whether any single reversal would still save more than `epsilon_km`.
fn has_improving_move(
    start: Coordinate,
    end: Coordinate,
    stops: &[RoutePoint],
    epsilon_km: f64,
) -> bool {
    let len = stops.len();
    (0..len.saturating_sub(1)).any(|i| {
        (i + 1..len).any(|j| {
            reversal_gain(start, end, stops, i, j).is_some_and(|gain| gain > epsilon_km)
        })
    })
}

/// Kilometres saved by reversing `stops[i..=j]`; `None` if out of bounds.
#[expect(
    clippy::float_arithmetic,
    reason = "2-opt compares sums of leg distances"
)]
fn reversal_gain(
    start: Coordinate,
    end: Coordinate,
    stops: &[RoutePoint],
    i: usize,
    j: usize,
) -> Option<f64> {
    let before = if i == 0 {
        start
    } else {
        stops.get(i - 1)?.location
    };
    let after = stops.get(j + 1).map_or(end, |stop| stop.location);
    let first = stops.get(i)?.location;
    let last = stops.get(j)?.location;

    let current = haversine_distance(before, first) + haversine_distance(last, after);
    let reversed = haversine_distance(before, last) + haversine_distance(first, after);
    Some(current - reversed)
}
