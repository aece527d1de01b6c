//! Greedy nearest-neighbour construction.
//!
//! Starting from the depot, repeatedly walk to the closest stop not yet
//! visited. Distance ties go to the stop that appears first among the
//! remaining stops, which in turn preserves the caller's input order, so the
//! output is fully determined by the input. The scan is `O(n²)` and suits
//! tens of stops.

use waypost_core::{Coordinate, RoutePoint, haversine_distance};

/// Order `points` by greedy nearest-neighbour walk from `start`.
///
/// Returns a reordered copy; `points` is not modified. Empty input yields an
/// empty route. Stops whose distance is not a number are only chosen once no
/// measurable stop remains, and then in input order, so malformed
/// coordinates trail the route instead of hijacking it.
///
/// # Examples
/// ```
/// use waypost_core::{Coordinate, RoutePoint};
/// use waypost_solver_nn::nearest_neighbour_route;
///
/// let points = [
///     RoutePoint::new("a", Coordinate::new(0.0, 10.0)),
///     RoutePoint::new("b", Coordinate::new(0.0, 5.0)),
///     RoutePoint::new("c", Coordinate::new(0.0, 1.0)),
/// ];
/// let route = nearest_neighbour_route(Coordinate::new(0.0, 0.0), &points);
/// let ids: Vec<&str> = route.iter().map(|p| p.id.as_str()).collect();
/// assert_eq!(ids, ["c", "b", "a"]);
/// ```
#[must_use]
pub fn nearest_neighbour_route(start: Coordinate, points: &[RoutePoint]) -> Vec<RoutePoint> {
    let mut unvisited: Vec<&RoutePoint> = points.iter().collect();
    let mut route = Vec::with_capacity(points.len());
    let mut current = start;
    while let Some(index) = nearest_index(current, &unvisited) {
        let next = unvisited.remove(index);
        current = next.location;
        route.push(next.clone());
    }
    route
}

/// Index of the candidate strictly closest to `from`, first seen on ties.
///
/// Falls back to the first candidate when no distance is a number.
fn nearest_index(from: Coordinate, candidates: &[&RoutePoint]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let distance = haversine_distance(from, candidate.location);
        if distance.is_nan() {
            continue;
        }
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
        .or_else(|| (!candidates.is_empty()).then_some(0))
}
