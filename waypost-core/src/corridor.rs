//! Find candidate stops that sit close to an existing route.
//!
//! Used to suggest opportunistic visits: devices that are not on the planned
//! route but are cheap to add because the vehicle already passes nearby.

use std::collections::HashSet;

use crate::{Route, RoutePoint, haversine_distance};

/// Default corridor half-width in kilometres.
pub const DEFAULT_CORRIDOR_BUFFER_KM: f64 = 10.0;

/// Return candidates within `buffer_km` of any vertex of `route`'s path.
///
/// Candidates whose id already appears on the route are skipped. Results keep
/// the order of `candidates`. A negative or non-finite buffer matches
/// nothing.
///
/// # Examples
/// ```
/// use waypost_core::{Coordinate, Route, RoutePoint, points_along_route};
///
/// let route = Route::round_trip(
///     Coordinate::new(0.0, 0.0),
///     vec![RoutePoint::new("a", Coordinate::new(0.0, 1.0))],
/// );
/// let candidates = [
///     RoutePoint::new("near", Coordinate::new(0.05, 1.0)),
///     RoutePoint::new("far", Coordinate::new(5.0, 5.0)),
/// ];
/// let nearby = points_along_route(&route, &candidates, 10.0);
/// assert_eq!(nearby.len(), 1);
/// assert_eq!(nearby[0].id, "near");
/// ```
#[must_use]
pub fn points_along_route(
    route: &Route,
    candidates: &[RoutePoint],
    buffer_km: f64,
) -> Vec<RoutePoint> {
    if !buffer_km.is_finite() || buffer_km < 0.0 {
        return Vec::new();
    }
    let on_route: HashSet<&str> = route.stops().iter().map(|stop| stop.id.as_str()).collect();
    candidates
        .iter()
        .filter(|candidate| !on_route.contains(candidate.id.as_str()))
        .filter(|candidate| {
            route
                .path()
                .any(|vertex| haversine_distance(vertex, candidate.location) <= buffer_km)
        })
        .cloned()
        .collect()
}
