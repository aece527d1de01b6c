//! Fixtures shared by unit, behaviour and property tests across the
//! workspace.

use crate::{Coordinate, RoutePoint};

/// Build a stop from an id and a `(latitude, longitude)` pair.
#[must_use]
pub fn point(id: &str, latitude: f64, longitude: f64) -> RoutePoint {
    RoutePoint::new(id, Coordinate::new(latitude, longitude))
}

/// The depot used throughout the fixtures: the origin.
#[must_use]
pub const fn origin() -> Coordinate {
    Coordinate::new(0.0, 0.0)
}

/// Ids of `points` in order.
#[must_use]
pub fn ids(points: &[RoutePoint]) -> Vec<&str> {
    points.iter().map(|p| p.id.as_str()).collect()
}

/// Whether `output` holds the same ids as `input`, each as often.
#[must_use]
pub fn is_permutation_of(input: &[RoutePoint], output: &[RoutePoint]) -> bool {
    let mut expected = ids(input);
    let mut actual = ids(output);
    expected.sort_unstable();
    actual.sort_unstable();
    expected == actual
}
