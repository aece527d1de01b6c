//! Great-circle distance on a spherical Earth.
//!
//! Distances are in kilometres and use a mean Earth radius of
//! [`EARTH_RADIUS_KM`]. The functions here are total: non-finite input
//! propagates to non-finite output rather than failing.

use crate::Coordinate;

/// Mean Earth radius used by [`haversine_distance`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometres.
///
/// # Examples
/// ```
/// use waypost_core::{Coordinate, haversine_distance};
///
/// let origin = Coordinate::new(0.0, 0.0);
/// let east = Coordinate::new(0.0, 1.0);
/// let km = haversine_distance(origin, east);
/// assert!((km - 111.19).abs() < 0.5);
/// assert_eq!(haversine_distance(origin, origin), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_distance(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let half_dlat = (to.latitude - from.latitude).to_radians() / 2.0;
    let half_dlon = (to.longitude - from.longitude).to_radians() / 2.0;

    let raw = half_dlon
        .sin()
        .powi(2)
        .mul_add(lat1.cos() * lat2.cos(), half_dlat.sin().powi(2));
    // Rounding can push the term fractionally past 1 near the antipode.
    let a = raw.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Sum of haversine legs along `coords`, in kilometres.
///
/// Fewer than two coordinates yield zero.
///
/// # Examples
/// ```
/// use waypost_core::{Coordinate, path_distance};
///
/// let legs = [
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(0.0, 1.0),
///     Coordinate::new(0.0, 0.0),
/// ];
/// assert!((path_distance(legs) - 222.39).abs() < 1.0);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "summing leg distances")]
pub fn path_distance<I>(coords: I) -> f64
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut iter = coords.into_iter();
    let Some(mut previous) = iter.next() else {
        return 0.0;
    };
    let mut total = 0.0;
    for next in iter {
        total += haversine_distance(previous, next);
        previous = next;
    }
    total
}
