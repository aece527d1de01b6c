//! Ordered stops anchored at a depot.
//!
//! A [`Route`] is the optimiser's output: the visiting order plus the start
//! and end coordinates that bracket it. [`RouteStats`] summarises the closed
//! path the vehicle actually drives.

use geo::LineString;

use crate::{Coordinate, RoutePoint, haversine_distance, path_distance};

/// A visiting order for a set of stops, starting at `start` and finishing at
/// `end`.
///
/// # Examples
/// ```
/// use waypost_core::{Coordinate, Route, RoutePoint};
///
/// let depot = Coordinate::new(0.0, 0.0);
/// let stop = RoutePoint::new("a", Coordinate::new(0.0, 1.0));
/// let route = Route::round_trip(depot, vec![stop]);
///
/// assert_eq!(route.stops().len(), 1);
/// assert_eq!(route.end(), depot);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    start: Coordinate,
    end: Coordinate,
    stops: Vec<RoutePoint>,
}

impl Route {
    /// Construct a route. `end` defaults to `start` when `None`.
    #[must_use]
    pub fn new(start: Coordinate, end: Option<Coordinate>, stops: Vec<RoutePoint>) -> Self {
        Self {
            start,
            end: end.unwrap_or(start),
            stops,
        }
    }

    /// Construct a route that returns to its start.
    #[must_use]
    pub fn round_trip(depot: Coordinate, stops: Vec<RoutePoint>) -> Self {
        Self::new(depot, None, stops)
    }

    /// Construct a route with no stops.
    ///
    /// # Examples
    /// ```
    /// use waypost_core::{Coordinate, Route};
    ///
    /// let route = Route::empty(Coordinate::new(0.0, 0.0), None);
    /// assert!(route.is_empty());
    /// assert_eq!(route.stats().distance_km, 0.0);
    /// ```
    #[must_use]
    pub fn empty(start: Coordinate, end: Option<Coordinate>) -> Self {
        Self::new(start, end, Vec::new())
    }

    /// Depot the route leaves from.
    #[must_use]
    pub const fn start(&self) -> Coordinate {
        self.start
    }

    /// Location the route finishes at.
    #[must_use]
    pub const fn end(&self) -> Coordinate {
        self.end
    }

    /// Stops in visiting order.
    #[must_use]
    pub fn stops(&self) -> &[RoutePoint] {
        &self.stops
    }

    /// Consume the route and return its stops.
    #[must_use]
    pub fn into_stops(self) -> Vec<RoutePoint> {
        self.stops
    }

    /// Whether the route visits no stops.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Whether the route finishes where it started.
    #[must_use]
    pub fn is_round_trip(&self) -> bool {
        self.start == self.end
    }

    /// Every vertex of the driven path: start, each stop, then end.
    pub fn path(&self) -> impl Iterator<Item = Coordinate> + '_ {
        std::iter::once(self.start)
            .chain(self.stops.iter().map(|stop| stop.location))
            .chain(std::iter::once(self.end))
    }

    /// The driven path as a `geo` polyline for map display.
    ///
    /// # Examples
    /// ```
    /// use waypost_core::{Coordinate, Route, RoutePoint};
    ///
    /// let depot = Coordinate::new(0.0, 0.0);
    /// let route = Route::round_trip(depot, vec![RoutePoint::new("a", Coordinate::new(1.0, 2.0))]);
    /// let line = route.line_string();
    ///
    /// assert_eq!(line.0.len(), 3);
    /// assert_eq!(line.0[1].x, 2.0);
    /// ```
    #[must_use]
    pub fn line_string(&self) -> LineString<f64> {
        self.path().map(geo::Coord::from).collect()
    }

    /// Distance and leg statistics over the driven path.
    #[must_use]
    pub fn stats(&self) -> RouteStats {
        let longest_leg_km = self
            .path()
            .zip(self.path().skip(1))
            .map(|(from, to)| haversine_distance(from, to))
            .fold(0.0_f64, f64::max);
        RouteStats {
            distance_km: path_distance(self.path()),
            stops: self.stops.len(),
            longest_leg_km,
        }
    }
}

/// Summary of a route's driven path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStats {
    /// Total distance from start, through every stop, to end, in kilometres.
    pub distance_km: f64,
    /// Number of stops visited.
    pub stops: usize,
    /// Longest single leg of the path, in kilometres.
    pub longest_leg_km: f64,
}
