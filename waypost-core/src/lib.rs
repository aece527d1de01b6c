//! Core domain types for the Waypost engine.
//!
//! This crate holds the vocabulary shared by every optimiser: validated
//! [`Coordinate`]s, identified [`RoutePoint`] stops, the [`Route`] an
//! optimiser produces, great-circle distance helpers and the
//! [`RouteOptimizer`] trait itself. Everything here is pure and synchronous.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod coordinate;
mod corridor;
mod distance;
mod optimizer;
mod point;
mod route;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use coordinate::{Coordinate, CoordinateError};
pub use corridor::{DEFAULT_CORRIDOR_BUFFER_KM, points_along_route};
pub use distance::{EARTH_RADIUS_KM, haversine_distance, path_distance};
pub use optimizer::{
    Diagnostics, OptimizeError, RouteOptimizer, RouteRequest, RouteRequestValidationError,
    RouteResponse,
};
pub use point::RoutePoint;
pub use route::{Route, RouteStats};
