//! Facade crate for the Waypost stop-sequencing engine.
//!
//! This crate re-exports the core domain types and exposes the optional
//! nearest-neighbour optimiser behind a feature flag.

#![forbid(unsafe_code)]

pub use waypost_core::{
    Coordinate, CoordinateError, DEFAULT_CORRIDOR_BUFFER_KM, Diagnostics, EARTH_RADIUS_KM,
    OptimizeError, Route, RouteOptimizer, RoutePoint, RouteRequest,
    RouteRequestValidationError, RouteResponse, RouteStats, haversine_distance, path_distance,
    points_along_route,
};

#[cfg(feature = "solver-nn")]
pub use waypost_solver_nn::{
    NearestNeighbourConfig, NearestNeighbourOptimizer, nearest_neighbour_route, two_opt_refine,
};
