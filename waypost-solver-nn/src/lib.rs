//! Nearest-neighbour stop sequencing for Waypost.
//!
//! This crate provides [`NearestNeighbourOptimizer`], the default
//! implementation of the [`RouteOptimizer`](waypost_core::RouteOptimizer)
//! trait. It orders stops with a greedy nearest-neighbour walk from the depot
//! and can follow up with a 2-opt pass that accounts for the route's end
//! location.
//!
//! Both building blocks are exposed as pure functions,
//! [`nearest_neighbour_route`] and [`two_opt_refine`], for callers that want
//! to sequence stops without going through the request/response boundary.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod greedy;
mod refine;
mod solver;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use greedy::nearest_neighbour_route;
pub use refine::two_opt_refine;
pub use solver::{NearestNeighbourConfig, NearestNeighbourOptimizer};
