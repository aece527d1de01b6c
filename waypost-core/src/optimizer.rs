//! The optimiser boundary: requests in, ordered routes out.

use std::collections::HashSet;
use std::time::Duration;

use thiserror::Error;

use crate::{Coordinate, CoordinateError, Route, RoutePoint, RouteStats};

/// Parameters for an optimisation request.
///
/// The request captures the depot, an optional distinct end location, the
/// stops to sequence and an optional cap on how many stops a caller is
/// prepared to optimise in one call.
///
/// # Examples
/// ```rust
/// use waypost_core::{Coordinate, RoutePoint, RouteRequest};
///
/// let request = RouteRequest::new(
///     Coordinate::new(0.0, 0.0),
///     vec![RoutePoint::new("a", Coordinate::new(0.0, 1.0))],
/// );
/// assert!(request.validate().is_ok());
/// assert_eq!(request.end_or_start(), request.start);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest {
    /// Depot the route leaves from.
    pub start: Coordinate,
    /// Where the route finishes; `None` means back at `start`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub end: Option<Coordinate>,
    /// Stops to visit, in any order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub points: Vec<RoutePoint>,
    /// Upper bound on `points.len()`, when set.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub max_points: Option<usize>,
}

/// Detailed validation errors for [`RouteRequest`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteRequestValidationError {
    /// The start coordinate is invalid.
    #[error("invalid start coordinate: {0}")]
    InvalidStart(#[source] CoordinateError),
    /// The end coordinate is invalid.
    #[error("invalid end coordinate: {0}")]
    InvalidEnd(#[source] CoordinateError),
    /// A stop has an invalid coordinate.
    #[error("invalid coordinate for point {id:?}: {source}")]
    InvalidPoint {
        /// Identifier of the offending stop.
        id: String,
        /// What was wrong with its coordinate.
        #[source]
        source: CoordinateError,
    },
    /// A stop has an empty identifier.
    #[error("point at index {index} has an empty id")]
    EmptyId {
        /// Position of the stop in the request.
        index: usize,
    },
    /// Two stops share an identifier.
    #[error("point id {0:?} appears more than once")]
    DuplicateId(String),
    /// More stops were supplied than `max_points` allows.
    #[error("request has {count} points, more than the limit of {limit}")]
    TooManyPoints {
        /// Number of stops supplied.
        count: usize,
        /// Configured limit.
        limit: usize,
    },
}

impl RouteRequest {
    /// Construct a round-trip request with no size cap.
    #[must_use]
    pub const fn new(start: Coordinate, points: Vec<RoutePoint>) -> Self {
        Self {
            start,
            end: None,
            points,
            max_points: None,
        }
    }

    /// Finish at `end` instead of returning to the start.
    #[must_use]
    pub const fn with_end(mut self, end: Coordinate) -> Self {
        self.end = Some(end);
        self
    }

    /// Reject requests with more than `limit` stops.
    #[must_use]
    pub const fn with_max_points(mut self, limit: usize) -> Self {
        self.max_points = Some(limit);
        self
    }

    /// The location the route finishes at.
    #[must_use]
    pub fn end_or_start(&self) -> Coordinate {
        self.end.unwrap_or(self.start)
    }

    /// Validate the request.
    ///
    /// # Errors
    /// Returns [`OptimizeError::InvalidRequest`] wrapping the first problem
    /// found.
    pub fn validate(&self) -> Result<(), OptimizeError> {
        self.validate_detailed()
            .map_err(OptimizeError::InvalidRequest)
    }

    /// Validate the request and report exactly what is wrong.
    ///
    /// Checks run in order: size cap, start, end, then each stop's id and
    /// coordinate in input order.
    ///
    /// # Errors
    /// Returns the first [`RouteRequestValidationError`] encountered.
    pub fn validate_detailed(&self) -> Result<(), RouteRequestValidationError> {
        if let Some(limit) = self.max_points
            && self.points.len() > limit
        {
            return Err(RouteRequestValidationError::TooManyPoints {
                count: self.points.len(),
                limit,
            });
        }
        self.start
            .validate()
            .map_err(RouteRequestValidationError::InvalidStart)?;
        if let Some(end) = self.end {
            end.validate()
                .map_err(RouteRequestValidationError::InvalidEnd)?;
        }

        let mut seen = HashSet::with_capacity(self.points.len());
        for (index, point) in self.points.iter().enumerate() {
            if point.id.is_empty() {
                return Err(RouteRequestValidationError::EmptyId { index });
            }
            if !seen.insert(point.id.as_str()) {
                return Err(RouteRequestValidationError::DuplicateId(point.id.clone()));
            }
            point
                .location
                .validate()
                .map_err(|source| RouteRequestValidationError::InvalidPoint {
                    id: point.id.clone(),
                    source,
                })?;
        }
        Ok(())
    }
}

/// Timing and effort figures for a single optimisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent optimising.
    pub solve_time: Duration,
    /// Number of stops the optimiser sequenced.
    pub points_evaluated: u64,
    /// Improvement passes run after construction; zero when refinement is off.
    pub refinement_passes: u32,
}

/// Response from a successful optimisation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteResponse {
    /// The ordered route.
    pub route: Route,
    /// Distance summary of `route`.
    pub stats: RouteStats,
    /// How the optimisation went.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`RouteOptimizer::optimize`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    /// Request parameters were invalid.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RouteRequestValidationError),
}

/// Produce a visiting order for a request.
///
/// Implementations must return [`OptimizeError::InvalidRequest`] for invalid
/// input rather than panicking, and must return a permutation of the
/// requested stops. Optimisers must be `Send + Sync` so callers can share
/// them across threads.
pub trait RouteOptimizer: Send + Sync {
    /// Optimise a request, producing a route or an error.
    fn optimize(&self, request: &RouteRequest) -> Result<RouteResponse, OptimizeError>;
}
