//! `NearestNeighbourOptimizer`: greedy construction with optional 2-opt.
//!
//! The greedy walk is seeded from `RouteRequest::start` only. When the
//! request names a distinct `end`, enable refinement to let that final leg
//! influence the order.

use std::time::Instant;

use waypost_core::{
    Diagnostics, OptimizeError, Route, RouteOptimizer, RouteRequest, RouteResponse,
};

use crate::{nearest_neighbour_route, two_opt_refine};

/// Configuration for [`NearestNeighbourOptimizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestNeighbourConfig {
    /// Run a 2-opt pass after greedy construction.
    pub refine: bool,
    /// Upper bound on 2-opt passes.
    pub max_refinement_passes: u32,
    /// Minimum saving, in kilometres, for a 2-opt move to be applied.
    pub improvement_epsilon_km: f64,
}

impl Default for NearestNeighbourConfig {
    fn default() -> Self {
        Self {
            refine: false,
            max_refinement_passes: 100,
            improvement_epsilon_km: 1e-9,
        }
    }
}

/// Sequences stops by greedy nearest-neighbour walk from the depot.
///
/// # Examples
/// ```
/// use waypost_core::{Coordinate, RouteOptimizer, RoutePoint, RouteRequest};
/// use waypost_solver_nn::NearestNeighbourOptimizer;
///
/// let request = RouteRequest::new(
///     Coordinate::new(0.0, 0.0),
///     vec![
///         RoutePoint::new("far", Coordinate::new(0.0, 2.0)),
///         RoutePoint::new("near", Coordinate::new(0.0, 1.0)),
///     ],
/// );
/// let response = NearestNeighbourOptimizer::new().optimize(&request)?;
/// assert_eq!(response.route.stops()[0].id, "near");
/// assert_eq!(response.stats.stops, 2);
/// # Ok::<(), waypost_core::OptimizeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct NearestNeighbourOptimizer {
    config: NearestNeighbourConfig,
}

impl NearestNeighbourOptimizer {
    /// Construct an optimiser using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(NearestNeighbourConfig::default())
    }

    /// Construct an optimiser with explicit configuration.
    #[must_use]
    pub const fn with_config(config: NearestNeighbourConfig) -> Self {
        Self { config }
    }

    /// The configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &NearestNeighbourConfig {
        &self.config
    }
}

impl RouteOptimizer for NearestNeighbourOptimizer {
    fn optimize(&self, request: &RouteRequest) -> Result<RouteResponse, OptimizeError> {
        request.validate()?;
        let started_at = Instant::now();

        let mut stops = nearest_neighbour_route(request.start, &request.points);
        let refinement_passes = if self.config.refine {
            two_opt_refine(
                request.start,
                request.end_or_start(),
                &mut stops,
                self.config.max_refinement_passes,
                self.config.improvement_epsilon_km,
            )
        } else {
            0
        };

        let route = Route::new(request.start, request.end, stops);
        let stats = route.stats();
        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            points_evaluated: u64::try_from(request.points.len()).unwrap_or(u64::MAX),
            refinement_passes,
        };
        log::debug!(
            "sequenced {} stops over {:.3} km in {:?} ({} refinement passes)",
            stats.stops,
            stats.distance_km,
            diagnostics.solve_time,
            refinement_passes
        );

        Ok(RouteResponse {
            route,
            stats,
            diagnostics,
        })
    }
}
