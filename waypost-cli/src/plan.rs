//! `plan` command: load a route request, sequence its stops, print the route.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waypost_core::{OptimizeError, RouteOptimizer, RouteRequest, RouteResponse};
use waypost_fs::open_utf8_file;
use waypost_solver_nn::{NearestNeighbourConfig, NearestNeighbourOptimizer};

use crate::{ARG_PLAN_MAX_POINTS, ARG_PLAN_REFINE, ARG_PLAN_REQUEST, CliError, ENV_PLAN_REQUEST};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Sequence the stops of a JSON-encoded RouteRequest by \
                 greedy nearest-neighbour walk from its start, optionally \
                 tightened with 2-opt, and print the RouteResponse as JSON.",
    about = "Plan a route through the stops of a request"
)]
#[ortho_config(prefix = "WAYPOST")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a RouteRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Reject requests with more stops than this, overriding the file.
    #[arg(long = ARG_PLAN_MAX_POINTS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_points: Option<usize>,
    /// Run 2-opt refinement after the greedy walk.
    #[arg(
        long = ARG_PLAN_REFINE,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) refine: Option<bool>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Cap that replaces the request's own `max_points`, when set.
    pub(crate) max_points: Option<usize>,
    /// Whether to refine the greedy order.
    pub(crate) refine: bool,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_PLAN_REQUEST)
    }

    /// Apply command-line overrides to a request read from disk.
    pub(crate) fn apply_to(&self, mut request: RouteRequest) -> RouteRequest {
        if let Some(limit) = self.max_points {
            request.max_points = Some(limit);
        }
        request
    }

    pub(crate) fn optimizer_config(&self) -> NearestNeighbourConfig {
        NearestNeighbourConfig {
            refine: self.refine,
            ..NearestNeighbourConfig::default()
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        Ok(Self {
            request_path,
            max_points: args.max_points,
            refine: args.refine.unwrap_or(false),
        })
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match waypost_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(super) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let response = execute_plan(args)?;
    write_route_response(writer, &response)
}

fn execute_plan(args: PlanArgs) -> Result<RouteResponse, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let request = config.apply_to(load_route_request(&config.request_path)?);
    log::info!(
        "planning {} stops from {}",
        request.points.len(),
        config.request_path
    );
    NearestNeighbourOptimizer::with_config(config.optimizer_config())
        .optimize(&request)
        .map_err(|err| match err {
            OptimizeError::InvalidRequest(source) => CliError::InvalidRouteRequest {
                path: config.request_path.clone(),
                source,
            },
        })
}

/// Loads a JSON-encoded [`RouteRequest`] from disk.
pub(super) fn load_route_request(path: &Utf8Path) -> Result<RouteRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRouteRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRouteRequest {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn write_route_response(
    writer: &mut dyn Write,
    response: &RouteResponse,
) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(response).map_err(CliError::SerialiseRouteResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer.write_all(b"\n").map_err(CliError::WritePlanOutput)?;
    Ok(())
}
