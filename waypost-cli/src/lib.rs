//! Command-line interface for planning Waypost routes.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;

pub use error::CliError;

use plan::PlanArgs;

const ARG_PLAN_REQUEST: &str = "request-path";
const ARG_PLAN_MAX_POINTS: &str = "max-points";
const ARG_PLAN_REFINE: &str = "refine";
const ENV_PLAN_REQUEST: &str = "WAYPOST_CMDS_PLAN_REQUEST_PATH";

/// Run the Waypost CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration loading,
/// request loading, validation or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => plan::run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "waypost",
    about = "Sequence delivery and survey stops into short routes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order the stops in a JSON route request and print the route.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
