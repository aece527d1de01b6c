//! Behavioural tests for the `plan` command.

use super::helpers::{Workspace, write_request, write_utf8};
use super::*;
use crate::plan::run_plan_with;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use waypost_core::test_support::{ids, origin, point};
use waypost_core::{Coordinate, RouteRequest, RouteRequestValidationError, RouteResponse};

struct PlanWorld {
    _workspace: Workspace,
    request_path: Utf8PathBuf,
    include_request: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl PlanWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let request_path = workspace.path("request.json");
        Self {
            _workspace: workspace,
            request_path,
            include_request: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["waypost".to_owned(), "plan".to_owned()];
        if *self.include_request.borrow() {
            argv.push(self.request_path.as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn expect_error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> PlanWorld {
    PlanWorld::new()
}

/// Listed stops sit one degree apart, the first furthest east.
#[given("a route request with stops {stops} east of the depot")]
fn request_with_stops(#[from(world)] world: &PlanWorld, stops: String) {
    let listed: Vec<&str> = stops.trim_matches('"').split(',').collect();
    let count = u32::try_from(listed.len()).expect("a handful of stops");
    let points = listed
        .iter()
        .zip((1..=count).rev())
        .map(|(id, degrees)| point(id, 0.0, f64::from(degrees)))
        .collect();
    write_request(&world.request_path, &RouteRequest::new(origin(), points));
}

#[given("a route request whose greedy order crosses itself")]
fn crossing_request(#[from(world)] world: &PlanWorld) {
    let request = RouteRequest::new(
        origin(),
        vec![point("east", 0.0, 1.0), point("west", 0.0, -2.0)],
    )
    .with_end(Coordinate::new(0.0, 10.0));
    write_request(&world.request_path, &request);
}

#[given("the route request contains invalid JSON")]
fn request_contains_invalid_json(#[from(world)] world: &PlanWorld) {
    write_utf8(&world.request_path, b"{ not valid json");
}

#[given("I pass the refine flag")]
fn pass_refine_flag(#[from(world)] world: &PlanWorld) {
    world
        .cli_args
        .borrow_mut()
        .push(format!("--{ARG_PLAN_REFINE}"));
}

#[given("I cap the request at {limit:usize} points")]
fn cap_request(#[from(world)] world: &PlanWorld, limit: usize) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_PLAN_MAX_POINTS}"), limit.to_string()]);
}

#[given("I omit the route request path")]
fn omit_request_path(#[from(world)] world: &PlanWorld) {
    *world.include_request.borrow_mut() = false;
}

#[when("I run the plan command")]
fn run_plan_command(#[from(world)] world: &PlanWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Plan(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_plan_with(args, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints the stops in the order {order}")]
fn command_prints_order(#[from(world)] world: &PlanWorld, order: String) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    assert!(stdout.ends_with('\n'));
    let response: RouteResponse =
        serde_json::from_str(&stdout).expect("output should be a JSON route response");
    let expected: Vec<&str> = order.trim_matches('"').split(',').collect();
    assert_eq!(ids(response.route.stops()), expected);
    assert_eq!(response.stats.stops, expected.len());
}

#[then("the command fails because the request has too many points")]
fn command_fails_too_many_points(#[from(world)] world: &PlanWorld) {
    match &*world.expect_error() {
        CliError::InvalidRouteRequest { source, .. } => assert_eq!(
            *source,
            RouteRequestValidationError::TooManyPoints { count: 3, limit: 2 }
        ),
        other => panic!("expected InvalidRouteRequest, found {other:?}"),
    }
}

#[then("the command fails because the request JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &PlanWorld) {
    match &*world.expect_error() {
        CliError::ParseRouteRequest { .. } => {}
        other => panic!("expected ParseRouteRequest, found {other:?}"),
    }
}

#[then("the command fails because stop {id} appears twice")]
fn command_fails_duplicate(#[from(world)] world: &PlanWorld, id: String) {
    match &*world.expect_error() {
        CliError::InvalidRouteRequest { source, .. } => assert_eq!(
            *source,
            RouteRequestValidationError::DuplicateId(id.trim_matches('"').to_owned())
        ),
        other => panic!("expected InvalidRouteRequest, found {other:?}"),
    }
}

#[then("the command fails because the request path is missing")]
fn command_fails_missing_request_path(#[from(world)] world: &PlanWorld) {
    match &*world.expect_error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_PLAN_REQUEST),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_plan_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/plan.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: PlanWorld) {
            let _ = world;
        }
    };
}

register_plan_scenario!(plan_happy_path, "planning a request from JSON");
register_plan_scenario!(plan_refinement, "refining the greedy order");
register_plan_scenario!(plan_point_cap, "capping the number of stops");
register_plan_scenario!(plan_invalid_json, "rejecting invalid JSON input");
register_plan_scenario!(plan_duplicate_ids, "rejecting duplicate stop ids");
register_plan_scenario!(plan_missing_request, "rejecting missing request paths");
