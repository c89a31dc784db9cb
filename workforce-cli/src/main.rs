#![warn(clippy::uninlined_format_args)]

mod bootstrap;

use std::{borrow::Cow, env, fs, path::Path, process};

use bootstrap::{SolverConfig, init_logging};
use tracing::{info, warn};
use workforce_application::{PlanParser, PlanningService};
use workforce_domain::{PlanReport, PlanRequest};
use workforce_infrastructure::{ConfiguredDemand, MilpWorkforceOptimizer, PlanFileParser};
use workforce_presentation::{PlanPresenter, format_plan_parse_error, format_planning_error};

type CliResult<T> = Result<T, Cow<'static, str>>;

const USAGE: &str = "Usage: workforce-plan <plan-file | request.json> [--json]";

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

struct Args {
    path: String,
    json_output: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> CliResult<Args> {
    let mut path = None;
    let mut json_output = false;
    for arg in args {
        match arg.as_str() {
            "--json" => json_output = true,
            "-h" | "--help" => return Err(USAGE.into()),
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option '{flag}'\n{USAGE}").into());
            }
            _ if path.is_some() => return Err(USAGE.into()),
            _ => path = Some(arg),
        }
    }

    let Some(path) = path else {
        return Err(USAGE.into());
    };
    Ok(Args { path, json_output })
}

fn run() -> CliResult<()> {
    let args = parse_args(env::args().skip(1))?;
    let config = SolverConfig::from_env().map_err(|err| err.to_string())?;
    info!(
        backend = %config.options.backend,
        time_limit_seconds = ?config.options.time_limit_seconds,
        "Solver configured"
    );
    if !config.options.backend.is_available() {
        warn!(
            backend = %config.options.backend,
            "Configured solver backend is not compiled into this binary"
        );
    }

    let source = fs::read_to_string(&args.path)
        .map_err(|err| format!("Failed to read '{}': {err}", args.path))?;

    let optimizer = MilpWorkforceOptimizer::new(config.options);
    let service = PlanningService::new(&optimizer);
    let report = if is_json(&args.path) {
        let request: PlanRequest = serde_json::from_str(&source)
            .map_err(|err| format!("Invalid plan request '{}': {err}", args.path))?;
        service.plan(&request)
    } else {
        let plan = PlanFileParser
            .parse(&source)
            .map_err(|err| format_plan_parse_error(&err))?;
        let demand = ConfiguredDemand::from_spec(&plan.demand, rand::random);
        if let Some(seed) = demand.seed() {
            info!(seed, "Drawing random demand");
        }
        service.plan_with_demand(plan.parameters, &demand)
    }
    .map_err(|err| format_planning_error(&err))?;

    print_report(&report, args.json_output)
}

fn is_json(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn print_report(report: &PlanReport, json_output: bool) -> CliResult<()> {
    if json_output {
        let json = serde_json::to_string_pretty(report)
            .map_err(|err| format!("Failed to serialize report: {err}"))?;
        println!("{json}");
    } else {
        print!("{}", PlanPresenter::render(report));
    }
    Ok(())
}
