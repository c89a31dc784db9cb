#![warn(clippy::uninlined_format_args)]

pub mod builder;
pub mod extract;
pub mod program;
pub mod solver;

pub use builder::{PeriodVariables, WorkforceProgram, build_program};
pub use extract::extract_report;
pub use program::{IntegerProgram, LinearExpr, Relation, Row, VarId};
pub use solver::{
    INTEGRALITY_TOLERANCE, SolveError, Solution, SolverBackend, SolverOptions, UnknownBackend,
    solve,
};

use tracing::debug;
use workforce_domain::{PlanReport, ValidatedPlan};

/// Builds, solves and reads back one plan.
pub fn plan_workforce(
    plan: &ValidatedPlan,
    options: &SolverOptions,
) -> Result<PlanReport, SolveError> {
    let model = build_program(plan);
    let solution = solve(model.program(), options)?;
    let report = extract_report(plan, &model, &solution);
    debug!(
        status = %report.status,
        total_cost = ?report.total_cost,
        "Plan extracted"
    );
    Ok(report)
}
