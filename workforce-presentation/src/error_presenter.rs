use workforce_application::{PlanParseError, PlanningError};
use workforce_i18n as i18n;

pub fn format_planning_error(error: &PlanningError) -> String {
    match error {
        PlanningError::Config(err) => format!("{}: {err}", i18n::INVALID_CONFIGURATION),
        PlanningError::Demand(err) => format!("{}: {err}", i18n::DEMAND_GENERATION_FAILED),
        PlanningError::SolverUnavailable { backend } => i18n::solver_unavailable(backend),
        PlanningError::NumericInconsistency { variable, value } => {
            i18n::numeric_inconsistency(variable, *value)
        }
    }
}

pub fn format_plan_parse_error(error: &PlanParseError) -> String {
    match error {
        PlanParseError::SyntaxError { line, detail } => {
            i18n::syntax_error(*line, detail.clone()).to_string()
        }
        PlanParseError::UnknownKey { key, line } => i18n::unknown_key(key, *line),
        PlanParseError::DuplicateKey { key, line } => i18n::duplicate_key(key, *line),
        PlanParseError::ConflictingDemand { line } => i18n::conflicting_demand(*line),
        PlanParseError::HorizonTooLong { weeks, max, line } => {
            i18n::horizon_too_long(*weeks, *max, *line)
        }
    }
}
