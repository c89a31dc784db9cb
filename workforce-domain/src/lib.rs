#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod report;
pub mod validation;

pub use model::{
    Capacities, CostCoefficients, CoveragePolicy, MAX_WEEKS, PlanParameters, PlanRequest,
    PolicyParameters,
};
pub use report::{CostBreakdown, PlanReport, SolveStatus, WeekDetail};
pub use validation::{ConfigError, ValidatedPlan};
