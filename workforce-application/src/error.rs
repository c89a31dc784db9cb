use thiserror::Error;
use workforce_domain::ConfigError;

/// Failures of a [`WorkforceOptimizer`](crate::WorkforceOptimizer)
/// implementation. Infeasible or unbounded plans are not errors; they come
/// back as report statuses.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizationError {
    #[error("Solver backend '{backend}' is not available")]
    SolverUnavailable { backend: String },
    #[error("Solver returned {value} for integer variable '{variable}'")]
    NumericInconsistency { variable: String, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DemandError {
    #[error("Demand range {min}..{max} is empty")]
    EmptyRange { min: u32, max: u32 },
    #[error("Cannot generate demand for {weeks} weeks (limit {max})")]
    HorizonTooLong { weeks: u32, max: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanParseError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
    #[error("Unknown key '{key}' at line {line}")]
    UnknownKey { key: String, line: usize },
    #[error("Key '{key}' at line {line} is already set")]
    DuplicateKey { key: String, line: usize },
    #[error("Line {line} sets a second demand definition")]
    ConflictingDemand { line: usize },
    #[error("Line {line} sets a horizon of {weeks} weeks (limit {max})")]
    HorizonTooLong { weeks: u32, max: u32, line: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanningError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Demand(#[from] DemandError),
    #[error("Solver backend '{backend}' is not available")]
    SolverUnavailable { backend: String },
    #[error("Solver returned {value} for integer variable '{variable}'")]
    NumericInconsistency { variable: String, value: f64 },
}

impl From<OptimizationError> for PlanningError {
    fn from(err: OptimizationError) -> Self {
        match err {
            OptimizationError::SolverUnavailable { backend } => {
                PlanningError::SolverUnavailable { backend }
            }
            OptimizationError::NumericInconsistency { variable, value } => {
                PlanningError::NumericInconsistency { variable, value }
            }
        }
    }
}
