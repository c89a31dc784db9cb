use workforce_application::{OptimizationError, WorkforceOptimizer};
use workforce_domain::{PlanReport, ValidatedPlan};
use workforce_milp::{SolveError, SolverOptions, plan_workforce};

/// [`WorkforceOptimizer`] backed by the `good_lp` integer program.
#[derive(Debug, Clone, Default)]
pub struct MilpWorkforceOptimizer {
    options: SolverOptions,
}

impl MilpWorkforceOptimizer {
    pub fn new(options: SolverOptions) -> Self {
        Self { options }
    }
}

fn map_solve_error(err: SolveError) -> OptimizationError {
    match err {
        SolveError::SolverUnavailable { backend } => OptimizationError::SolverUnavailable {
            backend: backend.to_string(),
        },
        SolveError::NumericInconsistency { variable, value } => {
            OptimizationError::NumericInconsistency { variable, value }
        }
    }
}

impl WorkforceOptimizer for MilpWorkforceOptimizer {
    fn optimize(&self, plan: &ValidatedPlan) -> Result<PlanReport, OptimizationError> {
        plan_workforce(plan, &self.options).map_err(map_solve_error)
    }
}
