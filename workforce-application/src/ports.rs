use crate::{
    error::{DemandError, OptimizationError, PlanParseError},
    model::PlanFile,
};
use workforce_domain::{PlanReport, ValidatedPlan};

pub trait WorkforceOptimizer: Send + Sync {
    fn optimize(&self, plan: &ValidatedPlan) -> Result<PlanReport, OptimizationError>;
}

/// Supplies the weekly demand series for a horizon.
pub trait DemandSource: Send + Sync {
    fn demand(&self, weeks: u32) -> Result<Vec<f64>, DemandError>;
}

pub trait PlanParser: Send + Sync {
    fn parse(&self, content: &str) -> Result<PlanFile, PlanParseError>;
}
