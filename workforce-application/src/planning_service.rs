use crate::{
    error::PlanningError,
    ports::{DemandSource, WorkforceOptimizer},
};
use tracing::{debug, info};
use workforce_domain::{PlanParameters, PlanReport, PlanRequest};

/// Runs one planning invocation: validate, then hand the checked plan to
/// the optimizer.
#[derive(Clone, Copy)]
pub struct PlanningService<'a> {
    optimizer: &'a dyn WorkforceOptimizer,
}

impl<'a> PlanningService<'a> {
    pub fn new(optimizer: &'a dyn WorkforceOptimizer) -> Self {
        Self { optimizer }
    }

    pub fn plan(&self, request: &PlanRequest) -> Result<PlanReport, PlanningError> {
        let plan = request.validate()?;
        debug!(
            weeks = plan.weeks(),
            coverage = ?plan.coverage(),
            "Plan request validated"
        );

        let report = self.optimizer.optimize(&plan)?;
        info!(
            status = %report.status,
            total_cost = ?report.total_cost,
            unmet_demand = report.total_unmet_demand(),
            "Planning finished"
        );
        Ok(report)
    }

    /// Draws the demand series from `source`, then plans as [`Self::plan`].
    ///
    /// The horizon is checked first so `source` is never asked for more
    /// than [`MAX_WEEKS`](workforce_domain::MAX_WEEKS) values.
    pub fn plan_with_demand(
        &self,
        parameters: PlanParameters,
        source: &dyn DemandSource,
    ) -> Result<PlanReport, PlanningError> {
        parameters.check_horizon()?;
        let demand = source.demand(parameters.weeks)?;
        self.plan(&parameters.with_demand(demand))
    }
}
