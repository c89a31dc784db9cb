use serde::{Deserialize, Serialize};

/// Per-unit costs, constant across the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCoefficients {
    pub hiring_cost: f64,
    pub firing_cost: f64,
    /// Cost of keeping one employee for one period.
    pub salary_cost: f64,
    /// Cost of one overtime hour.
    pub overtime_cost: f64,
    /// Cost of one hour of demand left uncovered.
    pub penalty_cost: f64,
}

impl Default for CostCoefficients {
    fn default() -> Self {
        Self {
            hiring_cost: 100.0,
            firing_cost: 50.0,
            salary_cost: 1000.0,
            overtime_cost: 20.0,
            penalty_cost: 1000.0,
        }
    }
}

impl CostCoefficients {
    pub fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("hiringCost", self.hiring_cost),
            ("firingCost", self.firing_cost),
            ("salaryCost", self.salary_cost),
            ("overtimeCost", self.overtime_cost),
            ("penaltyCost", self.penalty_cost),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacities {
    pub max_hire: u32,
    pub max_fire: u32,
    /// Overtime hours one employee can work per period.
    pub overtime_rate_per_employee: u32,
    /// Regular hours one employee works per period.
    pub working_hours_per_employee: u32,
}

impl Default for Capacities {
    fn default() -> Self {
        Self {
            max_hire: 10,
            max_fire: 5,
            overtime_rate_per_employee: 10,
            working_hours_per_employee: 40,
        }
    }
}

impl Capacities {
    pub fn named(&self) -> [(&'static str, u32); 4] {
        [
            ("maxHire", self.max_hire),
            ("maxFire", self.max_fire),
            ("overtimeRatePerEmployee", self.overtime_rate_per_employee),
            ("workingHoursPerEmployee", self.working_hours_per_employee),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_rate: Option<f64>,
}

impl PolicyParameters {
    /// Resolves which coverage formulation the parameters ask for.
    ///
    /// Supplying either a budget or a service rate switches to the
    /// service-level formulation; a missing service rate then means full
    /// coverage (`1.0`) and a missing budget means no budget row.
    pub fn coverage(&self) -> CoveragePolicy {
        match (self.budget, self.service_rate) {
            (None, None) => CoveragePolicy::Strict,
            (budget, service_rate) => CoveragePolicy::ServiceLevel {
                service_rate: service_rate.unwrap_or(1.0),
                budget,
            },
        }
    }
}

/// How each period's demand must be covered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoveragePolicy {
    /// Regular hours, overtime and unmet slack add up to demand exactly.
    Strict,
    /// Covered hours reach `demand * service_rate`; operational spend is
    /// capped by `budget` when one is given.
    ServiceLevel {
        service_rate: f64,
        budget: Option<f64>,
    },
}

impl CoveragePolicy {
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Longest planning horizon, one year of weeks.
pub const MAX_WEEKS: u32 = 52;

/// Everything a plan needs apart from the demand series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanParameters {
    pub weeks: u32,
    #[serde(flatten)]
    pub costs: CostCoefficients,
    pub initial_employees: u32,
    #[serde(flatten)]
    pub capacities: Capacities,
    #[serde(flatten)]
    pub policy: PolicyParameters,
}

impl Default for PlanParameters {
    /// Four weeks, no starting staff, strict coverage.
    fn default() -> Self {
        Self {
            weeks: 4,
            costs: CostCoefficients::default(),
            initial_employees: 0,
            capacities: Capacities::default(),
            policy: PolicyParameters::default(),
        }
    }
}

impl PlanParameters {
    pub fn with_demand(self, demand: Vec<f64>) -> PlanRequest {
        PlanRequest {
            parameters: self,
            demand,
        }
    }
}

/// Input of one planning invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    #[serde(flatten)]
    pub parameters: PlanParameters,
    pub demand: Vec<f64>,
}
