use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal state of one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
    NotSolved,
}

impl SolveStatus {
    pub fn is_optimal(self) -> bool {
        matches!(self, Self::Optimal)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Optimal => "Optimal",
            Self::Infeasible => "Infeasible",
            Self::Unbounded => "Unbounded",
            Self::NotSolved => "NotSolved",
        }
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decisions for a single week of the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekDetail {
    /// 1-based week index.
    pub week: u32,
    pub demand: f64,
    pub hired: u64,
    pub fired: u64,
    pub employment: u64,
    pub overtime: u64,
    pub unmet_demand: u64,
}

impl WeekDetail {
    /// Hours covered by regular time plus overtime.
    pub fn covered_hours(&self, working_hours_per_employee: u32) -> u64 {
        self.employment * u64::from(working_hours_per_employee) + self.overtime
    }
}

/// Objective split by cost component.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub hiring: f64,
    pub firing: f64,
    pub salary: f64,
    pub overtime: f64,
    pub penalty: f64,
}

impl CostBreakdown {
    /// Money actually spent: everything except the unmet-demand penalty.
    pub fn operational(&self) -> f64 {
        self.hiring + self.firing + self.salary + self.overtime
    }

    pub fn total(&self) -> f64 {
        self.operational() + self.penalty
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    pub status: SolveStatus,
    /// Raw objective under strict coverage; objective minus the penalty
    /// under the service-level policy.
    ///
    /// Always serialized; `null` when no optimal plan was found.
    #[serde(default)]
    pub total_cost: Option<f64>,
    /// Raw objective, reported separately under the service-level policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_objective: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<CostBreakdown>,
    pub details: Vec<WeekDetail>,
}

impl PlanReport {
    /// Report for a solve that ended without an optimal assignment.
    pub fn without_solution(status: SolveStatus) -> Self {
        Self {
            status,
            total_cost: None,
            cost_objective: None,
            breakdown: None,
            details: Vec::new(),
        }
    }

    pub fn total_unmet_demand(&self) -> u64 {
        self.details.iter().map(|detail| detail.unmet_demand).sum()
    }
}
