use tracing::debug;
use workforce_domain::{ConfigError, CoveragePolicy, PlanRequest, ValidatedPlan};

use crate::program::{IntegerProgram, LinearExpr, Relation, VarId};

/// Decision variables of one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodVariables {
    pub hired: VarId,
    pub fired: VarId,
    pub employment: VarId,
    pub overtime: VarId,
    pub unmet: VarId,
}

/// Integer program for one planning horizon plus the per-week variable
/// layout needed to read a solution back.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkforceProgram {
    program: IntegerProgram,
    periods: Vec<PeriodVariables>,
    coverage: CoveragePolicy,
}

impl WorkforceProgram {
    pub fn from_request(request: &PlanRequest) -> Result<Self, ConfigError> {
        let plan = request.validate()?;
        Ok(build_program(&plan))
    }

    pub fn program(&self) -> &IntegerProgram {
        &self.program
    }

    pub fn periods(&self) -> &[PeriodVariables] {
        &self.periods
    }

    pub fn coverage(&self) -> CoveragePolicy {
        self.coverage
    }
}

/// Number of rows emitted for each week.
pub const ROWS_PER_PERIOD: usize = 6;

/// Builds the hire/fire/overtime program for a validated plan.
///
/// Each week contributes five variables and the rows `balance`,
/// `coverage`, `hire_cap`, `fire_cap`, `overtime_cap` and `unmet_floor`
/// (suffixed with the 0-based week). A service-level policy with a budget
/// adds one `budget` row over the whole horizon.
pub fn build_program(plan: &ValidatedPlan) -> WorkforceProgram {
    let weeks = plan.weeks() as usize;
    let costs = plan.costs();
    let caps = plan.capacities();
    let working_hours = f64::from(caps.working_hours_per_employee);
    let overtime_rate = f64::from(caps.overtime_rate_per_employee);
    let coverage = plan.coverage();

    let mut program = IntegerProgram::new();
    let periods: Vec<PeriodVariables> = (0..weeks)
        .map(|t| PeriodVariables {
            hired: program.add_variable(format!("hired[{t}]")),
            fired: program.add_variable(format!("fired[{t}]")),
            employment: program.add_variable(format!("employment[{t}]")),
            overtime: program.add_variable(format!("overtime[{t}]")),
            unmet: program.add_variable(format!("unmet[{t}]")),
        })
        .collect();

    let mut objective = LinearExpr::with_capacity(weeks * 5);
    for vars in &periods {
        objective.add_term(vars.hired, costs.hiring_cost);
        objective.add_term(vars.fired, costs.firing_cost);
        objective.add_term(vars.employment, costs.salary_cost);
        objective.add_term(vars.overtime, costs.overtime_cost);
        objective.add_term(vars.unmet, costs.penalty_cost);
    }
    program.set_objective(objective);

    for (t, (vars, &demand)) in periods.iter().zip(plan.demand()).enumerate() {
        // employment[t] - employment[t-1] - hired[t] + fired[t] = 0,
        // with the initial headcount standing in for employment[-1].
        let mut balance = LinearExpr::with_capacity(4)
            .term(vars.employment, 1.0)
            .term(vars.hired, -1.0)
            .term(vars.fired, 1.0);
        let carried_over = match t.checked_sub(1) {
            Some(prev) => {
                balance.add_term(periods[prev].employment, -1.0);
                0.0
            }
            None => f64::from(plan.initial_employees()),
        };
        program.add_row(format!("balance[{t}]"), balance, Relation::Eq, carried_over);

        let covered = covered_hours(vars, working_hours).term(vars.unmet, 1.0);
        match coverage {
            CoveragePolicy::Strict => {
                program.add_row(format!("coverage[{t}]"), covered, Relation::Eq, demand);
            }
            CoveragePolicy::ServiceLevel { service_rate, .. } => {
                program.add_row(
                    format!("coverage[{t}]"),
                    covered,
                    Relation::Ge,
                    demand * service_rate,
                );
            }
        }

        program.add_row(
            format!("hire_cap[{t}]"),
            LinearExpr::default().term(vars.hired, 1.0),
            Relation::Le,
            f64::from(caps.max_hire),
        );
        program.add_row(
            format!("fire_cap[{t}]"),
            LinearExpr::default().term(vars.fired, 1.0),
            Relation::Le,
            f64::from(caps.max_fire),
        );
        program.add_row(
            format!("overtime_cap[{t}]"),
            LinearExpr::default()
                .term(vars.overtime, 1.0)
                .term(vars.employment, -overtime_rate),
            Relation::Le,
            0.0,
        );

        // unmet[t] >= demand[t] - regular hours - overtime
        program.add_row(
            format!("unmet_floor[{t}]"),
            covered_hours(vars, working_hours).term(vars.unmet, 1.0),
            Relation::Ge,
            demand,
        );
    }

    if let CoveragePolicy::ServiceLevel {
        budget: Some(budget),
        ..
    } = coverage
    {
        let mut spend = LinearExpr::with_capacity(weeks * 4);
        for vars in &periods {
            spend.add_term(vars.employment, costs.salary_cost);
            spend.add_term(vars.overtime, costs.overtime_cost);
            spend.add_term(vars.hired, costs.hiring_cost);
            spend.add_term(vars.fired, costs.firing_cost);
        }
        program.add_row("budget", spend, Relation::Le, budget);
    }

    debug!(
        weeks,
        variable_count = program.variable_count(),
        row_count = program.row_count(),
        coverage = ?coverage,
        "Workforce program built"
    );

    WorkforceProgram {
        program,
        periods,
        coverage,
    }
}

/// Expected row count for a horizon and policy.
pub fn expected_row_count(weeks: usize, coverage: CoveragePolicy) -> usize {
    let budget_rows = match coverage {
        CoveragePolicy::ServiceLevel {
            budget: Some(_), ..
        } => 1,
        _ => 0,
    };
    weeks * ROWS_PER_PERIOD + budget_rows
}

fn covered_hours(vars: &PeriodVariables, working_hours: f64) -> LinearExpr {
    LinearExpr::with_capacity(3)
        .term(vars.employment, working_hours)
        .term(vars.overtime, 1.0)
}
