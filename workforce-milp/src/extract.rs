use workforce_domain::{CostBreakdown, PlanReport, ValidatedPlan, WeekDetail};

use crate::{builder::WorkforceProgram, solver::Solution};

/// Reads a solved program back into a per-week report.
///
/// Anything but an optimal solution yields a report with the status only.
pub fn extract_report(
    plan: &ValidatedPlan,
    model: &WorkforceProgram,
    solution: &Solution,
) -> PlanReport {
    let status = solution.status();
    let objective = match solution.objective_value() {
        Some(objective) if status.is_optimal() => objective,
        _ => return PlanReport::without_solution(status),
    };

    let value = |var| solution.value(var).unwrap_or_default();
    let details: Vec<WeekDetail> = model
        .periods()
        .iter()
        .zip(plan.demand())
        .enumerate()
        .map(|(idx, (vars, &demand))| WeekDetail {
            week: idx as u32 + 1,
            demand,
            hired: value(vars.hired),
            fired: value(vars.fired),
            employment: value(vars.employment),
            overtime: value(vars.overtime),
            unmet_demand: value(vars.unmet),
        })
        .collect();

    let breakdown = cost_breakdown(plan, &details);
    let (total_cost, cost_objective) = if model.coverage().is_strict() {
        (objective, None)
    } else {
        (objective - breakdown.penalty, Some(objective))
    };

    PlanReport {
        status,
        total_cost: Some(total_cost),
        cost_objective,
        breakdown: Some(breakdown),
        details,
    }
}

fn cost_breakdown(plan: &ValidatedPlan, details: &[WeekDetail]) -> CostBreakdown {
    let costs = plan.costs();
    details
        .iter()
        .fold(CostBreakdown::default(), |mut acc, detail| {
            acc.hiring += detail.hired as f64 * costs.hiring_cost;
            acc.firing += detail.fired as f64 * costs.firing_cost;
            acc.salary += detail.employment as f64 * costs.salary_cost;
            acc.overtime += detail.overtime as f64 * costs.overtime_cost;
            acc.penalty += detail.unmet_demand as f64 * costs.penalty_cost;
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_program;
    use workforce_domain::{
        Capacities, CostCoefficients, PlanParameters, PolicyParameters, SolveStatus,
    };

    fn plan(demand: &[f64], policy: PolicyParameters) -> ValidatedPlan {
        PlanParameters {
            weeks: demand.len() as u32,
            costs: CostCoefficients {
                hiring_cost: 100.0,
                firing_cost: 50.0,
                salary_cost: 1000.0,
                overtime_cost: 20.0,
                penalty_cost: 1000.0,
            },
            initial_employees: 0,
            capacities: Capacities {
                max_hire: 10,
                max_fire: 5,
                overtime_rate_per_employee: 10,
                working_hours_per_employee: 40,
            },
            policy,
        }
        .with_demand(demand.to_vec())
        .validate()
        .expect("valid plan")
    }

    // Values laid out as hired, fired, employment, overtime, unmet per week.
    fn solved(model: &WorkforceProgram, values: Vec<u64>) -> Solution {
        let objective = model.program().objective().evaluate(&values);
        Solution::optimal(objective, values)
    }

    #[test]
    fn strict_report_uses_raw_objective() {
        let plan = plan(&[90.0, 40.0], PolicyParameters::default());
        let model = build_program(&plan);
        let solution = solved(&model, vec![2, 0, 2, 10, 0, 0, 1, 1, 0, 0]);

        let report = extract_report(&plan, &model, &solution);

        assert_eq!(report.status, SolveStatus::Optimal);
        assert_eq!(report.total_cost, Some(3_450.0));
        assert_eq!(report.cost_objective, None);
        assert_eq!(report.details.len(), 2);
        assert_eq!(report.details[0].week, 1);
        assert_eq!(report.details[0].overtime, 10);
        assert_eq!(report.details[1].fired, 1);
        assert_eq!(report.details[1].employment, 1);
        assert_eq!(report.details[1].demand, 40.0);
    }

    #[test]
    fn service_report_separates_penalty_from_total() {
        let plan = plan(
            &[100.0],
            PolicyParameters {
                budget: Some(5_000.0),
                service_rate: Some(0.5),
            },
        );
        let model = build_program(&plan);
        let solution = solved(&model, vec![2, 0, 2, 0, 20]);

        let report = extract_report(&plan, &model, &solution);
        let breakdown = report.breakdown.expect("breakdown");

        assert_eq!(breakdown.penalty, 20_000.0);
        assert_eq!(breakdown.operational(), 2_200.0);
        assert_eq!(report.total_cost, Some(2_200.0));
        assert_eq!(report.cost_objective, Some(22_200.0));
        assert_eq!(report.total_unmet_demand(), 20);
    }

    #[test]
    fn breakdown_sums_to_objective() {
        let plan = plan(&[130.0, 0.0, 60.0], PolicyParameters::default());
        let model = build_program(&plan);
        let solution = solved(
            &model,
            vec![3, 0, 3, 10, 0, 0, 2, 1, 0, 0, 0, 0, 1, 10, 10],
        );

        let report = extract_report(&plan, &model, &solution);

        let breakdown = report.breakdown.expect("breakdown");
        assert_eq!(Some(breakdown.total()), report.total_cost);
    }

    #[test]
    fn infeasible_solution_yields_empty_report() {
        let plan = plan(&[50.0], PolicyParameters::default());
        let model = build_program(&plan);
        let solution = Solution::without_values(SolveStatus::Infeasible);

        assert_eq!(
            extract_report(&plan, &model, &solution),
            PlanReport::without_solution(SolveStatus::Infeasible)
        );
    }
}
