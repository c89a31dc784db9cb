use crate::text_table::{Alignment, TextTableBuilder};
use std::{borrow::Cow, fmt::Write};
use workforce_domain::{CostBreakdown, PlanReport, WeekDetail};
use workforce_i18n as i18n;

pub struct PlanPresenter;

impl PlanPresenter {
    pub fn render(report: &PlanReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", i18n::OPTIMIZATION_RESULTS);
        let _ = writeln!(out, "{}: {}", i18n::STATUS, report.status);

        if !report.status.is_optimal() {
            let _ = writeln!(out, "{}", i18n::NO_PLAN);
            return out;
        }

        if let Some(total) = report.total_cost {
            let _ = writeln!(out, "{}: {}", i18n::TOTAL_COST, format_amount(total));
        }
        if let Some(objective) = report.cost_objective {
            let _ = writeln!(out, "{}: {}", i18n::COST_OBJECTIVE, format_amount(objective));
        }
        if let Some(breakdown) = &report.breakdown {
            out.push('\n');
            out.push_str(&Self::build_breakdown_table(breakdown));
        }

        out.push('\n');
        out.push_str(&Self::build_detail_table(&report.details));
        out
    }

    pub fn build_breakdown_table(breakdown: &CostBreakdown) -> String {
        let rows = [
            (i18n::HIRING_COST, breakdown.hiring),
            (i18n::FIRING_COST, breakdown.firing),
            (i18n::SALARY_COST, breakdown.salary),
            (i18n::OVERTIME_COST, breakdown.overtime),
            (i18n::PENALTY_COST, breakdown.penalty),
        ];

        TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed(i18n::COST_BREAKDOWN), Cow::Borrowed(i18n::AMOUNT)])
            .rows(
                rows.into_iter()
                    .map(|(label, amount)| [Cow::Borrowed(label), Cow::Owned(format_amount(amount))]),
            )
            .build()
    }

    pub fn build_detail_table(details: &[WeekDetail]) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Right; 7])
            .headers(&[
                Cow::Borrowed(i18n::WEEK),
                Cow::Borrowed(i18n::DEMAND),
                Cow::Borrowed(i18n::HIRED),
                Cow::Borrowed(i18n::FIRED),
                Cow::Borrowed(i18n::EMPLOYEES),
                Cow::Borrowed(i18n::OVERTIME),
                Cow::Borrowed(i18n::UNMET_DEMAND),
            ]);

        for detail in details {
            builder = builder.row([
                Cow::Owned(detail.week.to_string()),
                Cow::Owned(detail.demand.to_string()),
                Cow::Owned(detail.hired.to_string()),
                Cow::Owned(detail.fired.to_string()),
                Cow::Owned(detail.employment.to_string()),
                Cow::Owned(detail.overtime.to_string()),
                Cow::Owned(detail.unmet_demand.to_string()),
            ]);
        }

        builder.build()
    }
}

fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use workforce_domain::SolveStatus;

    fn optimal_report() -> PlanReport {
        PlanReport {
            status: SolveStatus::Optimal,
            total_cost: Some(2_200.0),
            cost_objective: Some(22_200.0),
            breakdown: Some(CostBreakdown {
                hiring: 200.0,
                firing: 0.0,
                salary: 2_000.0,
                overtime: 0.0,
                penalty: 20_000.0,
            }),
            details: vec![WeekDetail {
                week: 1,
                demand: 100.0,
                hired: 2,
                fired: 0,
                employment: 2,
                overtime: 0,
                unmet_demand: 20,
            }],
        }
    }

    #[cfg(not(feature = "ja"))]
    #[test]
    fn renders_costs_and_weekly_table() {
        let text = PlanPresenter::render(&optimal_report());

        assert!(text.starts_with("Optimization Results\nStatus: Optimal\n"));
        assert!(text.contains("Total Cost: 2200.00\n"));
        assert!(text.contains("Cost Objective (incl. penalty): 22200.00\n"));
        assert!(text.contains("| Unmet penalty  | 20000.00 |"));
        assert!(text.contains("| Week | Demand | Hired | Fired | Employees | Overtime | Unmet Demand |"));
        assert!(text.contains("|    1 |    100 |     2 |     0 |         2 |        0 |           20 |"));
    }

    #[cfg(not(feature = "ja"))]
    #[test]
    fn non_optimal_report_has_no_tables() {
        let text = PlanPresenter::render(&PlanReport::without_solution(SolveStatus::Infeasible));

        assert_eq!(
            text,
            "Optimization Results\nStatus: Infeasible\nNo feasible plan was found\n"
        );
    }

    #[test]
    fn detail_table_has_one_line_per_week() {
        let mut report = optimal_report();
        let mut second = report.details[0];
        second.week = 2;
        report.details.push(second);

        let table = PlanPresenter::build_detail_table(&report.details);

        // rule, header, rule, two rows, rule
        assert_eq!(table.lines().count(), 6);
    }
}
