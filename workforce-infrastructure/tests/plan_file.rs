use rstest::rstest;
use workforce_application::{DemandSpec, PlanParser, PlanningService};
use workforce_domain::{PlanReport, SolveStatus};
use workforce_infrastructure::{ConfiguredDemand, MilpWorkforceOptimizer, PlanFileParser};

static PARSER: PlanFileParser = PlanFileParser;

#[rstest]
#[case::service_level(include_str!("../../demos/spring_rush.plan"), 6)]
#[case::seeded_random(include_str!("../../demos/random_month.plan"), 4)]
fn demo_plans_solve_end_to_end(#[case] content: &str, #[case] weeks: usize) {
    let plan = PARSER.parse(content).expect("demo plan parses");
    let demand = ConfiguredDemand::from_spec(&plan.demand, || 0);
    let optimizer = MilpWorkforceOptimizer::default();

    let report = PlanningService::new(&optimizer)
        .plan_with_demand(plan.parameters, &demand)
        .expect("demo plan solves");

    assert_eq!(report.status, SolveStatus::Optimal);
    assert_eq!(report.details.len(), weeks);
}

#[test]
fn seeded_plan_draws_the_same_demand_every_time() {
    let content = include_str!("../../demos/random_month.plan");
    let plan = PARSER.parse(content).expect("demo plan parses");
    assert!(matches!(
        plan.demand,
        DemandSpec::Uniform {
            seed: Some(2024),
            ..
        }
    ));

    let optimizer = MilpWorkforceOptimizer::default();
    let service = PlanningService::new(&optimizer);
    let demand = ConfiguredDemand::from_spec(&plan.demand, || unreachable!("seed is set"));
    let first = service
        .plan_with_demand(plan.parameters, &demand)
        .expect("plan solves");
    let second = service
        .plan_with_demand(plan.parameters, &demand)
        .expect("plan solves");

    assert_eq!(first.status, SolveStatus::Optimal);
    assert_eq!(first.status, second.status);
    assert_eq!(first.total_cost, second.total_cost);
    let demand_of = |report: &PlanReport| -> Vec<f64> {
        report.details.iter().map(|detail| detail.demand).collect()
    };
    assert_eq!(demand_of(&first), demand_of(&second));

    for report in [&first, &second] {
        let mut previous = u64::from(plan.parameters.initial_employees);
        for detail in &report.details {
            assert!((20.0..=200.0).contains(&detail.demand));
            assert_eq!(detail.employment + detail.fired, previous + detail.hired);
            previous = detail.employment;
        }
    }
}
