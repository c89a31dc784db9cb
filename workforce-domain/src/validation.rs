use thiserror::Error;

use crate::model::{
    Capacities, CostCoefficients, CoveragePolicy, MAX_WEEKS, PlanParameters, PlanRequest,
};

/// Rejection of a malformed planning configuration. Raised before any
/// model is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Planning horizon must contain at least one week")]
    EmptyHorizon,
    #[error("Planning horizon of {weeks} weeks exceeds the limit of {max}")]
    HorizonTooLong { weeks: u32, max: u32 },
    #[error("Cost coefficient '{name}' must be non-negative (found {value})")]
    NegativeCost { name: &'static str, value: f64 },
    #[error("Cost coefficient '{name}' must be a finite number")]
    NonFiniteCost { name: &'static str },
    #[error("Capacity '{name}' must be at least 1")]
    NonPositiveCapacity { name: &'static str },
    #[error("Demand series has {actual} values but the horizon has {expected} weeks")]
    DemandLengthMismatch { expected: usize, actual: usize },
    #[error("Demand for week {week} must be non-negative (found {value})")]
    NegativeDemand { week: usize, value: f64 },
    #[error("Demand for week {week} must be a finite number")]
    NonFiniteDemand { week: usize },
    #[error("Demand for week {week} must be a whole number of hours (found {value})")]
    NonIntegralDemand { week: usize, value: f64 },
    #[error("Service rate must lie in [0, 1] (found {0})")]
    ServiceRateOutOfRange(f64),
    #[error("Budget must be non-negative (found {0})")]
    NegativeBudget(f64),
    #[error("Budget must be a finite number")]
    NonFiniteBudget,
}

/// A configuration that passed every check in [`PlanRequest::validate`].
///
/// The fields are private so a model can only be built from a checked
/// configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPlan {
    weeks: u32,
    costs: CostCoefficients,
    initial_employees: u32,
    capacities: Capacities,
    demand: Vec<f64>,
    coverage: CoveragePolicy,
}

impl ValidatedPlan {
    pub fn weeks(&self) -> u32 {
        self.weeks
    }

    pub fn costs(&self) -> &CostCoefficients {
        &self.costs
    }

    pub fn initial_employees(&self) -> u32 {
        self.initial_employees
    }

    pub fn capacities(&self) -> &Capacities {
        &self.capacities
    }

    pub fn demand(&self) -> &[f64] {
        &self.demand
    }

    pub fn coverage(&self) -> CoveragePolicy {
        self.coverage
    }
}

impl PlanParameters {
    /// Checks that `weeks` lies in `1..=MAX_WEEKS`.
    ///
    /// Run before anything is sized by the horizon.
    pub fn check_horizon(&self) -> Result<(), ConfigError> {
        if self.weeks < 1 {
            return Err(ConfigError::EmptyHorizon);
        }
        if self.weeks > MAX_WEEKS {
            return Err(ConfigError::HorizonTooLong {
                weeks: self.weeks,
                max: MAX_WEEKS,
            });
        }
        Ok(())
    }
}

impl PlanRequest {
    /// Checks the request and resolves its coverage policy.
    ///
    /// The first failing check is reported, in this order: horizon, costs,
    /// capacities, demand length, demand values, service rate, budget.
    pub fn validate(&self) -> Result<ValidatedPlan, ConfigError> {
        let params = &self.parameters;
        params.check_horizon()?;

        for (name, value) in params.costs.named() {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteCost { name });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeCost { name, value });
            }
        }

        for (name, value) in params.capacities.named() {
            if value < 1 {
                return Err(ConfigError::NonPositiveCapacity { name });
            }
        }

        let expected = params.weeks as usize;
        if self.demand.len() != expected {
            return Err(ConfigError::DemandLengthMismatch {
                expected,
                actual: self.demand.len(),
            });
        }

        for (idx, &value) in self.demand.iter().enumerate() {
            let week = idx + 1;
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteDemand { week });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeDemand { week, value });
            }
            // Integer hours and slack cannot meet a fractional demand exactly.
            if value.fract() != 0.0 {
                return Err(ConfigError::NonIntegralDemand { week, value });
            }
        }

        if let Some(rate) = params.policy.service_rate {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::ServiceRateOutOfRange(rate));
            }
        }

        if let Some(budget) = params.policy.budget {
            if !budget.is_finite() {
                return Err(ConfigError::NonFiniteBudget);
            }
            if budget < 0.0 {
                return Err(ConfigError::NegativeBudget(budget));
            }
        }

        Ok(ValidatedPlan {
            weeks: params.weeks,
            costs: params.costs,
            initial_employees: params.initial_employees,
            capacities: params.capacities,
            demand: self.demand.clone(),
            coverage: params.policy.coverage(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PolicyParameters;
    use proptest::prelude::*;
    use rstest::rstest;

    fn parameters(weeks: u32) -> PlanParameters {
        PlanParameters {
            weeks,
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
            policy: PolicyParameters::default(),
        }
    }

    fn request(weeks: u32, demand: &[f64]) -> PlanRequest {
        parameters(weeks).with_demand(demand.to_vec())
    }

    #[test]
    fn accepts_default_form_values() {
        let plan = request(3, &[20.0, 200.0, 0.0])
            .validate()
            .expect("valid request");

        assert_eq!(plan.weeks(), 3);
        assert_eq!(plan.demand(), &[20.0, 200.0, 0.0]);
        assert_eq!(plan.coverage(), CoveragePolicy::Strict);
    }

    #[test]
    fn rejects_empty_horizon() {
        assert_eq!(request(0, &[]).validate(), Err(ConfigError::EmptyHorizon));
    }

    #[rstest]
    #[case::one_year(MAX_WEEKS, true)]
    #[case::past_one_year(MAX_WEEKS + 1, false)]
    #[case::absurd(4_000_000_000, false)]
    fn caps_the_horizon(#[case] weeks: u32, #[case] accepted: bool) {
        let result = parameters(weeks).check_horizon();

        if accepted {
            assert_eq!(result, Ok(()));
        } else {
            assert_eq!(
                result,
                Err(ConfigError::HorizonTooLong {
                    weeks,
                    max: MAX_WEEKS
                })
            );
        }
    }

    #[test]
    fn long_horizon_is_reported_before_demand_length() {
        assert_eq!(
            request(MAX_WEEKS + 1, &[10.0]).validate(),
            Err(ConfigError::HorizonTooLong {
                weeks: MAX_WEEKS + 1,
                max: MAX_WEEKS
            })
        );
    }

    #[rstest]
    #[case::hiring(|c: &mut CostCoefficients| c.hiring_cost = -1.0, "hiringCost")]
    #[case::firing(|c: &mut CostCoefficients| c.firing_cost = -0.5, "firingCost")]
    #[case::salary(|c: &mut CostCoefficients| c.salary_cost = -1000.0, "salaryCost")]
    #[case::overtime(|c: &mut CostCoefficients| c.overtime_cost = -20.0, "overtimeCost")]
    #[case::penalty(|c: &mut CostCoefficients| c.penalty_cost = -1.0, "penaltyCost")]
    fn rejects_negative_costs(
        #[case] mutate: fn(&mut CostCoefficients),
        #[case] expected_name: &str,
    ) {
        let mut req = request(1, &[10.0]);
        mutate(&mut req.parameters.costs);

        match req.validate() {
            Err(ConfigError::NegativeCost { name, .. }) => assert_eq!(name, expected_name),
            other => panic!("expected negative cost error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_finite_cost() {
        let mut req = request(1, &[10.0]);
        req.parameters.costs.overtime_cost = f64::NAN;

        assert_eq!(
            req.validate(),
            Err(ConfigError::NonFiniteCost {
                name: "overtimeCost"
            })
        );
    }

    #[rstest]
    #[case::max_hire(|c: &mut Capacities| c.max_hire = 0, "maxHire")]
    #[case::max_fire(|c: &mut Capacities| c.max_fire = 0, "maxFire")]
    #[case::overtime(|c: &mut Capacities| c.overtime_rate_per_employee = 0, "overtimeRatePerEmployee")]
    #[case::working(|c: &mut Capacities| c.working_hours_per_employee = 0, "workingHoursPerEmployee")]
    fn rejects_zero_capacities(
        #[case] mutate: fn(&mut Capacities),
        #[case] expected_name: &'static str,
    ) {
        let mut req = request(1, &[10.0]);
        mutate(&mut req.parameters.capacities);

        assert_eq!(
            req.validate(),
            Err(ConfigError::NonPositiveCapacity {
                name: expected_name
            })
        );
    }

    #[rstest]
    #[case::too_short(3, &[10.0, 20.0], 2)]
    #[case::too_long(1, &[10.0, 20.0], 2)]
    fn rejects_demand_length_mismatch(
        #[case] weeks: u32,
        #[case] demand: &[f64],
        #[case] actual: usize,
    ) {
        assert_eq!(
            request(weeks, demand).validate(),
            Err(ConfigError::DemandLengthMismatch {
                expected: weeks as usize,
                actual,
            })
        );
    }

    #[rstest]
    #[case::negative(&[10.0, -1.0], ConfigError::NegativeDemand { week: 2, value: -1.0 })]
    #[case::fractional(&[10.5, 1.0], ConfigError::NonIntegralDemand { week: 1, value: 10.5 })]
    #[case::infinite(&[10.0, f64::INFINITY], ConfigError::NonFiniteDemand { week: 2 })]
    fn rejects_bad_demand_values(#[case] demand: &[f64], #[case] expected: ConfigError) {
        assert_eq!(request(2, demand).validate(), Err(expected));
    }

    #[rstest]
    #[case::above_one(1.2)]
    #[case::below_zero(-0.1)]
    fn rejects_service_rate_outside_unit_interval(#[case] rate: f64) {
        let mut req = request(1, &[10.0]);
        req.parameters.policy.service_rate = Some(rate);

        assert_eq!(req.validate(), Err(ConfigError::ServiceRateOutOfRange(rate)));
    }

    #[test]
    fn rejects_nan_service_rate() {
        let mut req = request(1, &[10.0]);
        req.parameters.policy.service_rate = Some(f64::NAN);

        assert!(matches!(
            req.validate(),
            Err(ConfigError::ServiceRateOutOfRange(rate)) if rate.is_nan()
        ));
    }

    #[rstest]
    #[case::negative(-1.0, ConfigError::NegativeBudget(-1.0))]
    #[case::infinite(f64::INFINITY, ConfigError::NonFiniteBudget)]
    fn rejects_bad_budget(#[case] budget: f64, #[case] expected: ConfigError) {
        let mut req = request(1, &[10.0]);
        req.parameters.policy.budget = Some(budget);

        assert_eq!(req.validate(), Err(expected));
    }

    #[rstest]
    #[case::zero_rate(0.0)]
    #[case::full_rate(1.0)]
    fn accepts_service_rate_bounds(#[case] rate: f64) {
        let mut req = request(1, &[10.0]);
        req.parameters.policy.service_rate = Some(rate);
        req.parameters.policy.budget = Some(0.0);

        let plan = req.validate().expect("bounds are inclusive");
        assert_eq!(
            plan.coverage(),
            CoveragePolicy::ServiceLevel {
                service_rate: rate,
                budget: Some(0.0),
            }
        );
    }

    proptest! {
        #[test]
        fn whole_non_negative_demand_always_validates(
            demand in prop::collection::vec(0u32..=10_000, 1..=52),
        ) {
            let demand: Vec<f64> = demand.into_iter().map(f64::from).collect();
            let req = request(demand.len() as u32, &demand);

            let plan = req.validate().expect("valid demand");
            prop_assert_eq!(plan.demand(), demand.as_slice());
        }
    }
}
