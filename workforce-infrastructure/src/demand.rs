use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;
use workforce_application::{DemandError, DemandSource, DemandSpec};
use workforce_domain::MAX_WEEKS;

/// Whole-hour demand drawn uniformly from `min..=max`.
///
/// The series depends only on the range, the horizon and the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformDemand {
    pub min: u32,
    pub max: u32,
    pub seed: u64,
}

impl DemandSource for UniformDemand {
    fn demand(&self, weeks: u32) -> Result<Vec<f64>, DemandError> {
        if self.min > self.max {
            return Err(DemandError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        if weeks > MAX_WEEKS {
            return Err(DemandError::HorizonTooLong {
                weeks,
                max: MAX_WEEKS,
            });
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let series: Vec<f64> = (0..weeks)
            .map(|_| f64::from(rng.random_range(self.min..=self.max)))
            .collect();
        debug!(
            weeks,
            min = self.min,
            max = self.max,
            seed = self.seed,
            "Generated uniform demand"
        );
        Ok(series)
    }
}

/// Demand entered week by week.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplicitDemand(pub Vec<f64>);

impl DemandSource for ExplicitDemand {
    // Length is checked by validation, not here.
    fn demand(&self, _weeks: u32) -> Result<Vec<f64>, DemandError> {
        Ok(self.0.clone())
    }
}

/// The demand source a plan file asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfiguredDemand {
    Explicit(ExplicitDemand),
    Uniform(UniformDemand),
}

impl ConfiguredDemand {
    /// Resolves `spec`, calling `pick_seed` only for an unseeded uniform
    /// range.
    pub fn from_spec(spec: &DemandSpec, pick_seed: impl FnOnce() -> u64) -> Self {
        match spec {
            DemandSpec::Explicit(values) => Self::Explicit(ExplicitDemand(values.clone())),
            &DemandSpec::Uniform { min, max, seed } => Self::Uniform(UniformDemand {
                min,
                max,
                seed: seed.unwrap_or_else(pick_seed),
            }),
        }
    }

    /// Seed in use, for uniform demand.
    pub fn seed(&self) -> Option<u64> {
        match self {
            Self::Explicit(_) => None,
            Self::Uniform(uniform) => Some(uniform.seed),
        }
    }
}

impl DemandSource for ConfiguredDemand {
    fn demand(&self, weeks: u32) -> Result<Vec<f64>, DemandError> {
        match self {
            Self::Explicit(explicit) => explicit.demand(weeks),
            Self::Uniform(uniform) => uniform.demand(weeks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn same_seed_gives_same_series() {
        let source = UniformDemand {
            min: 20,
            max: 200,
            seed: 42,
        };

        assert_eq!(
            source.demand(12).expect("valid range"),
            source.demand(12).expect("valid range")
        );
    }

    #[test]
    fn single_value_range_is_constant() {
        let source = UniformDemand {
            min: 75,
            max: 75,
            seed: 3,
        };

        assert_eq!(source.demand(3), Ok(vec![75.0, 75.0, 75.0]));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let source = UniformDemand {
            min: 200,
            max: 20,
            seed: 0,
        };

        assert_eq!(
            source.demand(4),
            Err(DemandError::EmptyRange { min: 200, max: 20 })
        );
    }

    #[test]
    fn refuses_to_draw_past_the_horizon_limit() {
        let source = UniformDemand {
            min: 20,
            max: 200,
            seed: 1,
        };

        assert_eq!(
            source.demand(4_000_000_000),
            Err(DemandError::HorizonTooLong {
                weeks: 4_000_000_000,
                max: MAX_WEEKS
            })
        );
        assert_eq!(source.demand(MAX_WEEKS).map(|s| s.len()), Ok(52));
    }

    #[test]
    fn explicit_demand_is_returned_as_entered() {
        let source = ExplicitDemand(vec![10.0, 0.0, 35.0]);

        assert_eq!(source.demand(3), Ok(vec![10.0, 0.0, 35.0]));
    }

    #[rstest]
    #[case::seeded(DemandSpec::Uniform { min: 1, max: 9, seed: Some(5) }, Some(5))]
    #[case::unseeded(DemandSpec::Uniform { min: 1, max: 9, seed: None }, Some(77))]
    #[case::explicit(DemandSpec::Explicit(vec![1.0]), None)]
    fn spec_resolution_only_picks_missing_seeds(
        #[case] spec: DemandSpec,
        #[case] expected_seed: Option<u64>,
    ) {
        let configured = ConfiguredDemand::from_spec(&spec, || 77);

        assert_eq!(configured.seed(), expected_seed);
    }

    proptest! {
        #[test]
        fn draws_stay_within_range(
            min in 0u32..=500,
            width in 0u32..=500,
            weeks in 1u32..=52,
            seed in any::<u64>(),
        ) {
            let source = UniformDemand { min, max: min + width, seed };
            let series = source.demand(weeks).expect("valid range");

            prop_assert_eq!(series.len(), weeks as usize);
            for value in series {
                prop_assert!(value >= f64::from(min));
                prop_assert!(value <= f64::from(min + width));
                prop_assert_eq!(value.fract(), 0.0);
            }
        }
    }
}
