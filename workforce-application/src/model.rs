use workforce_domain::PlanParameters;

/// Inclusive weekly demand range used when a plan names none.
pub const DEFAULT_DEMAND_RANGE: (u32, u32) = (20, 200);

/// Hours assumed for every week when random demand is switched off and
/// no values are listed.
pub const DEFAULT_WEEKLY_DEMAND: f64 = 50.0;

/// Where a plan's demand series comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DemandSpec {
    /// Hours per week, as entered.
    Explicit(Vec<f64>),
    /// Whole hours drawn uniformly from `min..=max`. Without a seed the
    /// caller picks one.
    Uniform {
        min: u32,
        max: u32,
        seed: Option<u64>,
    },
}

impl Default for DemandSpec {
    fn default() -> Self {
        let (min, max) = DEFAULT_DEMAND_RANGE;
        Self::Uniform {
            min,
            max,
            seed: None,
        }
    }
}

/// A parsed plan file: every parameter plus a demand definition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanFile {
    pub parameters: PlanParameters,
    pub demand: DemandSpec,
}
