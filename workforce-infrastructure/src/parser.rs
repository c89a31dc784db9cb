//! Line-oriented plan files.
//!
//! ```text
//! # four weeks with a tight budget
//! weeks = 4
//! salary_cost = 1000
//! budget = 20000
//! service_rate = 0.9
//! demand = 120, 80, 160, 40
//! ```
//!
//! Every key is optional and may appear once. Demand is either listed with
//! `demand`, or drawn from `demand_range` (optionally with `seed`).

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while1},
    character::complete::{char, space0, u32, u64},
    combinator::{all_consuming, opt, recognize, rest, value},
    multi::separated_list1,
    number::complete::double,
    sequence::terminated,
};
use std::collections::HashSet;
use tracing::debug;
use workforce_application::{
    DEFAULT_DEMAND_RANGE, DEFAULT_WEEKLY_DEMAND, DemandSpec, PlanFile, PlanParseError, PlanParser,
};
use workforce_domain::{MAX_WEEKS, PlanParameters};

#[derive(Debug, Clone, Copy, Default)]
pub struct PlanFileParser;

impl PlanParser for PlanFileParser {
    fn parse(&self, content: &str) -> Result<PlanFile, PlanParseError> {
        parse_plan(content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Key {
    Weeks,
    HiringCost,
    FiringCost,
    SalaryCost,
    PenaltyCost,
    OvertimeCost,
    InitialEmployees,
    MaxHire,
    MaxFire,
    OvertimeRate,
    WorkingHours,
    Budget,
    ServiceRate,
    Demand,
    DemandRange,
    Seed,
    RandomDemand,
}

impl Key {
    fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "weeks" => Self::Weeks,
            "hiring_cost" => Self::HiringCost,
            "firing_cost" => Self::FiringCost,
            "salary_cost" => Self::SalaryCost,
            "penalty_cost" => Self::PenaltyCost,
            "overtime_cost" => Self::OvertimeCost,
            "initial_employees" => Self::InitialEmployees,
            "max_hire" => Self::MaxHire,
            "max_fire" => Self::MaxFire,
            "overtime_rate" => Self::OvertimeRate,
            "working_hours" => Self::WorkingHours,
            "budget" => Self::Budget,
            "service_rate" => Self::ServiceRate,
            "demand" => Self::Demand,
            "demand_range" => Self::DemandRange,
            "seed" => Self::Seed,
            "random_demand" => Self::RandomDemand,
            _ => return None,
        };
        Some(key)
    }

    fn expectation(self) -> &'static str {
        match self {
            Self::Weeks
            | Self::InitialEmployees
            | Self::MaxHire
            | Self::MaxFire
            | Self::OvertimeRate
            | Self::WorkingHours
            | Self::Seed => "a whole number",
            Self::HiringCost
            | Self::FiringCost
            | Self::SalaryCost
            | Self::PenaltyCost
            | Self::OvertimeCost
            | Self::Budget
            | Self::ServiceRate => "a number",
            Self::Demand => "a comma-separated list of numbers",
            Self::DemandRange => "a range such as 20..200",
            Self::RandomDemand => "true or false",
        }
    }

    fn defines_demand(self) -> bool {
        matches!(
            self,
            Self::Demand | Self::DemandRange | Self::Seed | Self::RandomDemand
        )
    }
}

#[derive(Debug, Default)]
struct DemandDraft {
    values: Option<Vec<f64>>,
    range: Option<(u32, u32)>,
    seed: Option<u64>,
    random: Option<bool>,
}

impl DemandDraft {
    fn conflicts(&self) -> bool {
        let explicit = self.values.is_some() || self.random == Some(false);
        let random = self.range.is_some() || self.seed.is_some() || self.random == Some(true);
        explicit && random
    }

    // `weeks` is at most MAX_WEEKS; the `weeks` key is rejected above that.
    fn into_spec(self, weeks: u32) -> DemandSpec {
        match self.values {
            Some(values) => DemandSpec::Explicit(values),
            None if self.random == Some(false) => {
                DemandSpec::Explicit(vec![DEFAULT_WEEKLY_DEMAND; weeks as usize])
            }
            None => {
                let (min, max) = self.range.unwrap_or(DEFAULT_DEMAND_RANGE);
                DemandSpec::Uniform {
                    min,
                    max,
                    seed: self.seed,
                }
            }
        }
    }
}

fn comment(input: &str) -> IResult<&str, &str> {
    recognize((alt((tag("//"), tag("#"))), rest)).parse(input)
}

fn line_end(input: &str) -> IResult<&str, ()> {
    value((), (space0, opt(comment))).parse(input)
}

fn key_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_').parse(input)
}

// key = <value>
fn assignment(input: &str) -> IResult<&str, &str> {
    (space0, key_name, space0, char('='), space0)
        .map(|(_, key, _, _, _)| key)
        .parse(input)
}

fn number_list(input: &str) -> IResult<&str, Vec<f64>> {
    separated_list1((space0, char(','), space0), double).parse(input)
}

// 20..200 or 20..=200, both inclusive
fn range(input: &str) -> IResult<&str, (u32, u32)> {
    (u32, space0, tag(".."), opt(char('=')), space0, u32)
        .map(|(min, _, _, _, _, max)| (min, max))
        .parse(input)
}

fn boolean(input: &str) -> IResult<&str, bool> {
    alt((
        value(true, alt((tag_no_case("true"), tag_no_case("yes")))),
        value(false, alt((tag_no_case("false"), tag_no_case("no")))),
    ))
    .parse(input)
}

fn parse_value<'a, O, P>(
    input: &'a str,
    line: usize,
    key: Key,
    parser: P,
) -> Result<O, PlanParseError>
where
    P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    all_consuming(terminated(parser, line_end))
        .parse(input)
        .map(|(_, parsed)| parsed)
        .map_err(|_| PlanParseError::SyntaxError {
            line,
            detail: format!("expected {} after '='", key.expectation()),
        })
}

/// Parses a plan file. Keys left out keep the [`PlanParameters`] defaults.
pub fn parse_plan(content: &str) -> Result<PlanFile, PlanParseError> {
    let mut params = PlanParameters::default();
    let mut demand = DemandDraft::default();
    let mut seen = HashSet::new();

    for (idx, text) in content.lines().enumerate() {
        let line = idx + 1;
        if all_consuming(line_end).parse(text).is_ok() {
            continue;
        }

        let (input, name) = assignment(text).map_err(|_| PlanParseError::SyntaxError {
            line,
            detail: "expected 'key = value'".to_string(),
        })?;
        let key = Key::from_name(name).ok_or_else(|| PlanParseError::UnknownKey {
            key: name.to_string(),
            line,
        })?;
        if !seen.insert(key) {
            return Err(PlanParseError::DuplicateKey {
                key: name.to_string(),
                line,
            });
        }

        match key {
            Key::Weeks => {
                let weeks = parse_value(input, line, key, u32)?;
                if weeks > MAX_WEEKS {
                    return Err(PlanParseError::HorizonTooLong {
                        weeks,
                        max: MAX_WEEKS,
                        line,
                    });
                }
                params.weeks = weeks;
            }
            Key::HiringCost => {
                params.costs.hiring_cost = parse_value(input, line, key, double)?;
            }
            Key::FiringCost => {
                params.costs.firing_cost = parse_value(input, line, key, double)?;
            }
            Key::SalaryCost => {
                params.costs.salary_cost = parse_value(input, line, key, double)?;
            }
            Key::PenaltyCost => {
                params.costs.penalty_cost = parse_value(input, line, key, double)?;
            }
            Key::OvertimeCost => {
                params.costs.overtime_cost = parse_value(input, line, key, double)?;
            }
            Key::InitialEmployees => {
                params.initial_employees = parse_value(input, line, key, u32)?;
            }
            Key::MaxHire => params.capacities.max_hire = parse_value(input, line, key, u32)?,
            Key::MaxFire => params.capacities.max_fire = parse_value(input, line, key, u32)?,
            Key::OvertimeRate => {
                params.capacities.overtime_rate_per_employee = parse_value(input, line, key, u32)?;
            }
            Key::WorkingHours => {
                params.capacities.working_hours_per_employee = parse_value(input, line, key, u32)?;
            }
            Key::Budget => params.policy.budget = Some(parse_value(input, line, key, double)?),
            Key::ServiceRate => {
                params.policy.service_rate = Some(parse_value(input, line, key, double)?);
            }
            Key::Demand => demand.values = Some(parse_value(input, line, key, number_list)?),
            Key::DemandRange => demand.range = Some(parse_value(input, line, key, range)?),
            Key::Seed => demand.seed = Some(parse_value(input, line, key, u64)?),
            Key::RandomDemand => demand.random = Some(parse_value(input, line, key, boolean)?),
        }

        if key.defines_demand() && demand.conflicts() {
            return Err(PlanParseError::ConflictingDemand { line });
        }
    }

    debug!(
        key_count = seen.len(),
        weeks = params.weeks,
        "Plan file parsed"
    );
    Ok(PlanFile {
        demand: demand.into_spec(params.weeks),
        parameters: params,
    })
}
