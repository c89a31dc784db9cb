#![warn(clippy::uninlined_format_args)]

pub mod demand;
pub mod optimizer;
pub mod parser;

pub use demand::{ConfiguredDemand, ExplicitDemand, UniformDemand};
pub use optimizer::MilpWorkforceOptimizer;
pub use parser::{PlanFileParser, parse_plan};
