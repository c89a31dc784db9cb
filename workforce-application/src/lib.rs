#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod planning_service;
pub mod ports;

pub use error::{DemandError, OptimizationError, PlanParseError, PlanningError};
pub use model::{DEFAULT_DEMAND_RANGE, DEFAULT_WEEKLY_DEMAND, DemandSpec, PlanFile};
pub use planning_service::PlanningService;
pub use ports::{DemandSource, PlanParser, WorkforceOptimizer};
