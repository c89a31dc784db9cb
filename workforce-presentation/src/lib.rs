#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod plan_presenter;
pub mod text_table;

pub use error_presenter::{format_plan_parse_error, format_planning_error};
pub use plan_presenter::PlanPresenter;
