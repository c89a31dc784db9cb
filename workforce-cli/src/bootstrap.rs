use std::env;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use workforce_milp::{SolverBackend, SolverOptions, UnknownBackend};

pub const SOLVER_VAR: &str = "WORKFORCE_SOLVER";
pub const TIME_LIMIT_VAR: &str = "WORKFORCE_TIME_LIMIT_SECS";
pub const MIP_GAP_VAR: &str = "WORKFORCE_MIP_GAP";
pub const THREADS_VAR: &str = "WORKFORCE_THREADS";
pub const VERBOSE_VAR: &str = "WORKFORCE_SOLVER_VERBOSE";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigLoadError {
    #[error("WORKFORCE_SOLVER: {0}")]
    Backend(#[from] UnknownBackend),
    #[error("{var} must be {expected} (found '{value}')")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Solver settings read from the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolverConfig {
    pub options: SolverOptions,
}

impl SolverConfig {
    /// Reads the process environment after loading `.env` when present.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigLoadError> {
        let mut options = SolverOptions::default();

        if let Some(raw) = lookup(SOLVER_VAR) {
            options = options.with_backend(raw.parse::<SolverBackend>()?);
        }
        if let Some(raw) = lookup(TIME_LIMIT_VAR) {
            let seconds = parse_with(TIME_LIMIT_VAR, &raw, "a positive number of seconds", |s| {
                s.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
            })?;
            options = options.with_time_limit(seconds);
        }
        if let Some(raw) = lookup(MIP_GAP_VAR) {
            let gap = parse_with(MIP_GAP_VAR, &raw, "a number in [0, 1]", |s| {
                s.parse::<f64>().ok().filter(|v| (0.0..=1.0).contains(v))
            })?;
            options = options.with_mip_rel_gap(gap);
        }
        if let Some(raw) = lookup(THREADS_VAR) {
            let threads = parse_with(THREADS_VAR, &raw, "a positive whole number", |s| {
                s.parse::<u32>().ok().filter(|v| *v > 0)
            })?;
            options = options.with_threads(threads);
        }
        if let Some(raw) = lookup(VERBOSE_VAR) {
            let verbose = parse_with(VERBOSE_VAR, &raw, "true or false", parse_flag)?;
            options = options.with_verbose(verbose);
        }

        Ok(Self { options })
    }
}

fn parse_with<T>(
    var: &'static str,
    raw: &str,
    expected: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ConfigLoadError> {
    parse(raw.trim()).ok_or_else(|| ConfigLoadError::InvalidValue {
        var,
        value: raw.to_string(),
        expected,
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Logs go to stderr so stdout carries only the plan. `RUST_LOG`
/// overrides the default `warn` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
