use good_lp::{
    Constraint, Expression, ProblemVariables, ResolutionError, Solution as _, SolverModel,
    Variable, variable, variable::UnsolvedProblem,
};
use std::{fmt, str::FromStr};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use workforce_domain::SolveStatus;

use crate::program::{IntegerProgram, LinearExpr, Relation, VarId};

/// Largest distance from an integer a returned value may have before it
/// is treated as a solver fault.
pub const INTEGRALITY_TOLERANCE: f64 = 1e-6;

/// Branch-and-bound backends reachable through `good_lp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverBackend {
    MicroLp,
    Highs,
}

impl SolverBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MicroLp => "microlp",
            Self::Highs => "highs",
        }
    }

    /// Whether this build was compiled with the backend's cargo feature.
    pub fn is_available(self) -> bool {
        match self {
            Self::MicroLp => cfg!(feature = "microlp"),
            Self::Highs => cfg!(feature = "highs"),
        }
    }
}

impl Default for SolverBackend {
    fn default() -> Self {
        if cfg!(feature = "microlp") || !cfg!(feature = "highs") {
            Self::MicroLp
        } else {
            Self::Highs
        }
    }
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown solver backend '{0}' (expected 'microlp' or 'highs')")]
pub struct UnknownBackend(pub String);

impl FromStr for SolverBackend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "microlp" => Ok(Self::MicroLp),
            "highs" => Ok(Self::Highs),
            _ => Err(UnknownBackend(s.to_string())),
        }
    }
}

/// Backend settings passed through to the solver untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolverOptions {
    pub backend: SolverBackend,
    /// Wall-clock limit in seconds. `None` means no limit.
    pub time_limit_seconds: Option<f64>,
    /// Relative MIP gap. `None` uses the backend default.
    pub mip_rel_gap: Option<f64>,
    pub threads: Option<u32>,
    pub verbose: bool,
}

impl SolverOptions {
    pub fn with_backend(mut self, backend: SolverBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit_seconds = Some(seconds);
        self
    }

    pub fn with_mip_rel_gap(mut self, gap: f64) -> Self {
        self.mip_rel_gap = Some(gap);
        self
    }

    pub fn with_threads(mut self, threads: u32) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn has_tuning(&self) -> bool {
        self.time_limit_seconds.is_some() || self.mip_rel_gap.is_some() || self.threads.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("Solver backend '{backend}' is not available in this build")]
    SolverUnavailable { backend: SolverBackend },
    #[error("Solver returned {value} for integer variable '{variable}'")]
    NumericInconsistency { variable: String, value: f64 },
}

/// Outcome of one solve. Values are present only for `Optimal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    status: SolveStatus,
    objective_value: Option<f64>,
    values: Vec<u64>,
}

impl Solution {
    pub(crate) fn optimal(objective_value: f64, values: Vec<u64>) -> Self {
        Self {
            status: SolveStatus::Optimal,
            objective_value: Some(objective_value),
            values,
        }
    }

    pub(crate) fn without_values(status: SolveStatus) -> Self {
        Self {
            status,
            objective_value: None,
            values: Vec::new(),
        }
    }

    pub fn status(&self) -> SolveStatus {
        self.status
    }

    pub fn objective_value(&self) -> Option<f64> {
        self.objective_value
    }

    pub fn value(&self, var: VarId) -> Option<u64> {
        self.values.get(var.index()).copied()
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }
}

/// Solves `program` with the backend selected in `options`.
///
/// Infeasible, unbounded and otherwise unsolved programs are returned as
/// data; only a missing backend or a non-integral value is an error.
pub fn solve(program: &IntegerProgram, options: &SolverOptions) -> Result<Solution, SolveError> {
    let mut vars = ProblemVariables::new();
    let handles: Vec<Variable> = (0..program.variable_count())
        .map(|_| vars.add(variable().integer().min(0.0)))
        .collect();

    let objective = to_expression(program.objective(), &handles);
    let constraints: Vec<Constraint> = program
        .rows()
        .iter()
        .map(|row| {
            let expr = to_expression(&row.expr, &handles);
            match row.relation {
                Relation::Eq => expr.eq(row.rhs),
                Relation::Le => expr.leq(row.rhs),
                Relation::Ge => expr.geq(row.rhs),
            }
        })
        .collect();

    debug!(
        backend = %options.backend,
        variable_count = handles.len(),
        row_count = constraints.len(),
        time_limit_seconds = ?options.time_limit_seconds,
        mip_rel_gap = ?options.mip_rel_gap,
        threads = ?options.threads,
        "Submitting integer program"
    );

    let raw = match run_backend(vars.minimise(objective), constraints, &handles, options)? {
        Ok(raw) => raw,
        Err(ResolutionError::Infeasible) => {
            info!(backend = %options.backend, "Integer program is infeasible");
            return Ok(Solution::without_values(SolveStatus::Infeasible));
        }
        Err(ResolutionError::Unbounded) => {
            info!(backend = %options.backend, "Integer program is unbounded");
            return Ok(Solution::without_values(SolveStatus::Unbounded));
        }
        Err(other) => {
            warn!(
                backend = %options.backend,
                error = %other,
                "Solver stopped without a solution"
            );
            return Ok(Solution::without_values(SolveStatus::NotSolved));
        }
    };

    let mut values = Vec::with_capacity(raw.len());
    for (idx, value) in raw.into_iter().enumerate() {
        let Some(rounded) = round_to_integer(value) else {
            let variable = program.variable_name(VarId::from_index(idx)).to_string();
            error!(
                variable = %variable,
                value,
                tolerance = INTEGRALITY_TOLERANCE,
                "Solver returned a non-integral value for an integer variable"
            );
            return Err(SolveError::NumericInconsistency { variable, value });
        };
        values.push(rounded);
    }

    let objective_value = program.objective().evaluate(&values);
    info!(
        backend = %options.backend,
        objective_value,
        "Integer program solved to optimality"
    );
    Ok(Solution::optimal(objective_value, values))
}

/// Rounds a solver value to the non-negative integer it approximates.
///
/// Returns `None` when the value is more than [`INTEGRALITY_TOLERANCE`]
/// away from an integer, or rounds to a negative number.
pub fn round_to_integer(value: f64) -> Option<u64> {
    let rounded = value.round();
    if !value.is_finite() || (value - rounded).abs() > INTEGRALITY_TOLERANCE || rounded < 0.0 {
        return None;
    }
    Some(rounded as u64)
}

fn to_expression(expr: &LinearExpr, handles: &[Variable]) -> Expression {
    let mut out = Expression::with_capacity(expr.terms().len());
    for &(var, coef) in expr.terms() {
        out.add_mul(coef, handles[var.index()]);
    }
    out
}

type BackendResult = Result<Vec<f64>, ResolutionError>;

fn run_backend(
    unsolved: UnsolvedProblem,
    constraints: Vec<Constraint>,
    handles: &[Variable],
    options: &SolverOptions,
) -> Result<BackendResult, SolveError> {
    match options.backend {
        #[cfg(feature = "microlp")]
        SolverBackend::MicroLp => {
            if options.has_tuning() || options.verbose {
                debug!(
                    backend = %options.backend,
                    "Backend ignores time limit, gap, thread and verbosity options"
                );
            }
            let model = unsolved.using(good_lp::solvers::microlp::microlp);
            Ok(run_model(model, constraints, handles))
        }
        #[cfg(feature = "highs")]
        SolverBackend::Highs => {
            let mut model = unsolved
                .using(good_lp::solvers::highs::highs)
                .set_option("output_flag", options.verbose);
            if let Some(seconds) = options.time_limit_seconds {
                model = model.set_option("time_limit", seconds);
            }
            if let Some(gap) = options.mip_rel_gap {
                model = model.set_option("mip_rel_gap", gap);
            }
            if let Some(threads) = options.threads {
                model = model.set_option("threads", i32::try_from(threads).unwrap_or(i32::MAX));
            }
            Ok(run_model(model, constraints, handles))
        }
        #[allow(unreachable_patterns)]
        backend => {
            error!(backend = %backend, "Requested solver backend is not compiled in");
            Err(SolveError::SolverUnavailable { backend })
        }
    }
}

fn run_model<M>(mut model: M, constraints: Vec<Constraint>, handles: &[Variable]) -> BackendResult
where
    M: SolverModel<Error = ResolutionError>,
{
    for constraint in constraints {
        model = model.with(constraint);
    }
    let solution = model.solve()?;
    Ok(handles.iter().map(|var| solution.value(*var)).collect())
}
