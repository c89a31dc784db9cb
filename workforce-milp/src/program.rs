//! Solver-independent integer program.
//!
//! Every variable is a non-negative integer. Rows keep their constant
//! part on the right-hand side.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(usize);

impl VarId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    terms: Vec<(VarId, f64)>,
}

impl LinearExpr {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            terms: Vec::with_capacity(capacity),
        }
    }

    pub fn add_term(&mut self, var: VarId, coefficient: f64) {
        self.terms.push((var, coefficient));
    }

    pub fn term(mut self, var: VarId, coefficient: f64) -> Self {
        self.add_term(var, coefficient);
        self
    }

    pub fn terms(&self) -> &[(VarId, f64)] {
        &self.terms
    }

    pub fn coefficient(&self, var: VarId) -> f64 {
        self.terms
            .iter()
            .filter(|(id, _)| *id == var)
            .map(|(_, coef)| coef)
            .sum()
    }

    pub fn evaluate(&self, values: &[u64]) -> f64 {
        self.terms
            .iter()
            .map(|&(var, coef)| coef * values[var.index()] as f64)
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Eq,
    Le,
    Ge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub name: String,
    pub expr: LinearExpr,
    pub relation: Relation,
    pub rhs: f64,
}

impl Row {
    pub fn is_satisfied(&self, values: &[u64], tolerance: f64) -> bool {
        let lhs = self.expr.evaluate(values);
        match self.relation {
            Relation::Eq => (lhs - self.rhs).abs() <= tolerance,
            Relation::Le => lhs <= self.rhs + tolerance,
            Relation::Ge => lhs >= self.rhs - tolerance,
        }
    }
}

/// Minimisation program over non-negative integer variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegerProgram {
    variables: Vec<String>,
    rows: Vec<Row>,
    objective: LinearExpr,
}

impl IntegerProgram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_variable(&mut self, name: impl Into<String>) -> VarId {
        self.variables.push(name.into());
        VarId(self.variables.len() - 1)
    }

    pub fn add_row(
        &mut self,
        name: impl Into<String>,
        expr: LinearExpr,
        relation: Relation,
        rhs: f64,
    ) {
        self.rows.push(Row {
            name: name.into(),
            expr,
            relation,
            rhs,
        });
    }

    pub fn set_objective(&mut self, objective: LinearExpr) {
        self.objective = objective;
    }

    pub fn variable_name(&self, var: VarId) -> &str {
        &self.variables[var.index()]
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, name: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.name == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn objective(&self) -> &LinearExpr {
        &self.objective
    }
}
