//! Model intermediate representation: binary variables, linear
//! constraints, and a linear minimize objective.
//!
//! The formulator builds this IR once per solve; backends consume it
//! read-only, and the LP export renders it verbatim.

/// Comparison operator of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintOp {
    /// Less than or equal (<=).
    Le,
    /// Greater than or equal (>=).
    Ge,
    /// Equal (=).
    Eq,
}

/// Handle to a declared decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarId(usize);

impl VarId {
    /// Position of the variable in declaration order; also the index of
    /// its solved value in a backend outcome.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named linear constraint `Σ coeff·x {<=,>=,=} rhs`.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub name: String,
    pub terms: Vec<(VarId, f64)>,
    pub op: ConstraintOp,
    pub rhs: f64,
}

/// An assembled binary program with one minimize objective.
#[derive(Debug, Clone, Default)]
pub struct Model {
    name: String,
    variables: Vec<String>,
    constraints: Vec<Constraint>,
    objective: Vec<(VarId, f64)>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare a binary decision variable. Names must be unique; the
    /// formulator's naming scheme guarantees this per compatibility pair.
    pub fn add_binary(&mut self, name: String) -> VarId {
        let id = VarId(self.variables.len());
        self.variables.push(name);
        id
    }

    /// Add a named linear constraint.
    pub fn add_constraint(
        &mut self,
        name: String,
        terms: Vec<(VarId, f64)>,
        op: ConstraintOp,
        rhs: f64,
    ) {
        self.constraints.push(Constraint {
            name,
            terms,
            op,
            rhs,
        });
    }

    /// Set the linear minimization objective.
    pub fn set_minimize_objective(&mut self, terms: Vec<(VarId, f64)>) {
        self.objective = terms;
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn variable_name(&self, id: VarId) -> &str {
        &self.variables[id.0]
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn objective(&self) -> &[(VarId, f64)] {
        &self.objective
    }

    /// Evaluate the objective against one value per declared variable.
    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.objective
            .iter()
            .map(|(id, coeff)| coeff * values[id.0])
            .sum()
    }
}

/// Name a variable or constraint from a base name and the index values
/// that make it unique within its family, e.g. `x[R1,T1]`.
pub fn namer(base: &str, parts: &[&str]) -> String {
    format!("{base}[{}]", parts.join(","))
}
