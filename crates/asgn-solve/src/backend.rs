//! Solver capability interface.
//!
//! The formulator is programmed against this trait so the same formulation
//! code serves any engine, and tests can drive the status-handling paths
//! with a scripted stub.

use std::fmt;

use crate::model::Model;

/// Terminal status reported by a solver backend.
///
/// A closed set: every call site must handle all three, and anything a
/// backend cannot map onto Optimal or Infeasible travels as `Other` with
/// the raw reason preserved for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    /// A provably optimal solution was found.
    Optimal,
    /// No feasible solution exists.
    Infeasible,
    /// Anything else: limits hit, unbounded, unknown.
    Other(String),
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "Optimal"),
            SolveStatus::Infeasible => write!(f, "Infeasible"),
            SolveStatus::Other(reason) => write!(f, "Other({reason})"),
        }
    }
}

/// Result of one backend solve.
#[derive(Debug, Clone)]
pub struct SolverOutcome {
    pub status: SolveStatus,
    /// One solved value per declared variable, in declaration order.
    /// Meaningful only when `status` is `Optimal`.
    pub values: Vec<f64>,
}

/// An optimization engine able to solve an assembled binary model.
///
/// The solve call is a single blocking operation: no progress callbacks,
/// no cancellation. Backends must not retain state across calls; each
/// model is solved independently.
pub trait SolverBackend {
    /// Backend name for logging and diagnostics.
    fn name(&self) -> &str;

    /// Solve the model and report a status plus per-variable values.
    fn solve(&self, model: &Model) -> SolverOutcome;
}
