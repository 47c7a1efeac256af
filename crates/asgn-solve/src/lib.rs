pub mod backend;
pub mod bnb;
pub mod error;
pub mod formulator;
pub mod lp;
pub mod model;

pub use backend::{SolveStatus, SolverBackend, SolverOutcome};
pub use bnb::BranchAndBound;
pub use error::{Result, SolveError};
pub use formulator::{AssignmentFormulator, BuiltModel, Pair};
pub use lp::{lp_string, write_lp};
pub use model::{Constraint, ConstraintOp, Model, VarId, namer};
