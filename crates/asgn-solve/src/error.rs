use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver proved no feasible assignment exists. Fatal for the
    /// solve; no partial result is returned.
    #[error("model results in infeasible solution")]
    Infeasible,
    /// The backend reported a status other than Optimal or Infeasible.
    #[error("solver returned unhandled status: {0}")]
    UnhandledStatus(String),
    /// The backend violated the solve protocol (wrong value count).
    #[error("solver backend error: {0}")]
    Backend(String),
    /// The model tables are missing a value the formulation needs.
    #[error("model data is incomplete: {0}")]
    MissingInput(String),
    #[error("failed to export lp file: {0}")]
    LpExport(#[from] std::io::Error),
    #[error(transparent)]
    Model(#[from] asgn_model::AsgnError),
}

pub type Result<T> = std::result::Result<T, SolveError>;
