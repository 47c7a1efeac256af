//! Caller-supplied solve configuration.

use std::path::PathBuf;

use crate::solution::ASSIGNMENT_TOLERANCE;

/// Configuration for one solve.
///
/// Paths and tolerances are passed in here rather than living as constants
/// inside the formulation logic.
#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Where to export the assembled model in LP format before solving.
    /// `None` skips the export. Purely diagnostic; the file is never read
    /// back.
    pub lp_path: Option<PathBuf>,
    /// Solved values above this threshold count as selected.
    pub assignment_tolerance: f64,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            lp_path: Some(PathBuf::from("demo.lp")),
            assignment_tolerance: ASSIGNMENT_TOLERANCE,
        }
    }
}

impl SolveOptions {
    /// Set the LP export path.
    #[must_use]
    pub fn with_lp_path(mut self, path: PathBuf) -> Self {
        self.lp_path = Some(path);
        self
    }

    /// Disable the LP export side artifact.
    #[must_use]
    pub fn without_lp_export(mut self) -> Self {
        self.lp_path = None;
        self
    }

    /// Override the assignment tolerance.
    #[must_use]
    pub fn with_assignment_tolerance(mut self, tolerance: f64) -> Self {
        self.assignment_tolerance = tolerance;
        self
    }
}
