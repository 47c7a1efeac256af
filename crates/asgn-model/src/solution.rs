//! Solve result structures.

use serde::{Deserialize, Serialize};

/// Threshold above which a solved variable value counts as "selected".
///
/// A correctly solved binary model returns values at (or numerically near)
/// 0 and 1; this band treats near-1 as selected and filters noise near 0.
/// It is reporting policy, not a correctness check, and can be overridden
/// through `SolveOptions::assignment_tolerance`.
pub const ASSIGNMENT_TOLERANCE: f64 = 0.1;

/// One selected (Resource, Task) pair in an optimal solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub resource: String,
    pub task: String,
    /// Raw solved value of the decision variable (near 1 for a selected
    /// pair).
    pub is_assigned: f64,
}

/// Result of one solve: timings plus the filtered assignment table.
///
/// Produced once per solve and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionData {
    /// Seconds spent building variables, constraints, and the objective.
    pub build_time: f64,
    /// Seconds spent inside the solver backend.
    pub solve_time: f64,
    /// Objective value of the optimal solution (total assignment cost).
    pub objective: f64,
    /// Every pair whose solved value exceeded the assignment tolerance.
    pub assignments: Vec<Assignment>,
}

impl SolutionData {
    /// Look up the assignment selected for a task, if any.
    pub fn assignment_for_task(&self, task: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.task == task)
    }
}
