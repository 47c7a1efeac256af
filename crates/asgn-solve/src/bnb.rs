//! Exact depth-first branch and bound over binary variables.
//!
//! The reference backend shipped with the crate. It enumerates variables
//! in declaration order, pruning nodes whose constraint activity bounds
//! already rule out feasibility and nodes whose objective lower bound
//! cannot beat the incumbent. Exact on any pure-binary model; intended for
//! the instance sizes this formulation produces, not as a general MIP
//! engine.

use tracing::debug;

use crate::backend::{SolveStatus, SolverBackend, SolverOutcome};
use crate::model::{Constraint, ConstraintOp, Model};

/// Numeric slack when comparing constraint activities and bounds.
const EPS: f64 = 1e-9;

/// Branch-and-bound search over an assembled binary model.
#[derive(Debug, Clone)]
pub struct BranchAndBound {
    /// Abort with an `Other` status once this many nodes were explored.
    pub node_limit: u64,
}

impl Default for BranchAndBound {
    fn default() -> Self {
        Self {
            node_limit: 1_000_000,
        }
    }
}

impl SolverBackend for BranchAndBound {
    fn name(&self) -> &str {
        "branch-and-bound"
    }

    fn solve(&self, model: &Model) -> SolverOutcome {
        let mut search = Search {
            model,
            node_limit: self.node_limit,
            nodes: 0,
            values: vec![0u8; model.num_variables()],
            best: None,
        };
        let exhausted = search.dfs(0);
        debug!(nodes = search.nodes, "finished branch and bound search");

        if !exhausted {
            return SolverOutcome {
                status: SolveStatus::Other(format!(
                    "node limit of {} exceeded before the search completed",
                    self.node_limit
                )),
                values: Vec::new(),
            };
        }
        match search.best {
            Some((_, values)) => SolverOutcome {
                status: SolveStatus::Optimal,
                values: values.into_iter().map(f64::from).collect(),
            },
            None => SolverOutcome {
                status: SolveStatus::Infeasible,
                values: Vec::new(),
            },
        }
    }
}

struct Search<'a> {
    model: &'a Model,
    node_limit: u64,
    nodes: u64,
    values: Vec<u8>,
    best: Option<(f64, Vec<u8>)>,
}

impl Search<'_> {
    /// Explore the subtree with variables `0..depth` fixed. Returns false
    /// when the node limit was hit and the search is incomplete.
    fn dfs(&mut self, depth: usize) -> bool {
        self.nodes += 1;
        if self.nodes > self.node_limit {
            return false;
        }
        if !self.is_promising(depth) {
            return true;
        }
        if depth == self.values.len() {
            // All constraints were checked exactly by is_promising at a
            // full assignment, so this leaf is feasible.
            let objective = self.partial_objective(depth);
            if self
                .best
                .as_ref()
                .is_none_or(|(incumbent, _)| objective < incumbent - EPS)
            {
                self.best = Some((objective, self.values.clone()));
            }
            return true;
        }
        for candidate in [0u8, 1u8] {
            self.values[depth] = candidate;
            if !self.dfs(depth + 1) {
                return false;
            }
        }
        self.values[depth] = 0;
        true
    }

    /// Bound check: can any completion of the first `depth` fixed
    /// variables still satisfy every constraint and beat the incumbent?
    fn is_promising(&self, depth: usize) -> bool {
        for constraint in self.model.constraints() {
            if !self.constraint_reachable(constraint, depth) {
                return false;
            }
        }
        if let Some((incumbent, _)) = &self.best {
            let mut lower_bound = self.partial_objective(depth);
            for (id, coeff) in self.model.objective() {
                if id.index() >= depth && *coeff < 0.0 {
                    lower_bound += coeff;
                }
            }
            if lower_bound >= incumbent - EPS {
                return false;
            }
        }
        true
    }

    fn constraint_reachable(&self, constraint: &Constraint, depth: usize) -> bool {
        let mut activity = 0.0;
        let mut min_rest = 0.0;
        let mut max_rest = 0.0;
        for (id, coeff) in &constraint.terms {
            if id.index() < depth {
                activity += coeff * f64::from(self.values[id.index()]);
            } else if *coeff < 0.0 {
                min_rest += coeff;
            } else {
                max_rest += coeff;
            }
        }
        match constraint.op {
            ConstraintOp::Le => activity + min_rest <= constraint.rhs + EPS,
            ConstraintOp::Ge => activity + max_rest >= constraint.rhs - EPS,
            ConstraintOp::Eq => {
                activity + min_rest <= constraint.rhs + EPS
                    && activity + max_rest >= constraint.rhs - EPS
            }
        }
    }

    fn partial_objective(&self, depth: usize) -> f64 {
        self.model
            .objective()
            .iter()
            .filter(|(id, _)| id.index() < depth)
            .map(|(id, coeff)| coeff * f64::from(self.values[id.index()]))
            .sum()
    }
}
