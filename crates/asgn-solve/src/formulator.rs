//! Binary assignment model construction and solution extraction.
//!
//! One decision variable `x[resource,task]` per compatibility pair, two
//! constraint families (per-resource capacity, one resource per task), a
//! linear cost-minimization objective, and the reduction of a backend
//! solution into the filtered assignment table.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::{debug, info};

use asgn_model::frame::{column_f64_values, column_str_values};
use asgn_model::{Assignment, ModelData, SolutionData, SolveOptions, columns};

use crate::backend::{SolveStatus, SolverBackend};
use crate::error::{Result, SolveError};
use crate::lp::write_lp;
use crate::model::{ConstraintOp, Model, VarId, namer};

/// One compatibility pair with its declared decision variable.
#[derive(Debug, Clone)]
pub struct Pair {
    pub resource: String,
    pub task: String,
    pub cost: f64,
    pub var: VarId,
}

/// An assembled model plus the pair metadata needed to read a solution
/// back out of it.
#[derive(Debug, Clone)]
pub struct BuiltModel {
    pub model: Model,
    pub pairs: Vec<Pair>,
}

/// Builds the binary assignment program for one `ModelData` and reduces
/// the backend's raw solution to a `SolutionData`.
///
/// Holds no state beyond the borrowed model tables; concurrent solves use
/// independent formulator instances over independent data.
pub struct AssignmentFormulator<'a> {
    model_data: &'a ModelData,
}

impl<'a> AssignmentFormulator<'a> {
    pub fn new(model_data: &'a ModelData) -> Self {
        Self { model_data }
    }

    /// Build, export, solve, and extract in one blocking call.
    pub fn build_and_solve(
        &self,
        backend: &dyn SolverBackend,
        options: &SolveOptions,
    ) -> Result<SolutionData> {
        let build_start = Instant::now();
        let built = self.build()?;
        let build_time = build_start.elapsed().as_secs_f64();

        if let Some(path) = &options.lp_path {
            write_lp(&built.model, path)?;
            debug!(path = %path.display(), "exported lp file");
        }

        info!(backend = backend.name(), "solving model");
        let solve_start = Instant::now();
        let outcome = backend.solve(&built.model);
        let solve_time = solve_start.elapsed().as_secs_f64();
        info!(status = %outcome.status, "solved model");

        match outcome.status {
            SolveStatus::Optimal => {
                if outcome.values.len() != built.model.num_variables() {
                    return Err(SolveError::Backend(format!(
                        "backend returned {} values for {} variables",
                        outcome.values.len(),
                        built.model.num_variables()
                    )));
                }
                let objective = built.model.objective_value(&outcome.values);
                info!(objective, "objective value");
                let assignments = built
                    .pairs
                    .iter()
                    .filter_map(|pair| {
                        let value = outcome.values[pair.var.index()];
                        (value > options.assignment_tolerance).then(|| Assignment {
                            resource: pair.resource.clone(),
                            task: pair.task.clone(),
                            is_assigned: value,
                        })
                    })
                    .collect();
                Ok(SolutionData {
                    build_time,
                    solve_time,
                    objective,
                    assignments,
                })
            }
            SolveStatus::Infeasible => Err(SolveError::Infeasible),
            SolveStatus::Other(reason) => Err(SolveError::UnhandledStatus(reason)),
        }
    }

    /// Assemble variables, both constraint families, and the objective.
    pub fn build(&self) -> Result<BuiltModel> {
        let mut model = Model::new("assignment");
        let pairs = self.build_variables(&mut model)?;
        self.build_constraints(&mut model, &pairs)?;
        self.build_objective(&mut model, &pairs);
        Ok(BuiltModel { model, pairs })
    }

    /// One binary variable per compatibility row, in row order.
    fn build_variables(&self, model: &mut Model) -> Result<Vec<Pair>> {
        let frame = &self.model_data.tasks_for_resource;
        let resources = column_str_values(frame, columns::RESOURCE)?;
        let tasks = column_str_values(frame, columns::TASK)?;
        let costs = column_f64_values(frame, columns::COST)?;

        let mut pairs = Vec::with_capacity(resources.len());
        for ((resource, task), cost) in resources.into_iter().zip(tasks).zip(costs) {
            let var = model.add_binary(namer("x", &[&resource, &task]));
            pairs.push(Pair {
                resource,
                task,
                cost,
                var,
            });
        }
        debug!(count = pairs.len(), "declared assignment variables");
        Ok(pairs)
    }

    fn build_constraints(&self, model: &mut Model, pairs: &[Pair]) -> Result<()> {
        info!("building constraints for the assignment model");
        self.build_max_hours_for_resources(model, pairs)?;
        self.build_assign_each_task_to_one_resource(model, pairs);
        info!("finished building constraints for the assignment model");
        Ok(())
    }

    /// Per resource appearing in the pair table:
    /// Σ Time[t]·x[r,t] ≤ AvailableTime[r]. A resource with no compatible
    /// tasks gets no constraint.
    fn build_max_hours_for_resources(&self, model: &mut Model, pairs: &[Pair]) -> Result<()> {
        let task_times = self.task_times()?;
        let available = self.available_times()?;

        let mut terms_by_resource: BTreeMap<&str, Vec<(VarId, f64)>> = BTreeMap::new();
        for pair in pairs {
            let time = *task_times.get(pair.task.as_str()).ok_or_else(|| {
                SolveError::MissingInput(format!("no Time for task {}", pair.task))
            })?;
            terms_by_resource
                .entry(pair.resource.as_str())
                .or_default()
                .push((pair.var, time));
        }

        let count = terms_by_resource.len();
        for (resource, terms) in terms_by_resource {
            let hours_allowed = *available.get(resource).ok_or_else(|| {
                SolveError::MissingInput(format!("no AvailableTime for resource {resource}"))
            })?;
            model.add_constraint(
                namer("MaxHoursForResource", &[resource]),
                terms,
                ConstraintOp::Le,
                hours_allowed,
            );
        }
        debug!(count, "added max hours for resource constraints");
        Ok(())
    }

    /// Per task appearing in the pair table: Σ x[r,t] = 1.
    fn build_assign_each_task_to_one_resource(&self, model: &mut Model, pairs: &[Pair]) {
        let mut terms_by_task: BTreeMap<&str, Vec<(VarId, f64)>> = BTreeMap::new();
        for pair in pairs {
            terms_by_task
                .entry(pair.task.as_str())
                .or_default()
                .push((pair.var, 1.0));
        }
        let count = terms_by_task.len();
        for (task, terms) in terms_by_task {
            model.add_constraint(
                namer("AssignEachTaskToOneResource", &[task]),
                terms,
                ConstraintOp::Eq,
                1.0,
            );
        }
        debug!(count, "added single resource per task constraints");
    }

    /// Minimize Σ Cost[r,t]·x[r,t] over all compatibility pairs.
    fn build_objective(&self, model: &mut Model, pairs: &[Pair]) {
        info!("adding a minimize cost objective function to the model");
        let terms = pairs.iter().map(|pair| (pair.var, pair.cost)).collect();
        model.set_minimize_objective(terms);
    }

    fn task_times(&self) -> Result<BTreeMap<String, f64>> {
        let keys = column_str_values(&self.model_data.tasks, columns::TASK)?;
        let times = column_f64_values(&self.model_data.tasks, columns::TIME)?;
        Ok(keys.into_iter().zip(times).collect())
    }

    fn available_times(&self) -> Result<BTreeMap<String, f64>> {
        let keys = column_str_values(&self.model_data.resources, columns::RESOURCE)?;
        let hours = column_f64_values(&self.model_data.resources, columns::AVAILABLE_TIME)?;
        Ok(keys.into_iter().zip(hours).collect())
    }
}
