//! Feasibility validation for raw assignment data.
//!
//! Checks run before any model is built, in fixed order:
//!
//! 1. **Capacity**: total task time must not exceed total resource time.
//!    Necessary but not sufficient; it cannot catch per-resource
//!    incompatibility.
//! 2. **Coverage**: every task must have at least one compatible resource,
//!    otherwise the exclusive-assignment constraint is unsatisfiable before
//!    solving.
//! 3. **Referential integrity**: every key the compatibility table names
//!    must exist in its table, in both directions. Without this check a
//!    dangling reference would flow into the model as a missing `Time` or
//!    `CostPerHour`.
//!
//! Validation never fails and never halts: every check runs, every check
//! may contribute messages, and the caller decides policy on an invalid
//! report. Downstream components must not be invoked when the report is
//! invalid.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use asgn_model::frame::{column_str_values, column_sum};
use asgn_model::{RawData, columns};

/// Outcome of validating one raw data set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Human-readable error messages, in check order. Empty means valid.
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate raw data before any model work.
pub fn validate(raw: &RawData) -> ValidationReport {
    let mut report = ValidationReport::default();
    check_capacity(raw, &mut report);
    check_coverage(raw, &mut report);
    check_referential_integrity(raw, &mut report);
    debug!(errors = report.errors.len(), "validated raw data");
    report
}

/// Aggregate capacity: Σ Time must not exceed Σ AvailableTime.
fn check_capacity(raw: &RawData, report: &mut ValidationReport) {
    let total_task_time = match column_sum(&raw.tasks, columns::TIME) {
        Ok(total) => total,
        Err(error) => {
            report.errors.push(format!("tasks table is unreadable: {error}"));
            return;
        }
    };
    let total_available = match column_sum(&raw.resources, columns::AVAILABLE_TIME) {
        Ok(total) => total,
        Err(error) => {
            report
                .errors
                .push(format!("resources table is unreadable: {error}"));
            return;
        }
    };
    if total_task_time > total_available {
        report.errors.push(format!(
            "The total time for the tasks, {total_task_time}, exceeds the available \
             time for the resources, {total_available}, therefore the problem is \
             not feasible."
        ));
    }
}

/// Coverage: every task must appear in the compatibility table.
fn check_coverage(raw: &RawData, report: &mut ValidationReport) {
    let Some(task_keys) = key_set(&raw.tasks, columns::TASK, "tasks", report) else {
        return;
    };
    let Some(covered) = key_set(
        &raw.tasks_for_resource,
        columns::TASK,
        "tasks_for_resource",
        report,
    ) else {
        return;
    };
    let missing: Vec<&String> = task_keys.difference(&covered).collect();
    if !missing.is_empty() {
        let listed = missing
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        report.errors.push(format!(
            "The following tasks do not have any resources that can perform them \
             and thus the model is infeasible: {listed}"
        ));
    }
}

/// Referential integrity: compatibility rows must reference existing keys.
fn check_referential_integrity(raw: &RawData, report: &mut ValidationReport) {
    let Some(task_keys) = key_set(&raw.tasks, columns::TASK, "tasks", report) else {
        return;
    };
    let Some(resource_keys) = key_set(&raw.resources, columns::RESOURCE, "resources", report)
    else {
        return;
    };
    let Some(pair_tasks) = key_set(
        &raw.tasks_for_resource,
        columns::TASK,
        "tasks_for_resource",
        report,
    ) else {
        return;
    };
    let Some(pair_resources) = key_set(
        &raw.tasks_for_resource,
        columns::RESOURCE,
        "tasks_for_resource",
        report,
    ) else {
        return;
    };

    let dangling_tasks: Vec<&String> = pair_tasks.difference(&task_keys).collect();
    if !dangling_tasks.is_empty() {
        let listed = dangling_tasks
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        report.errors.push(format!(
            "The compatibility table references tasks that do not exist: {listed}"
        ));
    }

    let dangling_resources: Vec<&String> = pair_resources.difference(&resource_keys).collect();
    if !dangling_resources.is_empty() {
        let listed = dangling_resources
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        report.errors.push(format!(
            "The compatibility table references resources that do not exist: {listed}"
        ));
    }
}

/// Distinct keys of a column as a sorted set; a malformed frame becomes a
/// report message instead of a panic or an error path.
fn key_set(
    df: &polars::prelude::DataFrame,
    column: &str,
    table: &str,
    report: &mut ValidationReport,
) -> Option<BTreeSet<String>> {
    match column_str_values(df, column) {
        Ok(values) => Some(values.into_iter().collect()),
        Err(error) => {
            report
                .errors
                .push(format!("{table} table is unreadable: {error}"));
            None
        }
    }
}
