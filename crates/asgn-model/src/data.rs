//! Raw and normalized table structures for one assignment solve.
//!
//! Tables are polars `DataFrame`s with keys held as regular columns. Each
//! solve owns its own `RawData` → `ModelData` chain; nothing is mutated
//! after construction and nothing is shared across solves.

use polars::prelude::DataFrame;

/// Column names shared across the input, model, and solution tables.
pub mod columns {
    /// Task key column.
    pub const TASK: &str = "Task";
    /// Resource key column.
    pub const RESOURCE: &str = "Resource";
    /// Duration required to complete a task, in hours.
    pub const TIME: &str = "Time";
    /// Maximum total time a resource may be occupied, in hours.
    pub const AVAILABLE_TIME: &str = "AvailableTime";
    /// Cost rate of a resource, per hour.
    pub const COST_PER_HOUR: &str = "CostPerHour";
    /// Cost of selecting a compatibility pair: `CostPerHour` × `Time`.
    pub const COST: &str = "Cost";
    /// Solved selection indicator in the output table.
    pub const IS_ASSIGNED: &str = "IsAssigned";
}

/// The three tables as loaded from an external source, prior to validation.
#[derive(Debug, Clone)]
pub struct RawData {
    /// Columns `Task`, `Time`.
    pub tasks: DataFrame,
    /// Columns `Resource`, `AvailableTime`, `CostPerHour`.
    pub resources: DataFrame,
    /// Columns `Resource`, `Task`; one row per compatibility pair.
    pub tasks_for_resource: DataFrame,
}

/// The normalized tables the formulator consumes.
///
/// Produced exactly once per solve by `asgn-transform` from validated
/// `RawData`; immutable afterwards.
#[derive(Debug, Clone)]
pub struct ModelData {
    /// Columns `Task`, `Time`.
    pub tasks: DataFrame,
    /// Columns `Resource`, `AvailableTime`.
    pub resources: DataFrame,
    /// Columns `Resource`, `Task`, `Cost`; row order and count identical to
    /// the raw compatibility table.
    pub tasks_for_resource: DataFrame,
}
