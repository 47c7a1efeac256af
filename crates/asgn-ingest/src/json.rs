//! JSON loading for the three assignment input tables.
//!
//! Accepts a single document with `tasks`, `resources`, and
//! `tasks_for_resource` sections, each a list of records. Every section is
//! required; a missing one is an explicit error rather than an empty table.

use polars::prelude::{Column, DataFrame};
use serde::Deserialize;

use asgn_model::{RawData, columns};

use crate::error::{IngestError, Result};

#[derive(Debug, Deserialize)]
struct TaskRecord {
    #[serde(rename = "Task")]
    task: String,
    #[serde(rename = "Time")]
    time: f64,
}

#[derive(Debug, Deserialize)]
struct ResourceRecord {
    #[serde(rename = "Resource")]
    resource: String,
    #[serde(rename = "AvailableTime")]
    available_time: f64,
    #[serde(rename = "CostPerHour")]
    cost_per_hour: f64,
}

#[derive(Debug, Deserialize)]
struct PairRecord {
    #[serde(rename = "Resource")]
    resource: String,
    #[serde(rename = "Task")]
    task: String,
}

#[derive(Debug, Deserialize)]
struct DataSet {
    tasks: Option<Vec<TaskRecord>>,
    resources: Option<Vec<ResourceRecord>>,
    tasks_for_resource: Option<Vec<PairRecord>>,
}

/// Parse a JSON document into raw tables.
pub fn from_json_str(data: &str) -> Result<RawData> {
    let set: DataSet = serde_json::from_str(data)?;
    build_raw_data(set)
}

/// Convert an already-parsed JSON value into raw tables.
pub fn from_json_value(value: serde_json::Value) -> Result<RawData> {
    let set: DataSet = serde_json::from_value(value)?;
    build_raw_data(set)
}

fn build_raw_data(set: DataSet) -> Result<RawData> {
    let tasks = set.tasks.ok_or_else(|| missing("tasks"))?;
    let resources = set.resources.ok_or_else(|| missing("resources"))?;
    let pairs = set
        .tasks_for_resource
        .ok_or_else(|| missing("tasks_for_resource"))?;

    let tasks = DataFrame::new(vec![
        Column::new(
            columns::TASK.into(),
            tasks.iter().map(|t| t.task.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            columns::TIME.into(),
            tasks.iter().map(|t| t.time).collect::<Vec<_>>(),
        ),
    ])?;
    let resources = DataFrame::new(vec![
        Column::new(
            columns::RESOURCE.into(),
            resources
                .iter()
                .map(|r| r.resource.clone())
                .collect::<Vec<_>>(),
        ),
        Column::new(
            columns::AVAILABLE_TIME.into(),
            resources
                .iter()
                .map(|r| r.available_time)
                .collect::<Vec<_>>(),
        ),
        Column::new(
            columns::COST_PER_HOUR.into(),
            resources
                .iter()
                .map(|r| r.cost_per_hour)
                .collect::<Vec<_>>(),
        ),
    ])?;
    let tasks_for_resource = DataFrame::new(vec![
        Column::new(
            columns::RESOURCE.into(),
            pairs.iter().map(|p| p.resource.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            columns::TASK.into(),
            pairs.iter().map(|p| p.task.clone()).collect::<Vec<_>>(),
        ),
    ])?;

    Ok(RawData {
        tasks,
        resources,
        tasks_for_resource,
    })
}

fn missing(section: &str) -> IngestError {
    IngestError::MissingSection {
        section: section.to_string(),
    }
}
