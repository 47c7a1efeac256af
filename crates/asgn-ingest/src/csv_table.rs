//! CSV loading for the three assignment input tables.
//!
//! Each table lives in its own file inside a data directory. Headers and
//! cells are trimmed (including a UTF-8 BOM on the first header); key
//! columns stay strings, attribute columns must parse as numbers.

use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame};
use tracing::debug;

use asgn_model::{RawData, columns};

use crate::error::{IngestError, Result};

/// File names expected inside a data directory.
pub const TASKS_FILE: &str = "tasks.csv";
pub const RESOURCES_FILE: &str = "resources.csv";
pub const TASKS_FOR_RESOURCE_FILE: &str = "tasks_for_resource.csv";

/// Load the three raw tables from a data directory.
pub fn load_raw_data(dir: &Path) -> Result<RawData> {
    let tasks = read_table(&dir.join(TASKS_FILE), &[columns::TASK], &[columns::TIME])?;
    let resources = read_table(
        &dir.join(RESOURCES_FILE),
        &[columns::RESOURCE],
        &[columns::AVAILABLE_TIME, columns::COST_PER_HOUR],
    )?;
    let tasks_for_resource = read_table(
        &dir.join(TASKS_FOR_RESOURCE_FILE),
        &[columns::RESOURCE, columns::TASK],
        &[],
    )?;
    debug!(
        tasks = tasks.height(),
        resources = resources.height(),
        pairs = tasks_for_resource.height(),
        "loaded raw data"
    );
    Ok(RawData {
        tasks,
        resources,
        tasks_for_resource,
    })
}

/// Read one CSV file into a DataFrame with string key columns and f64
/// attribute columns. Extra columns in the file are ignored.
fn read_table(path: &Path, key_columns: &[&str], numeric_columns: &[&str]) -> Result<DataFrame> {
    let table = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| wrap_csv_error(path, source))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| wrap_csv_error(path, source))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut key_indices = Vec::with_capacity(key_columns.len());
    for column in key_columns {
        key_indices.push(column_index(&headers, column, &table)?);
    }
    let mut numeric_indices = Vec::with_capacity(numeric_columns.len());
    for column in numeric_columns {
        numeric_indices.push(column_index(&headers, column, &table)?);
    }

    let mut key_values: Vec<Vec<String>> = vec![Vec::new(); key_columns.len()];
    let mut numeric_values: Vec<Vec<f64>> = vec![Vec::new(); numeric_columns.len()];

    for record in reader.records() {
        let record = record.map_err(|source| wrap_csv_error(path, source))?;
        for (slot, &idx) in key_indices.iter().enumerate() {
            let cell = record.get(idx).unwrap_or("").trim();
            key_values[slot].push(cell.to_string());
        }
        for (slot, &idx) in numeric_indices.iter().enumerate() {
            let cell = record.get(idx).unwrap_or("").trim();
            let value = cell
                .parse::<f64>()
                .map_err(|_| IngestError::InvalidNumber {
                    table: table.clone(),
                    column: numeric_columns[slot].to_string(),
                    value: cell.to_string(),
                })?;
            numeric_values[slot].push(value);
        }
    }

    let mut frame_columns = Vec::with_capacity(key_columns.len() + numeric_columns.len());
    for (name, values) in key_columns.iter().zip(key_values) {
        frame_columns.push(Column::new((*name).into(), values));
    }
    for (name, values) in numeric_columns.iter().zip(numeric_values) {
        frame_columns.push(Column::new((*name).into(), values));
    }
    Ok(DataFrame::new(frame_columns)?)
}

fn column_index(headers: &[String], column: &str, table: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(column))
        .ok_or_else(|| IngestError::MissingColumn {
            table: table.to_string(),
            column: column.to_string(),
        })
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn wrap_csv_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
