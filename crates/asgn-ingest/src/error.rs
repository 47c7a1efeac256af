use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("csv error in {path:?}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
    #[error("table {table} is missing required column {column}")]
    MissingColumn { table: String, column: String },
    #[error("table {table}, column {column}: cannot parse {value:?} as a number")]
    InvalidNumber {
        table: String,
        column: String,
        value: String,
    },
    #[error("there is no {section} section included in the json data")]
    MissingSection { section: String },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, IngestError>;
