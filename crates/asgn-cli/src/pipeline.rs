//! End-to-end solve pipeline: load, validate, transform, formulate, solve.
//!
//! The stages run strictly left to right within one call; a validation
//! failure stops the pipeline before any model work.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{error, info};

use asgn_model::{RawData, SolutionData, SolveOptions};
use asgn_solve::{AssignmentFormulator, BranchAndBound};
use asgn_transform::to_model_data;
use asgn_validate::validate;

/// Where the raw tables come from.
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Directory holding `tasks.csv`, `resources.csv`, and
    /// `tasks_for_resource.csv`.
    CsvDir(PathBuf),
    /// Single JSON document with the three sections.
    JsonFile(PathBuf),
}

/// Load the raw tables from the given source.
pub fn load_input(source: &InputSource) -> Result<RawData> {
    match source {
        InputSource::CsvDir(dir) => asgn_ingest::load_raw_data(dir)
            .with_context(|| format!("loading csv tables from {}", dir.display())),
        InputSource::JsonFile(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            asgn_ingest::from_json_str(&text)
                .with_context(|| format!("parsing {}", path.display()))
        }
    }
}

/// Validate, transform, and solve one raw data set.
pub fn run_solve(
    raw: &RawData,
    options: &SolveOptions,
    node_limit: Option<u64>,
) -> Result<SolutionData> {
    let report = validate(raw);
    if !report.is_valid() {
        for message in &report.errors {
            error!("{message}");
        }
        bail!(
            "input data failed validation with {} error(s)",
            report.errors.len()
        );
    }
    info!("input data is valid");

    let model_data = to_model_data(raw).context("transforming raw data")?;

    let mut backend = BranchAndBound::default();
    if let Some(limit) = node_limit {
        backend.node_limit = limit;
    }
    let formulator = AssignmentFormulator::new(&model_data);
    formulator
        .build_and_solve(&backend, options)
        .context("solving assignment model")
}
