//! Raw-to-model transformation.
//!
//! A pure function from validated `RawData` to the `ModelData` the
//! formulator consumes. No re-validation happens here; referential
//! integrity is guaranteed by the validator, so the left joins cannot
//! produce missing values.

use polars::prelude::{IntoLazy, JoinArgs, JoinType, MaintainOrderJoin, col};
use tracing::debug;

use asgn_model::{ModelData, RawData, Result, columns};

/// Convert validated raw tables into the normalized model tables.
///
/// Joins the compatibility table with Tasks (pulling `Time`) and Resources
/// (pulling `CostPerHour`), computes `Cost = CostPerHour × Time` per pair,
/// and projects each table down to the columns the model needs. No
/// aggregation: the compatibility row count and order are preserved
/// exactly, and identical input yields identical output.
pub fn to_model_data(raw: &RawData) -> Result<ModelData> {
    let mut join_args = JoinArgs::new(JoinType::Left);
    join_args.maintain_order = MaintainOrderJoin::Left;

    let tasks_for_resource = raw
        .tasks_for_resource
        .clone()
        .lazy()
        .join(
            raw.tasks.clone().lazy(),
            [col(columns::TASK)],
            [col(columns::TASK)],
            join_args.clone(),
        )
        .join(
            raw.resources
                .clone()
                .lazy()
                .select([col(columns::RESOURCE), col(columns::COST_PER_HOUR)]),
            [col(columns::RESOURCE)],
            [col(columns::RESOURCE)],
            join_args,
        )
        .with_column((col(columns::COST_PER_HOUR) * col(columns::TIME)).alias(columns::COST))
        .select([
            col(columns::RESOURCE),
            col(columns::TASK),
            col(columns::COST),
        ])
        .collect()?;

    debug!(pairs = tasks_for_resource.height(), "transformed raw data");

    Ok(ModelData {
        tasks: raw.tasks.select([columns::TASK, columns::TIME])?,
        resources: raw
            .resources
            .select([columns::RESOURCE, columns::AVAILABLE_TIME])?,
        tasks_for_resource,
    })
}
