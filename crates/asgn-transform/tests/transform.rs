use asgn_model::frame::{column_f64_values, column_str_values};
use asgn_model::{RawData, columns};
use asgn_transform::to_model_data;
use polars::df;

fn demo_raw_data() -> RawData {
    RawData {
        tasks: df!(
            "Task" => ["T1", "T2"],
            "Time" => [4.0, 3.0]
        )
        .expect("tasks frame"),
        resources: df!(
            "Resource" => ["R1", "R2"],
            "AvailableTime" => [5.0, 5.0],
            "CostPerHour" => [10.0, 6.0]
        )
        .expect("resources frame"),
        tasks_for_resource: df!(
            "Resource" => ["R1", "R1", "R2", "R2"],
            "Task" => ["T1", "T2", "T1", "T2"]
        )
        .expect("pairs frame"),
    }
}

#[test]
fn computes_pair_costs() {
    let model = to_model_data(&demo_raw_data()).expect("transform");

    assert_eq!(model.tasks_for_resource.height(), 4);
    let resources =
        column_str_values(&model.tasks_for_resource, columns::RESOURCE).expect("resources");
    let tasks = column_str_values(&model.tasks_for_resource, columns::TASK).expect("tasks");
    let costs = column_f64_values(&model.tasks_for_resource, columns::COST).expect("costs");

    assert_eq!(resources, vec!["R1", "R1", "R2", "R2"]);
    assert_eq!(tasks, vec!["T1", "T2", "T1", "T2"]);
    // Cost = CostPerHour x Time per pair.
    assert_eq!(costs, vec![40.0, 30.0, 24.0, 18.0]);
}

#[test]
fn projects_model_columns() {
    let model = to_model_data(&demo_raw_data()).expect("transform");

    let task_cols: Vec<String> = model
        .tasks
        .get_column_names_owned()
        .into_iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(task_cols, vec!["Task", "Time"]);

    let resource_cols: Vec<String> = model
        .resources
        .get_column_names_owned()
        .into_iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(resource_cols, vec!["Resource", "AvailableTime"]);

    let pair_cols: Vec<String> = model
        .tasks_for_resource
        .get_column_names_owned()
        .into_iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(pair_cols, vec!["Resource", "Task", "Cost"]);
}

#[test]
fn transform_is_deterministic() {
    let raw = demo_raw_data();
    let first = to_model_data(&raw).expect("first transform");
    let second = to_model_data(&raw).expect("second transform");

    assert!(first.tasks.equals(&second.tasks));
    assert!(first.resources.equals(&second.resources));
    assert!(
        first
            .tasks_for_resource
            .equals(&second.tasks_for_resource)
    );
}

#[test]
fn preserves_duplicate_pair_rows() {
    // The transform does no aggregation: even a duplicated compatibility
    // row survives with its own cost.
    let mut raw = demo_raw_data();
    raw.tasks_for_resource = df!(
        "Resource" => ["R1", "R1"],
        "Task" => ["T1", "T1"]
    )
    .expect("pairs frame");

    let model = to_model_data(&raw).expect("transform");
    assert_eq!(model.tasks_for_resource.height(), 2);
    let costs = column_f64_values(&model.tasks_for_resource, columns::COST).expect("costs");
    assert_eq!(costs, vec![40.0, 40.0]);
}
