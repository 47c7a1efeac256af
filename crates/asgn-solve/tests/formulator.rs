use asgn_model::{ModelData, SolveOptions};
use asgn_solve::{
    AssignmentFormulator, BranchAndBound, Model, SolveError, SolveStatus, SolverBackend,
    SolverOutcome,
};
use polars::df;

/// The worked two-task example: expected optimal is T1→R2, T2→R1 at a
/// total cost of 54.
fn demo_model_data() -> ModelData {
    ModelData {
        tasks: df!(
            "Task" => ["T1", "T2"],
            "Time" => [4.0, 3.0]
        )
        .expect("tasks frame"),
        resources: df!(
            "Resource" => ["R1", "R2"],
            "AvailableTime" => [5.0, 5.0]
        )
        .expect("resources frame"),
        tasks_for_resource: df!(
            "Resource" => ["R1", "R1", "R2", "R2"],
            "Task" => ["T1", "T2", "T1", "T2"],
            "Cost" => [40.0, 30.0, 24.0, 18.0]
        )
        .expect("pairs frame"),
    }
}

/// Backend returning a fixed outcome, for driving the status paths.
struct Scripted {
    status: SolveStatus,
    values: Vec<f64>,
}

impl SolverBackend for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    fn solve(&self, _model: &Model) -> SolverOutcome {
        SolverOutcome {
            status: self.status.clone(),
            values: self.values.clone(),
        }
    }
}

#[test]
fn builds_one_variable_per_pair() {
    let model_data = demo_model_data();
    let built = AssignmentFormulator::new(&model_data)
        .build()
        .expect("build model");

    assert_eq!(built.model.num_variables(), 4);
    assert_eq!(
        built.model.variables(),
        &[
            "x[R1,T1]".to_string(),
            "x[R1,T2]".to_string(),
            "x[R2,T1]".to_string(),
            "x[R2,T2]".to_string(),
        ]
    );
}

#[test]
fn builds_both_constraint_families() {
    let model_data = demo_model_data();
    let built = AssignmentFormulator::new(&model_data)
        .build()
        .expect("build model");

    let names: Vec<&str> = built
        .model
        .constraints()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "MaxHoursForResource[R1]",
            "MaxHoursForResource[R2]",
            "AssignEachTaskToOneResource[T1]",
            "AssignEachTaskToOneResource[T2]",
        ]
    );
    // Capacity rows carry Time coefficients; exclusivity rows carry 1s.
    assert_eq!(built.model.constraints()[0].rhs, 5.0);
    let coeffs: Vec<f64> = built.model.constraints()[0]
        .terms
        .iter()
        .map(|(_, c)| *c)
        .collect();
    assert_eq!(coeffs, vec![4.0, 3.0]);
    assert_eq!(built.model.constraints()[2].rhs, 1.0);
}

#[test]
fn solves_the_demo_scenario() {
    let model_data = demo_model_data();
    let formulator = AssignmentFormulator::new(&model_data);
    let options = SolveOptions::default().without_lp_export();
    let solution = formulator
        .build_and_solve(&BranchAndBound::default(), &options)
        .expect("solve");

    assert_eq!(solution.objective, 54.0);
    assert_eq!(solution.assignments.len(), 2);
    assert_eq!(
        solution
            .assignment_for_task("T1")
            .map(|a| a.resource.as_str()),
        Some("R2")
    );
    assert_eq!(
        solution
            .assignment_for_task("T2")
            .map(|a| a.resource.as_str()),
        Some("R1")
    );
    assert!(solution.build_time >= 0.0);
    assert!(solution.solve_time >= 0.0);
}

#[test]
fn optimal_solution_respects_capacity_and_assigns_each_task_once() {
    let model_data = ModelData {
        tasks: df!(
            "Task" => ["A", "B", "C"],
            "Time" => [2.0, 2.0, 3.0]
        )
        .expect("tasks frame"),
        resources: df!(
            "Resource" => ["R1", "R2"],
            "AvailableTime" => [4.0, 5.0]
        )
        .expect("resources frame"),
        tasks_for_resource: df!(
            "Resource" => ["R1", "R1", "R1", "R2", "R2", "R2"],
            "Task" => ["A", "B", "C", "A", "B", "C"],
            "Cost" => [2.0, 2.0, 3.0, 4.0, 4.0, 6.0]
        )
        .expect("pairs frame"),
    };
    let options = SolveOptions::default().without_lp_export();
    let solution = AssignmentFormulator::new(&model_data)
        .build_and_solve(&BranchAndBound::default(), &options)
        .expect("solve");

    // A and B fill R1's four hours; C overflows to R2.
    assert_eq!(solution.objective, 10.0);

    let times = [("A", 2.0), ("B", 2.0), ("C", 3.0)];
    let caps = [("R1", 4.0), ("R2", 5.0)];
    for (task, _) in times {
        let selected: Vec<_> = solution
            .assignments
            .iter()
            .filter(|a| a.task == task)
            .collect();
        assert_eq!(selected.len(), 1, "task {task} must be assigned exactly once");
    }
    for (resource, cap) in caps {
        let used: f64 = solution
            .assignments
            .iter()
            .filter(|a| a.resource == resource)
            .map(|a| {
                times
                    .iter()
                    .find(|(t, _)| *t == a.task)
                    .map(|(_, time)| *time)
                    .unwrap_or(0.0)
            })
            .sum();
        assert!(used <= cap + 1e-9, "{resource} used {used} of {cap}");
    }
}

#[test]
fn infeasible_model_is_a_hard_failure() {
    // Aggregate capacity holds (2 of 6 hours), so static validation would
    // pass, but the only resource eligible for T1 is too small. Only the
    // solver can prove this infeasible.
    let model_data = ModelData {
        tasks: df!(
            "Task" => ["T1"],
            "Time" => [2.0]
        )
        .expect("tasks frame"),
        resources: df!(
            "Resource" => ["R1", "R2"],
            "AvailableTime" => [1.0, 5.0]
        )
        .expect("resources frame"),
        tasks_for_resource: df!(
            "Resource" => ["R1"],
            "Task" => ["T1"],
            "Cost" => [10.0]
        )
        .expect("pairs frame"),
    };
    let options = SolveOptions::default().without_lp_export();
    let error = AssignmentFormulator::new(&model_data)
        .build_and_solve(&BranchAndBound::default(), &options)
        .expect_err("must fail");
    assert!(matches!(error, SolveError::Infeasible));
}

#[test]
fn unhandled_status_is_an_explicit_error() {
    let model_data = demo_model_data();
    let backend = Scripted {
        status: SolveStatus::Other("time limit exceeded".to_string()),
        values: Vec::new(),
    };
    let options = SolveOptions::default().without_lp_export();
    let error = AssignmentFormulator::new(&model_data)
        .build_and_solve(&backend, &options)
        .expect_err("must fail");
    match error {
        SolveError::UnhandledStatus(reason) => assert!(reason.contains("time limit")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn tolerance_filters_near_zero_values() {
    let model_data = demo_model_data();
    let backend = Scripted {
        status: SolveStatus::Optimal,
        values: vec![0.04, 0.96, 0.98, 0.02],
    };
    let options = SolveOptions::default().without_lp_export();
    let solution = AssignmentFormulator::new(&model_data)
        .build_and_solve(&backend, &options)
        .expect("solve");

    let selected: Vec<String> = solution
        .assignments
        .iter()
        .map(|a| format!("{}/{}", a.resource, a.task))
        .collect();
    assert_eq!(selected, vec!["R1/T2", "R2/T1"]);
    // The raw solved value is reported, not a rounded indicator.
    assert_eq!(solution.assignments[0].is_assigned, 0.96);
}

#[test]
fn backend_value_count_mismatch_is_an_error() {
    let model_data = demo_model_data();
    let backend = Scripted {
        status: SolveStatus::Optimal,
        values: vec![1.0],
    };
    let options = SolveOptions::default().without_lp_export();
    let error = AssignmentFormulator::new(&model_data)
        .build_and_solve(&backend, &options)
        .expect_err("must fail");
    assert!(matches!(error, SolveError::Backend(_)));
}

#[test]
fn lp_export_writes_the_side_artifact() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("demo.lp");
    let model_data = demo_model_data();
    let options = SolveOptions::default().with_lp_path(path.clone());
    AssignmentFormulator::new(&model_data)
        .build_and_solve(&BranchAndBound::default(), &options)
        .expect("solve");

    let text = std::fs::read_to_string(&path).expect("read lp file");
    assert!(text.starts_with("\\ Model assignment"));
    assert!(text.contains("MaxHoursForResource[R1]"));
    assert!(text.ends_with("End\n"));
}
