use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use asgn_model::SolutionData;
use asgn_model::frame::format_numeric;

/// Print the solved assignment table and timings to stdout.
pub fn print_summary(solution: &SolutionData) {
    println!("Build time: {:.3}s", solution.build_time);
    println!("Solve time: {:.3}s", solution.solve_time);
    println!("Objective:  {}", format_numeric(solution.objective));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Resource"),
        header_cell("Task"),
        header_cell("IsAssigned"),
    ]);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    let mut rows: Vec<_> = solution.assignments.iter().collect();
    rows.sort_by(|a, b| (&a.resource, &a.task).cmp(&(&b.resource, &b.task)));
    for assignment in rows {
        table.add_row(vec![
            Cell::new(&assignment.resource),
            Cell::new(&assignment.task),
            Cell::new(format_numeric(assignment.is_assigned)),
        ]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
