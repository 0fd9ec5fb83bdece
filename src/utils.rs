//! Some utility functions

use crate::view::TaskRow;

/// A debug utility that pretty-prints task rows
pub fn print_task_list(rows: &[TaskRow]) {
    if rows.is_empty() {
        println!("    (no tasks)");
    }
    for row in rows {
        println!("{}", format_row(row));
    }
}

pub fn format_row(row: &TaskRow) -> String {
    let completion = if row.task.done() { "✓" } else { " " };
    format!("    [{}] {}\t{} ({:?})\t{}", completion, row.task.name(), row.label, row.band, row.task.id())
}
