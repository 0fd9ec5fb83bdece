//! What the task list screen displays

use chrono::NaiveDate;

use crate::due_date::{label, UrgencyBand};
use crate::ordering::display_order;
use crate::task::Task;

/// A task, ready to be displayed
#[derive(Clone, Debug, PartialEq)]
pub struct TaskRow<'a> {
    pub task: &'a Task,
    /// See [`label`]
    pub label: String,
    pub band: UrgencyBand,
}

/// Returns the rows of the task list, in display order.
///
/// Every row is classified against the same `today`.
pub fn present(tasks: &[Task], today: NaiveDate) -> Vec<TaskRow<'_>> {
    display_order(tasks)
        .into_iter()
        .map(|task| TaskRow {
            task,
            label: label(task.due_date(), today),
            band: UrgencyBand::classify(task.due_date(), today),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;

    #[test]
    fn rows() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let tasks = vec![
            Task::new_with_parameters(TaskId::from("a"), "Later".to_string(), NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(), false),
            Task::new_with_parameters(TaskId::from("b"), "Done".to_string(), NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(), true),
            Task::new_with_parameters(TaskId::from("c"), "Now".to_string(), today, false),
        ];

        let rows = present(&tasks, today);
        let summary: Vec<(&str, &str, UrgencyBand)> = rows.iter()
            .map(|row| (row.task.name(), row.label.as_str(), row.band))
            .collect();
        assert_eq!(summary, vec![
            ("Now", "Today", UrgencyBand::DueToday),
            ("Later", "Jun 20", UrgencyBand::Normal),
            ("Done", "Jun 9", UrgencyBand::Overdue),
        ]);
    }
}
