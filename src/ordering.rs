//! The order in which tasks are displayed

use crate::task::Task;

/// Returns the tasks in display order: incomplete tasks first, then by ascending due date.
///
/// The sort is stable: tasks with the same completion status and the same due date keep their
/// relative order from the collection (i.e. their creation order). IDs are never compared.
pub fn display_order(tasks: &[Task]) -> Vec<&Task> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by_key(|task| (task.done(), task.due_date()));
    ordered
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::task::TaskId;

    fn task(id: &str, done: bool, due: (i32, u32, u32)) -> Task {
        Task::new_with_parameters(
            TaskId::from(id),
            format!("Task {}", id),
            NaiveDate::from_ymd_opt(due.0, due.1, due.2).unwrap(),
            done,
        )
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id().to_string()).collect()
    }

    #[test]
    fn incomplete_first_then_by_due_date() {
        let tasks = vec![
            task("A", false, (2024, 1, 5)),
            task("B", true,  (2024, 1, 1)),
            task("C", false, (2024, 1, 3)),
        ];
        assert_eq!(ids(&display_order(&tasks)), vec!["C", "A", "B"]);
    }

    #[test]
    fn completed_tasks_are_sorted_too() {
        let tasks = vec![
            task("late", true, (2025, 3, 1)),
            task("open", false, (2030, 1, 1)),
            task("early", true, (2023, 3, 1)),
        ];
        assert_eq!(ids(&display_order(&tasks)), vec!["open", "early", "late"]);
    }

    #[test]
    fn ties_keep_collection_order() {
        let tasks = vec![
            task("z", false, (2024, 1, 1)),
            task("a", false, (2024, 1, 1)),
            task("m", false, (2024, 1, 1)),
        ];
        assert_eq!(ids(&display_order(&tasks)), vec!["z", "a", "m"]);
    }

    #[test]
    fn input_is_untouched() {
        let tasks = vec![
            task("2", false, (2024, 2, 1)),
            task("1", false, (2024, 1, 1)),
        ];
        let before = tasks.clone();
        let _ = display_order(&tasks);
        assert_eq!(tasks, before);
        assert!(display_order(&[]).is_empty());
    }
}
