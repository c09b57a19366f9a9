//! Unit tests for the task context.


use crate::task::domain::{Task, TaskId, TaskTitle};
use mockable::DefaultClock;

/// Builds a task with a fixed identifier for arrangement in tests.
pub(super) fn task(id: i64, title: &str) -> Task {
    let validated = TaskTitle::new(title).expect("test titles are non-empty");
    Task::new(TaskId::from_raw(id), validated, &DefaultClock)
}

/// Returns the identifiers of `tasks` in order.
pub(super) fn ids(tasks: &[Task]) -> Vec<i64> {
    tasks.iter().map(|task| task.id().value()).collect()
}
