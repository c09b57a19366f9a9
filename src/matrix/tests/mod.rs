//! Unit tests for the matrix context.


use crate::matrix::services::MatrixStore;
use crate::task::domain::{Task, TaskId, TaskTitle};
use mockable::DefaultClock;
use std::sync::Arc;

type TestStore = MatrixStore<DefaultClock>;

fn empty_store() -> TestStore {
    MatrixStore::new(Arc::new(DefaultClock))
}

fn task(id: i64, title: &str) -> Task {
    let validated = TaskTitle::new(title).expect("test titles are non-empty");
    Task::new(TaskId::from_raw(id), validated, &DefaultClock)
}

fn ids(tasks: &[Task]) -> Vec<i64> {
    tasks.iter().map(|task| task.id().value()).collect()
}
