//! Shared test helpers for in-memory workspace integration tests.

use dcyde::matrix::domain::MatrixSnapshot;
use dcyde::persistence::{
    SnapshotStore, StorageConfig, adapters::InMemorySnapshotStore, codec,
};
use dcyde::task::domain::{Bin, Task, TaskId, TaskState, TaskTitle};
use dcyde::workspace::{Workspace, WorkspaceError};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// Workspace type used across the integration tests.
pub type TestWorkspace = Workspace<InMemorySnapshotStore, DefaultClock>;

/// Provides a fresh, empty snapshot store for each test.
#[fixture]
pub fn storage() -> InMemorySnapshotStore {
    InMemorySnapshotStore::new()
}

/// Opens a workspace over `storage` with the default keys.
///
/// # Errors
///
/// Returns an error if the snapshots cannot be read.
pub fn open(storage: &InMemorySnapshotStore) -> Result<TestWorkspace, WorkspaceError> {
    Workspace::open(
        storage.clone(),
        StorageConfig::default(),
        Arc::new(DefaultClock),
    )
}

/// Builds a task with a fixed identifier.
///
/// # Errors
///
/// Returns an error if `title` is blank.
pub fn task(id: i64, title: &str) -> eyre::Result<Task> {
    Ok(Task::new(TaskId::from_raw(id), TaskTitle::new(title)?, &DefaultClock))
}

/// Returns the titles of the tasks in `bin` of the active task store.
#[must_use]
pub fn titles(workspace: &TestWorkspace, bin: Bin) -> Vec<String> {
    workspace
        .tasks()
        .state()
        .bin(bin)
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect()
}

/// Reads the persisted matrix snapshot.
///
/// # Errors
///
/// Returns an error if the store fails or the document is missing.
pub fn saved_matrices(storage: &InMemorySnapshotStore) -> eyre::Result<MatrixSnapshot> {
    let key = StorageConfig::default().matrix_key;
    let document = storage.load(&key)?;
    codec::decode_matrices(&key, document.as_deref())
        .ok_or_else(|| eyre::eyre!("no readable matrix snapshot saved"))
}

/// Reads the persisted legacy task snapshot.
///
/// # Errors
///
/// Returns an error if the store fails or the document is missing.
pub fn saved_tasks(storage: &InMemorySnapshotStore) -> eyre::Result<TaskState> {
    let key = StorageConfig::default().task_key;
    let document = storage.load(&key)?;
    codec::decode_tasks(&key, document.as_deref())
        .ok_or_else(|| eyre::eyre!("no readable task snapshot saved"))
}
