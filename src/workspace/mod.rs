//! Application service tying the stores, the sync bridge and storage
//! together.
//!
//! A [`Workspace`] is the single entry point a UI layer drives. It owns the
//! active [`TaskStore`], the [`MatrixStore`] and a [`SnapshotStore`], and
//! runs reconciliation and persistence at fixed points:
//!
//! - after a task-store operation: push into the selected matrix, then save;
//! - after a matrix-store operation or selection change: pull into the task
//!   store, then save.

mod error;


pub use error::WorkspaceError;

use crate::drag::DropMove;
use crate::matrix::domain::{Matrix, MatrixId};
use crate::matrix::services::{MatrixDeletion, MatrixStore};
use crate::persistence::{SnapshotStore, StorageConfig, codec};
use crate::sync::{SyncOutcome, pull_into_task_store, push_into_matrix};
use crate::task::domain::{Bin, TaskId, TaskState};
use crate::task::services::TaskStore;
use mockable::Clock;
use std::sync::Arc;
use tracing::{info, warn};

/// Both stores plus their storage.
pub struct Workspace<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    tasks: TaskStore<C>,
    matrices: MatrixStore<C>,
    storage: S,
    config: StorageConfig,
}

impl<S, C> Workspace<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    /// Loads both snapshots and prepares the stores.
    ///
    /// When no matrices exist yet and the legacy task snapshot holds tasks,
    /// those tasks are migrated into a new selected matrix and the legacy
    /// snapshot is emptied so they are never migrated twice. The selected
    /// matrix is then pulled into the task store. Unreadable documents are
    /// logged and treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Storage`] when either document cannot be
    /// read from `storage`.
    pub fn open(storage: S, config: StorageConfig, clock: Arc<C>) -> Result<Self, WorkspaceError> {
        let matrix_document = storage.load(&config.matrix_key)?;
        let task_document = storage.load(&config.task_key)?;

        let matrices = codec::decode_matrices(&config.matrix_key, matrix_document.as_deref())
            .map_or_else(
                || MatrixStore::new(Arc::clone(&clock)),
                |snapshot| MatrixStore::from_snapshot(snapshot, Arc::clone(&clock)),
            );
        let mut workspace = Self {
            tasks: TaskStore::new(clock),
            matrices,
            storage,
            config,
        };

        if workspace.matrices.matrices().is_empty() {
            let legacy = codec::decode_tasks(&workspace.config.task_key, task_document.as_deref())
                .unwrap_or_default();
            if workspace.matrices.migrate_from_task_store(&legacy).is_some() {
                workspace.persist_tasks(&TaskState::new());
                workspace.persist();
            }
        }
        pull_into_task_store(&workspace.matrices, &mut workspace.tasks);
        info!(
            matrix_count = workspace.matrices.matrices().len(),
            "opened workspace"
        );
        Ok(workspace)
    }

    /// Returns the active task store.
    #[must_use]
    pub const fn tasks(&self) -> &TaskStore<C> {
        &self.tasks
    }

    /// Returns the matrix store.
    #[must_use]
    pub const fn matrices(&self) -> &MatrixStore<C> {
        &self.matrices
    }

    /// Returns the storage configuration.
    #[must_use]
    pub const fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Returns the snapshot store.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Selects a matrix and loads its tasks into the task store.
    pub fn select_matrix(&mut self, id: Option<MatrixId>) -> SyncOutcome {
        self.matrices.set_current_matrix(id);
        let outcome = pull_into_task_store(&self.matrices, &mut self.tasks);
        self.persist();
        outcome
    }

    /// Runs a task-store operation, then pushes the result into the
    /// selected matrix and saves.
    pub fn update_tasks<R>(&mut self, op: impl FnOnce(&mut TaskStore<C>) -> R) -> R {
        let result = op(&mut self.tasks);
        push_into_matrix(&self.tasks, &mut self.matrices);
        self.persist();
        result
    }

    /// Runs a matrix-store operation, then pulls the selected matrix into
    /// the task store and saves.
    ///
    /// When `op` removes the selected matrix, or the last matrix, the task
    /// store is emptied first so the removed tasks are neither shown nor
    /// saved under the legacy key.
    pub fn update_matrices<R>(&mut self, op: impl FnOnce(&mut MatrixStore<C>) -> R) -> R {
        let selected = self.matrices.current_matrix_id().cloned();
        let had_matrices = !self.matrices.matrices().is_empty();
        let result = op(&mut self.matrices);
        let selection_lost = selected.is_some_and(|id| self.matrices.matrix(&id).is_none());
        if selection_lost || (had_matrices && self.matrices.matrices().is_empty()) {
            self.tasks.clear();
        }
        pull_into_task_store(&self.matrices, &mut self.tasks);
        self.persist();
        result
    }

    /// Creates, appends and selects an empty matrix.
    pub fn create_matrix(&mut self, name: &str) -> MatrixId {
        self.update_matrices(|matrices| matrices.create_matrix(name))
    }

    /// Deletes a matrix.
    ///
    /// Deleting the selected matrix, or the last remaining one, also
    /// empties the task store so no deleted tasks stay on screen or get
    /// saved again.
    pub fn delete_matrix(&mut self, id: &MatrixId) -> MatrixDeletion {
        self.update_matrices(|matrices| matrices.delete_matrix(id))
    }

    /// Creates a matrix named `name` and moves one task of the selected
    /// matrix into the same bin there, keeping the current selection.
    ///
    /// Returns `None` and creates nothing when no matrix is selected or the
    /// task is not in `bin`.
    pub fn move_task_to_new_matrix(
        &mut self,
        task_id: TaskId,
        bin: Bin,
        name: &str,
    ) -> Option<MatrixId> {
        let current = self.matrices.current_matrix()?.id().clone();
        self.tasks.state().find(task_id, bin)?;
        push_into_matrix(&self.tasks, &mut self.matrices);
        let created = self.update_matrices(|matrices| {
            let target = matrices.create_matrix(name);
            matrices.set_current_matrix(Some(current.clone()));
            matrices.move_task_to_matrix(task_id, &current, bin, &target, None);
            target
        });
        Some(created)
    }

    /// Applies a completed drop to the task store.
    pub fn apply_drop(&mut self, dropped: &DropMove) -> bool {
        self.update_tasks(|tasks| dropped.apply(tasks))
    }

    /// Resolves a routing slug; the first matrix in list order wins.
    #[must_use]
    pub fn matrix_by_slug(&self, slug: &str) -> Option<&Matrix> {
        self.matrices.find_by_slug(slug)
    }

    /// Saves the matrix snapshot and, while no matrices exist, the task
    /// snapshot. Failures are logged and never undo the mutation.
    fn persist(&self) {
        codec::encode_matrices(&self.matrices.snapshot()).map_or_else(
            |error| warn!(%error, "could not encode matrix snapshot"),
            |document| self.save(&self.config.matrix_key, &document),
        );
        if self.matrices.matrices().is_empty() {
            self.persist_tasks(self.tasks.state());
        }
    }

    fn persist_tasks(&self, state: &TaskState) {
        codec::encode_tasks(state).map_or_else(
            |error| warn!(%error, "could not encode task snapshot"),
            |document| self.save(&self.config.task_key, &document),
        );
    }

    fn save(&self, key: &str, document: &str) {
        if let Err(error) = self.storage.save(key, document) {
            warn!(key, %error, "snapshot save failed");
        }
    }
}
