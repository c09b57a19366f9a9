//! Reconciliation between the active task store and the selected matrix.
//!
//! The task store is the working copy every gesture mutates; the matrix
//! store is the durable owner. Two explicit functions copy task layouts
//! across, each gated by deep equality so that a copy in one direction can
//! never trigger a redundant copy back:
//!
//! - [`pull_into_task_store`] runs after the selection changes and after
//!   any matrix-store mutation.
//! - [`push_into_matrix`] runs after every task-store commit.

use crate::matrix::services::MatrixStore;
use crate::task::services::TaskStore;
use mockable::Clock;
use tracing::debug;


/// What a reconciliation call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The task layout was copied.
    Copied,
    /// Both sides already held equal layouts; nothing was written.
    AlreadyInSync,
    /// No matrix is selected.
    NoSelection,
    /// The selected identifier does not resolve to a matrix.
    MissingMatrix,
}

impl SyncOutcome {
    /// Returns `true` when data was copied.
    #[must_use]
    pub const fn copied(self) -> bool {
        matches!(self, Self::Copied)
    }
}

/// Loads the selected matrix's tasks into the task store.
pub fn pull_into_task_store<C>(matrices: &MatrixStore<C>, tasks: &mut TaskStore<C>) -> SyncOutcome
where
    C: Clock + Send + Sync,
{
    let Some(id) = matrices.current_matrix_id() else {
        return SyncOutcome::NoSelection;
    };
    let Some(matrix) = matrices.matrix(id) else {
        return SyncOutcome::MissingMatrix;
    };
    if tasks.state() == matrix.tasks() {
        return SyncOutcome::AlreadyInSync;
    }
    tasks.replace_state(matrix.tasks().clone());
    debug!(matrix_id = %id, "pulled matrix tasks into task store");
    SyncOutcome::Copied
}

/// Writes the task store's layout back into the selected matrix.
pub fn push_into_matrix<C>(tasks: &TaskStore<C>, matrices: &mut MatrixStore<C>) -> SyncOutcome
where
    C: Clock + Send + Sync,
{
    let Some(id) = matrices.current_matrix_id().cloned() else {
        return SyncOutcome::NoSelection;
    };
    let Some(matrix) = matrices.matrix(&id) else {
        return SyncOutcome::MissingMatrix;
    };
    if matrix.tasks() == tasks.state() {
        return SyncOutcome::AlreadyInSync;
    }
    matrices.update_matrix_tasks(&id, tasks.state().clone());
    debug!(matrix_id = %id, "pushed task store into matrix");
    SyncOutcome::Copied
}
