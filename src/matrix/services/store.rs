//! Collection store for matrices and the current selection.

use crate::matrix::domain::{
    MIGRATED_MATRIX_NAME, Matrix, MatrixId, MatrixName, MatrixPatch, MatrixSnapshot,
    MatrixSummary, generate_slug,
};
use crate::task::domain::TaskState;
use mockable::Clock;
use std::sync::Arc;
use tracing::info;

/// Result of [`MatrixStore::delete_matrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixDeletion {
    /// No matrix had the requested identifier.
    NotFound,
    /// The matrix was removed.
    Deleted {
        /// Whether the removed matrix was the current selection, in which
        /// case the selection is now empty and the active task store must be
        /// cleared by the caller.
        was_current: bool,
    },
}

/// Owns every matrix and the current selection.
///
/// Matrices keep list order: created matrices are appended, the migrated
/// matrix is placed first.
#[derive(Debug, Clone)]
pub struct MatrixStore<C>
where
    C: Clock + Send + Sync,
{
    pub(super) matrices: Vec<Matrix>,
    current: Option<MatrixId>,
    pub(super) clock: Arc<C>,
}

impl<C> MatrixStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty collection with no selection.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self::with_matrices(Vec::new(), None, clock)
    }

    /// Creates a collection from previously persisted matrices.
    #[must_use]
    pub const fn with_matrices(
        matrices: Vec<Matrix>,
        current: Option<MatrixId>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            matrices,
            current,
            clock,
        }
    }

    /// Restores a collection from its persisted snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: MatrixSnapshot, clock: Arc<C>) -> Self {
        Self::with_matrices(snapshot.matrices, snapshot.current_matrix_id, clock)
    }

    /// Captures the matrices and selection for persistence.
    #[must_use]
    pub fn snapshot(&self) -> MatrixSnapshot {
        MatrixSnapshot {
            matrices: self.matrices.clone(),
            current_matrix_id: self.current.clone(),
        }
    }

    /// Returns every matrix in list order.
    #[must_use]
    pub fn matrices(&self) -> &[Matrix] {
        &self.matrices
    }

    /// Returns the matrix with `id`.
    #[must_use]
    pub fn matrix(&self, id: &MatrixId) -> Option<&Matrix> {
        self.matrices.iter().find(|matrix| matrix.id() == id)
    }

    /// Returns the selected identifier, even if it no longer resolves.
    #[must_use]
    pub const fn current_matrix_id(&self) -> Option<&MatrixId> {
        self.current.as_ref()
    }

    /// Returns the selected matrix, or `None` when nothing is selected or
    /// the selection no longer exists.
    #[must_use]
    pub fn current_matrix(&self) -> Option<&Matrix> {
        self.current.as_ref().and_then(|id| self.matrix(id))
    }

    /// Changes the selection without copying any task data.
    pub fn set_current_matrix(&mut self, id: Option<MatrixId>) {
        self.current = id;
    }

    /// Wraps a legacy task dataset in a new matrix named
    /// [`MIGRATED_MATRIX_NAME`], placed first and selected.
    ///
    /// Returns `None` and creates nothing when the dataset holds no tasks,
    /// so an emptied legacy store can never produce empty matrices.
    pub fn migrate_from_task_store(&mut self, legacy: &TaskState) -> Option<MatrixId> {
        if legacy.is_empty() {
            return None;
        }
        let matrix = Matrix::with_tasks(
            MatrixName::new(MIGRATED_MATRIX_NAME),
            legacy.clone(),
            &*self.clock,
        );
        let id = matrix.id().clone();
        self.matrices.insert(0, matrix);
        self.current = Some(id.clone());
        info!(matrix_id = %id, task_count = legacy.total_tasks(), "migrated legacy tasks");
        Some(id)
    }

    /// Creates an empty matrix, appends it, and selects it.
    pub fn create_matrix(&mut self, name: &str) -> MatrixId {
        let matrix = Matrix::new(MatrixName::new(name), &*self.clock);
        let id = matrix.id().clone();
        info!(matrix_id = %id, name = %matrix.name(), "created matrix");
        self.matrices.push(matrix);
        self.current = Some(id.clone());
        id
    }

    /// Removes the matrix with `id`, clearing the selection if it pointed
    /// there.
    pub fn delete_matrix(&mut self, id: &MatrixId) -> MatrixDeletion {
        let Some(position) = self.position(id) else {
            return MatrixDeletion::NotFound;
        };
        self.matrices.remove(position);
        let was_current = self.current.as_ref() == Some(id);
        if was_current {
            self.current = None;
        }
        info!(matrix_id = %id, was_current, "deleted matrix");
        MatrixDeletion::Deleted { was_current }
    }

    /// Applies `patch` to the matrix with `id` and refreshes its
    /// modification time.
    pub fn update_matrix(&mut self, id: &MatrixId, patch: &MatrixPatch) -> bool {
        let clock = Arc::clone(&self.clock);
        let Some(matrix) = self.matrix_mut(id) else {
            return false;
        };
        matrix.apply(patch, &*clock);
        true
    }

    /// Replaces the task layout of the matrix with `id` wholesale.
    pub fn update_matrix_tasks(&mut self, id: &MatrixId, tasks: TaskState) -> bool {
        let clock = Arc::clone(&self.clock);
        let Some(matrix) = self.matrix_mut(id) else {
            return false;
        };
        matrix.replace_tasks(tasks, &*clock);
        true
    }

    /// Returns summaries of every matrix in list order.
    #[must_use]
    pub fn matrix_summaries(&self) -> Vec<MatrixSummary> {
        self.matrices.iter().map(Matrix::summary).collect()
    }

    /// Resolves a routing slug to a matrix.
    ///
    /// When several names share a slug the first matrix in list order wins.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&Matrix> {
        self.matrices
            .iter()
            .find(|matrix| generate_slug(matrix.name().as_str()) == slug)
    }

    pub(super) fn position(&self, id: &MatrixId) -> Option<usize> {
        self.matrices.iter().position(|matrix| matrix.id() == id)
    }

    fn matrix_mut(&mut self, id: &MatrixId) -> Option<&mut Matrix> {
        self.matrices.iter_mut().find(|matrix| matrix.id() == id)
    }
}
