//! Errors raised by the workspace.

use crate::persistence::SnapshotStoreError;
use thiserror::Error;

/// Errors returned when opening a [`Workspace`](super::Workspace).
///
/// Mutations never fail: saves are logged and dropped on error.
#[derive(Debug, Clone, Error)]
pub enum WorkspaceError {
    /// A snapshot could not be read.
    #[error(transparent)]
    Storage(#[from] SnapshotStoreError),
}
