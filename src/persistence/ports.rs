//! Storage port for snapshot documents.

use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotStoreResult<T> = Result<T, SnapshotStoreError>;

/// Key/value storage for whole JSON documents.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotStore: Send + Sync {
    /// Reads the document stored under `key`.
    ///
    /// Returns `None` when nothing has been saved under the key yet.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::InvalidKey`] for keys the backend
    /// cannot address, or [`SnapshotStoreError::Persistence`] when the
    /// backend fails.
    fn load(&self, key: &str) -> SnapshotStoreResult<Option<String>>;

    /// Replaces the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::InvalidKey`] for keys the backend
    /// cannot address, or [`SnapshotStoreError::Persistence`] when the
    /// backend fails.
    fn save(&self, key: &str, document: &str) -> SnapshotStoreResult<()>;
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStoreError {
    /// The key contains characters the backend cannot store.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Backend failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotStoreError {
    /// Wraps a backend error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
