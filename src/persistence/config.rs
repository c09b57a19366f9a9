//! Storage keys used by the workspace.

use serde::Deserialize;

/// Key of the legacy task snapshot.
pub const DEFAULT_TASK_KEY: &str = "dcyde-tasks";

/// Key of the matrix snapshot.
pub const DEFAULT_MATRIX_KEY: &str = "dcyde-matrices";

/// Names the documents the workspace reads and writes.
///
/// # Examples
///
/// ```
/// use dcyde::persistence::StorageConfig;
///
/// let config = StorageConfig::default();
/// assert_eq!(config.matrix_key, "dcyde-matrices");
///
/// let scoped = StorageConfig::default().with_matrix_key("profile-a-matrices");
/// assert_eq!(scoped.task_key, "dcyde-tasks");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageConfig {
    /// Key of the task snapshot. Only read for migration once matrices
    /// exist.
    pub task_key: String,
    /// Key of the matrix snapshot.
    pub matrix_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            task_key: DEFAULT_TASK_KEY.to_owned(),
            matrix_key: DEFAULT_MATRIX_KEY.to_owned(),
        }
    }
}

impl StorageConfig {
    /// Overrides the task snapshot key.
    #[must_use]
    pub fn with_task_key(mut self, key: impl Into<String>) -> Self {
        self.task_key = key.into();
        self
    }

    /// Overrides the matrix snapshot key.
    #[must_use]
    pub fn with_matrix_key(mut self, key: impl Into<String>) -> Self {
        self.matrix_key = key.into();
        self
    }
}
