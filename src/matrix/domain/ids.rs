//! Identifier type for matrices.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Process-unique matrix identifier of the form `matrix_<hex>`.
///
/// Identifiers loaded from older snapshots keep whatever form they were
/// saved with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatrixId(String);

impl MatrixId {
    /// Creates a new random matrix identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(format!("matrix_{}", Uuid::new_v4().simple()))
    }

    /// Wraps an existing identifier, such as one read from storage or a URL.
    #[must_use]
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MatrixId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for MatrixId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MatrixId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
