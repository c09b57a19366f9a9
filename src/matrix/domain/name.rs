//! User-editable matrix names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name given to matrices created with a blank name.
pub const DEFAULT_MATRIX_NAME: &str = "Untitled Matrix";

/// Name given to the matrix synthesized from a legacy task dataset.
pub const MIGRATED_MATRIX_NAME: &str = "Migrated Matrix";

/// Trimmed matrix name that is never blank.
///
/// Construction cannot fail: blank input falls back to
/// [`DEFAULT_MATRIX_NAME`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct MatrixName(String);

impl MatrixName {
    /// Creates a name from user input.
    #[must_use]
    pub fn new(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Self(DEFAULT_MATRIX_NAME.to_owned());
        }
        Self(trimmed.to_owned())
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MatrixName {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<MatrixName> for String {
    fn from(value: MatrixName) -> Self {
        value.0
    }
}

impl AsRef<str> for MatrixName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MatrixName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
