//! Conversion between store contents and stored documents.
//!
//! Decoding is lenient: a document that fails to parse is reported with a
//! warning and treated as absent, so one corrupt entry never blocks start-up.

use crate::matrix::domain::MatrixSnapshot;
use crate::task::domain::TaskState;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Serializes a task layout as a legacy task snapshot.
///
/// # Errors
///
/// Returns the serializer error, which only occurs for non-string map keys.
pub fn encode_tasks(state: &TaskState) -> serde_json::Result<String> {
    serde_json::to_string(state)
}

/// Serializes a matrix snapshot.
///
/// # Errors
///
/// Returns the serializer error, which only occurs for non-string map keys.
pub fn encode_matrices(snapshot: &MatrixSnapshot) -> serde_json::Result<String> {
    serde_json::to_string(snapshot)
}

/// Reads a legacy task snapshot. Missing bins load as empty.
#[must_use]
pub fn decode_tasks(key: &str, document: Option<&str>) -> Option<TaskState> {
    decode(key, document)
}

/// Reads a matrix snapshot.
#[must_use]
pub fn decode_matrices(key: &str, document: Option<&str>) -> Option<MatrixSnapshot> {
    decode(key, document)
}

fn decode<T: DeserializeOwned>(key: &str, document: Option<&str>) -> Option<T> {
    let raw = document?;
    serde_json::from_str(raw)
        .inspect_err(|error| warn!(key, %error, "discarding unreadable snapshot"))
        .ok()
}
