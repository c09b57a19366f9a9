//! Data attached to a drag gesture when it starts.

use crate::task::domain::{Bin, TaskId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when reading a drag payload.
#[derive(Debug, Error)]
pub enum DragPayloadError {
    /// The drag carried no data.
    #[error("drag payload is empty")]
    Missing,
    /// The data was not a task payload.
    #[error("malformed drag payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Identifies the dragged task and the bin it left.
///
/// Encoded as `{"taskId": <i64>, "sourceQuadrant": "<bin>"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    /// The dragged task.
    #[serde(rename = "taskId")]
    pub task_id: TaskId,
    /// The bin the task was dragged from.
    #[serde(rename = "sourceQuadrant")]
    pub source_bin: Bin,
}

impl DragPayload {
    /// Creates a payload.
    #[must_use]
    pub const fn new(task_id: TaskId, source_bin: Bin) -> Self {
        Self {
            task_id,
            source_bin,
        }
    }

    /// Serializes the payload for the drag data transfer.
    ///
    /// # Errors
    ///
    /// Returns [`DragPayloadError::Malformed`] if serialization fails.
    pub fn encode(&self) -> Result<String, DragPayloadError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reads a payload from drag data.
    ///
    /// # Errors
    ///
    /// Returns [`DragPayloadError::Missing`] for blank data and
    /// [`DragPayloadError::Malformed`] when the data does not describe a
    /// task and a known bin.
    pub fn parse(raw: &str) -> Result<Self, DragPayloadError> {
        if raw.trim().is_empty() {
            return Err(DragPayloadError::Missing);
        }
        Ok(serde_json::from_str(raw)?)
    }
}
