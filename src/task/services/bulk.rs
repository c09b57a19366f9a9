//! Bulk bin moves and their single-level undo record.

use crate::task::domain::{Bin, TaskId};
use thiserror::Error;

/// Reasons a move-all request is refused.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveAllError {
    /// Source and target bins are the same.
    #[error("Same quadrant")]
    SameQuadrant,

    /// The source bin holds no tasks.
    #[error("No tasks to move")]
    NoTasksToMove,
}

/// Inverse of the last successful move-all, held by the store until used
/// or overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveAllUndo {
    source: Bin,
    target: Bin,
    task_ids: Vec<TaskId>,
}

impl MoveAllUndo {
    pub(crate) const fn new(source: Bin, target: Bin, task_ids: Vec<TaskId>) -> Self {
        Self {
            source,
            target,
            task_ids,
        }
    }

    /// Bin the tasks were moved out of, and will be restored to.
    #[must_use]
    pub const fn source(&self) -> Bin {
        self.source
    }

    /// Bin the tasks were appended to.
    #[must_use]
    pub const fn target(&self) -> Bin {
        self.target
    }

    /// Moved task identifiers in their original relative order.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }
}
