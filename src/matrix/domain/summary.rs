//! Read-only projections of matrices for overview screens.

use super::{Matrix, MatrixId, MatrixName};
use crate::task::domain::{Bin, TaskState};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Task counts of the four quadrants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantCounts {
    /// Tasks in `doFirst`.
    pub do_first: usize,
    /// Tasks in `schedule`.
    pub schedule: usize,
    /// Tasks in `delegate`.
    pub delegate: usize,
    /// Tasks in `eliminate`.
    pub eliminate: usize,
}

impl QuadrantCounts {
    /// Counts the quadrant tasks of `state`, ignoring `unassigned`.
    #[must_use]
    pub fn of(state: &TaskState) -> Self {
        Self {
            do_first: state.bin(Bin::DoFirst).len(),
            schedule: state.bin(Bin::Schedule).len(),
            delegate: state.bin(Bin::Delegate).len(),
            eliminate: state.bin(Bin::Eliminate).len(),
        }
    }

    /// Returns the sum of the four counts.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.do_first + self.schedule + self.delegate + self.eliminate
    }
}

/// Derived summary of a [`Matrix`]; computed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixSummary {
    /// Matrix identifier.
    pub id: MatrixId,
    /// Matrix name.
    pub name: MatrixName,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub last_modified: DateTime<Utc>,
    /// Per-quadrant task counts.
    pub task_counts: QuadrantCounts,
    /// Sum of the quadrant counts. Unassigned tasks are not included.
    pub total_tasks: usize,
}

impl MatrixSummary {
    pub(crate) fn of(matrix: &Matrix) -> Self {
        let task_counts = QuadrantCounts::of(matrix.tasks());
        Self {
            id: matrix.id().clone(),
            name: matrix.name().clone(),
            created: matrix.created(),
            last_modified: matrix.last_modified(),
            task_counts,
            total_tasks: task_counts.total(),
        }
    }
}
