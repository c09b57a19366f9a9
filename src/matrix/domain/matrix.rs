//! Matrix record and its patch type.

use super::{MatrixId, MatrixName, MatrixSummary};
use crate::task::domain::TaskState;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A named matrix wrapping its own five-bin task layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matrix {
    id: MatrixId,
    name: MatrixName,
    created: DateTime<Utc>,
    last_modified: DateTime<Utc>,
    #[serde(default)]
    tasks: TaskState,
}

impl Matrix {
    /// Creates a matrix with five empty bins.
    #[must_use]
    pub fn new(name: MatrixName, clock: &impl Clock) -> Self {
        Self::with_tasks(name, TaskState::new(), clock)
    }

    /// Creates a matrix holding `tasks`.
    #[must_use]
    pub fn with_tasks(name: MatrixName, tasks: TaskState, clock: &impl Clock) -> Self {
        let now = clock.utc();
        Self {
            id: MatrixId::new(),
            name,
            created: now,
            last_modified: now,
            tasks,
        }
    }

    /// Returns the matrix identifier.
    #[must_use]
    pub const fn id(&self) -> &MatrixId {
        &self.id
    }

    /// Returns the matrix name.
    #[must_use]
    pub const fn name(&self) -> &MatrixName {
        &self.name
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns the timestamp of the latest mutation.
    #[must_use]
    pub const fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    /// Returns the task layout.
    #[must_use]
    pub const fn tasks(&self) -> &TaskState {
        &self.tasks
    }

    /// Returns the derived summary of this matrix.
    #[must_use]
    pub fn summary(&self) -> MatrixSummary {
        MatrixSummary::of(self)
    }

    pub(crate) const fn tasks_mut(&mut self) -> &mut TaskState {
        &mut self.tasks
    }

    pub(crate) fn apply(&mut self, patch: &MatrixPatch, clock: &impl Clock) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        self.touch(clock);
    }

    pub(crate) fn replace_tasks(&mut self, tasks: TaskState, clock: &impl Clock) {
        self.tasks = tasks;
        self.touch(clock);
    }

    pub(crate) fn touch(&mut self, clock: &impl Clock) {
        self.last_modified = clock.utc();
    }
}

/// Partial update of a [`Matrix`]. Only the name is user-editable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixPatch {
    name: Option<MatrixName>,
}

impl MatrixPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name; blank input falls back to the default name.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(MatrixName::new(name));
        self
    }
}
