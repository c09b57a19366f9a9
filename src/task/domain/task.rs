//! Task entity and the value types it is built from.

use super::{ParseTaskStatusError, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of characters accepted in task notes.
pub const MAX_NOTES_CHARS: usize = 1000;

/// Workflow status of a task, independent of its quadrant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not yet planned.
    Backlog,
    /// Planned but not started.
    #[default]
    Todo,
    /// Being worked on.
    InProgress,
    /// Awaiting review.
    InReview,
    /// Finished.
    Done,
    /// Waiting on something else.
    Blocked,
    /// Dropped.
    Canceled,
}

impl TaskStatus {
    /// Every status, in the order a status picker lists them.
    pub const ALL: [Self; 7] = [
        Self::Backlog,
        Self::Todo,
        Self::InProgress,
        Self::InReview,
        Self::Done,
        Self::Blocked,
        Self::Canceled,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::InReview => "in-review",
            Self::Done => "done",
            Self::Blocked => "blocked",
            Self::Canceled => "canceled",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trimmed, non-empty task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskTitle> for String {
    fn from(value: TaskTitle) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form task notes, bounded by [`MAX_NOTES_CHARS`].
///
/// Empty notes are valid and represent cleared notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskNotes(String);

impl TaskNotes {
    /// Creates validated notes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotesTooLong`] when the value has more than
    /// [`MAX_NOTES_CHARS`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let length = raw.chars().count();
        if length > MAX_NOTES_CHARS {
            return Err(TaskDomainError::NotesTooLong {
                length,
                limit: MAX_NOTES_CHARS,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the notes as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the notes are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for TaskNotes {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskNotes> for String {
    fn from(value: TaskNotes) -> Self {
        value.0
    }
}

/// A single prioritizable task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    completed: bool,
    created_at: DateTime<Utc>,
    #[serde(default)]
    status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<TaskNotes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes_last_modified: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates an open task with status [`TaskStatus::Todo`].
    #[must_use]
    pub fn new(id: TaskId, title: TaskTitle, clock: &impl Clock) -> Self {
        Self {
            id,
            title,
            completed: false,
            created_at: clock.utc(),
            status: TaskStatus::Todo,
            notes: None,
            notes_last_modified: None,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns whether the task is marked complete.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the notes, if any were ever written.
    #[must_use]
    pub const fn notes(&self) -> Option<&TaskNotes> {
        self.notes.as_ref()
    }

    /// Returns when the notes were last written.
    #[must_use]
    pub const fn notes_last_modified(&self) -> Option<DateTime<Utc>> {
        self.notes_last_modified
    }

    /// Flips the completion flag.
    pub const fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// Merges the fields present in `patch` into this task.
    ///
    /// Writing notes refreshes [`Task::notes_last_modified`].
    pub fn apply(&mut self, patch: &TaskPatch, clock: &impl Clock) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = &patch.notes {
            self.notes = Some(notes.clone());
            self.notes_last_modified = Some(clock.utc());
        }
    }
}

/// Partial update of a [`Task`].
///
/// Only the fields a user may edit are listed; identity and creation time
/// are fixed for the lifetime of a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<TaskTitle>,
    completed: Option<bool>,
    status: Option<TaskStatus>,
    notes: Option<TaskNotes>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Sets the workflow status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: TaskNotes) -> Self {
        self.notes = Some(notes);
        self
    }

    /// Returns `true` when the patch carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.completed.is_none()
            && self.status.is_none()
            && self.notes.is_none()
    }
}
