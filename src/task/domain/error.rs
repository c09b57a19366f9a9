//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The notes exceed the character limit.
    #[error("task notes are {length} characters long, limit is {limit}")]
    NotesTooLong {
        /// Character count of the rejected notes.
        length: usize,
        /// Maximum accepted character count.
        limit: usize,
    },
}

/// Error returned while parsing bin names from persistence or drag payloads.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown bin: {0}")]
pub struct ParseBinError(pub String);

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
