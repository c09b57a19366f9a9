//! Domain model for tasks and the bins that hold them.
//!
//! A task belongs to exactly one [`Bin`] at a time. The four non-unassigned
//! bins are the quadrants of the Eisenhower matrix.

mod bin;
mod error;
mod ids;
mod state;
mod task;

pub use bin::Bin;
pub use error::{ParseBinError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use state::TaskState;
pub use task::{MAX_NOTES_CHARS, Task, TaskNotes, TaskPatch, TaskStatus, TaskTitle};
