//! Application services for the active task working set.

mod bulk;
mod store;

pub use bulk::{MoveAllError, MoveAllUndo};
pub use store::{TaskDetails, TaskStore};
