//! Pointer-driven drag and drop of tasks between and within bins.
//!
//! Bins lay tasks out left to right and wrap them onto several visual rows,
//! so the drop position is derived from both pointer coordinates. The view
//! layer reports rendered geometry; this module turns it into insertion
//! indices, indicator positions and, on drop, a [`DropMove`] to apply to
//! the task store.

mod coordinator;
pub mod geometry;
mod payload;


pub use coordinator::{BinLayout, DragCoordinator, DropMove, InsertionPreview};
pub use geometry::{INDICATOR_GAP, Point, ROW_TOLERANCE, Rect};
pub use payload::{DragPayload, DragPayloadError};
