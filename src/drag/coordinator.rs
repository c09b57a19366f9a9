//! Gesture state between drag start and drop.

use super::geometry::{self, Point, Rect};
use super::payload::DragPayload;
use crate::task::domain::{Bin, TaskId};
use crate::task::services::TaskStore;
use mockable::Clock;
use tracing::{debug, warn};

/// Live preview of where a drop would land.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertionPreview {
    /// Bin under the pointer.
    pub bin: Bin,
    /// Index the task would be inserted at.
    pub index: usize,
    /// Indicator line position relative to the bin container.
    pub position: Point,
}

/// Rendered geometry of one bin, as reported by the view layer.
#[derive(Debug, Clone, Copy)]
pub struct BinLayout<'a> {
    /// Bounds of the bin container.
    pub container: Rect,
    /// Top-left corner of the area tasks are laid out in.
    pub content_origin: Point,
    /// Task boxes in bin order.
    pub tasks: &'a [Rect],
}

/// A move produced by a successful drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropMove {
    /// The dropped task.
    pub task_id: TaskId,
    /// Bin the task came from.
    pub from: Bin,
    /// Bin the task was dropped on.
    pub to: Bin,
    /// Requested position; `None` appends.
    pub insert_index: Option<usize>,
}

impl DropMove {
    /// Applies the move to `store`, returning whether anything changed.
    pub fn apply<C>(&self, store: &mut TaskStore<C>) -> bool
    where
        C: Clock + Send + Sync,
    {
        store.move_task(self.task_id, self.from, self.to, self.insert_index)
    }
}

/// Tracks one drag gesture: the dragged task, the hovered bin and the
/// insertion preview.
///
/// Every terminal event ([`drop`](Self::drop), [`drop_at`](Self::drop_at),
/// [`end`](Self::end), [`cancel`](Self::cancel)) clears the hover target
/// and preview whatever the outcome, so no indicator outlives its gesture.
#[derive(Debug, Clone, Default)]
pub struct DragCoordinator {
    active: Option<DragPayload>,
    hover: Option<Bin>,
    preview: Option<InsertionPreview>,
}

impl DragCoordinator {
    /// Creates an idle coordinator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the payload of the gesture in progress.
    #[must_use]
    pub const fn active(&self) -> Option<&DragPayload> {
        self.active.as_ref()
    }

    /// Returns the bin currently highlighted as a drop target.
    #[must_use]
    pub const fn hover_target(&self) -> Option<Bin> {
        self.hover
    }

    /// Returns the current insertion preview.
    #[must_use]
    pub const fn preview(&self) -> Option<&InsertionPreview> {
        self.preview.as_ref()
    }

    /// Starts dragging `task_id` out of `source_bin`.
    pub fn begin(&mut self, task_id: TaskId, source_bin: Bin) -> DragPayload {
        let payload = DragPayload::new(task_id, source_bin);
        self.active = Some(payload);
        self.hover = None;
        self.preview = None;
        debug!(task_id = %task_id, source_bin = %source_bin, "drag started");
        payload
    }

    /// Marks `bin` as the hovered drop target.
    pub const fn enter(&mut self, bin: Bin) {
        self.hover = Some(bin);
    }

    /// Recomputes the insertion preview while the pointer moves over `bin`.
    ///
    /// Only the hovered bin produces a preview; movement over any other bin
    /// leaves the preview untouched.
    pub fn over(
        &mut self,
        bin: Bin,
        pointer: Point,
        layout: &BinLayout<'_>,
    ) -> Option<&InsertionPreview> {
        if self.hover != Some(bin) {
            return self.preview.as_ref();
        }
        self.preview = Some(InsertionPreview {
            bin,
            index: geometry::insertion_index(pointer, layout.tasks),
            position: geometry::indicator_position(
                pointer,
                layout.tasks,
                &layout.container,
                layout.content_origin,
            ),
        });
        self.preview.as_ref()
    }

    /// Handles the pointer leaving a target. Hover and preview are cleared
    /// only when the pointer is really outside `bounds`; leaving onto a
    /// child element keeps them.
    pub const fn leave(&mut self, pointer: Point, bounds: &Rect) {
        if !bounds.contains(pointer) {
            self.hover = None;
            self.preview = None;
        }
    }

    /// Completes a drop on `target` using the preview index.
    ///
    /// The preview is only honoured when it was computed for `target`.
    /// Returns `None` when `raw` is not a valid payload.
    pub fn drop(&mut self, raw: &str, target: Bin) -> Option<DropMove> {
        let insert_index = self
            .preview
            .filter(|preview| preview.bin == target)
            .map(|preview| preview.index);
        self.finish(raw, target, insert_index)
    }

    /// Completes a drop on `target`, computing the index from the geometry
    /// reported at drop time. An empty bin appends.
    pub fn drop_at(
        &mut self,
        raw: &str,
        target: Bin,
        pointer: Point,
        tasks: &[Rect],
    ) -> Option<DropMove> {
        let insert_index =
            (!tasks.is_empty()).then(|| geometry::insertion_index(pointer, tasks));
        self.finish(raw, target, insert_index)
    }

    /// Ends the gesture after the platform reports drag end.
    pub const fn end(&mut self) {
        self.reset();
    }

    /// Abandons the gesture without producing a move.
    pub fn cancel(&mut self) {
        if self.active.is_some() {
            debug!("drag cancelled");
        }
        self.reset();
    }

    fn finish(
        &mut self,
        raw: &str,
        target: Bin,
        insert_index: Option<usize>,
    ) -> Option<DropMove> {
        self.reset();
        let payload = DragPayload::parse(raw)
            .inspect_err(|error| {
                warn!(%error, target = %target, "ignoring drop with unreadable payload");
            })
            .ok()?;
        Some(DropMove {
            task_id: payload.task_id,
            from: payload.source_bin,
            to: target,
            insert_index,
        })
    }

    const fn reset(&mut self) {
        self.active = None;
        self.hover = None;
        self.preview = None;
    }
}
