//! Row-aware insertion geometry for wrapped task layouts.

/// Tops closer than this many pixels belong to the same visual row.
pub const ROW_TOLERANCE: f64 = 10.0;

/// Vertical gap between the last row and an indicator placed below it.
pub const INDICATOR_GAP: f64 = 8.0;

/// A pointer position in viewport pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The bounding box of a rendered element in viewport pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

#[expect(
    clippy::float_arithmetic,
    reason = "edges and centres are derived from pixel coordinates"
)]
impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge.
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Horizontal centre.
    #[must_use]
    pub const fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Returns `true` when `point` lies inside or on the edges.
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }
}

/// Elements sharing one visual row, sorted left to right.
struct Row<'a> {
    top: f64,
    bottom: f64,
    elements: Vec<&'a Rect>,
}

/// Where the pointer falls relative to the grouped rows.
enum Slot<'a> {
    Empty,
    InRow {
        preceding: usize,
        row: Row<'a>,
        position: usize,
    },
    AfterRows {
        last: &'a Rect,
    },
}

#[expect(
    clippy::float_arithmetic,
    reason = "row grouping compares pixel distances"
)]
fn group_rows(elements: &[Rect]) -> Vec<Row<'_>> {
    let mut rows: Vec<Row<'_>> = Vec::new();
    for rect in elements {
        if let Some(row) = rows
            .iter_mut()
            .find(|row| (row.top - rect.top).abs() < ROW_TOLERANCE)
        {
            row.bottom = row.bottom.max(rect.bottom());
            row.elements.push(rect);
            continue;
        }
        rows.push(Row {
            top: rect.top,
            bottom: rect.bottom(),
            elements: vec![rect],
        });
    }
    rows.sort_by(|a, b| a.top.total_cmp(&b.top));
    for row in &mut rows {
        row.elements.sort_by(|a, b| a.left.total_cmp(&b.left));
    }
    rows
}

fn locate(pointer: Point, elements: &[Rect]) -> Slot<'_> {
    let mut rows = group_rows(elements);
    let Some(target) = rows.iter().position(|row| pointer.y <= row.bottom) else {
        return rows
            .last()
            .and_then(|row| row.elements.last().copied())
            .map_or(Slot::Empty, |last| Slot::AfterRows { last });
    };
    let preceding = rows
        .iter()
        .take(target)
        .map(|row| row.elements.len())
        .sum();
    let row = rows.swap_remove(target);
    let position = row
        .elements
        .iter()
        .position(|rect| pointer.x < rect.center_x())
        .unwrap_or(row.elements.len());
    Slot::InRow {
        preceding,
        row,
        position,
    }
}

/// Computes the index at which a dropped task should be inserted.
///
/// `elements` are the rendered task boxes of the target bin, in bin order.
/// The pointer selects the first row whose bottom edge is at or below it
/// (the first row when it is above every row), then the first element in
/// that row whose centre lies right of it. Returns `0` for an empty bin and
/// the element count when the pointer is below every row.
#[must_use]
pub fn insertion_index(pointer: Point, elements: &[Rect]) -> usize {
    match locate(pointer, elements) {
        Slot::Empty => 0,
        Slot::InRow {
            preceding,
            position,
            ..
        } => preceding.saturating_add(position).min(elements.len()),
        Slot::AfterRows { .. } => elements.len(),
    }
}

/// Computes where to draw the insertion line, relative to `container`.
///
/// An empty bin shows the line at `content_origin`. Otherwise the line sits
/// at the left edge of the element it precedes, at the right edge of the
/// last element of its row, or [`INDICATOR_GAP`] pixels below the last row.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "indicator offsets are pixel arithmetic"
)]
pub fn indicator_position(
    pointer: Point,
    elements: &[Rect],
    container: &Rect,
    content_origin: Point,
) -> Point {
    let absolute = match locate(pointer, elements) {
        Slot::Empty => content_origin,
        Slot::InRow { row, position, .. } => row.elements.get(position).map_or_else(
            || {
                row.elements
                    .last()
                    .map_or(content_origin, |last| Point::new(last.right(), last.top))
            },
            |next| Point::new(next.left, next.top),
        ),
        Slot::AfterRows { last } => Point::new(last.left, last.bottom() + INDICATOR_GAP),
    };
    Point::new(absolute.x - container.left, absolute.y - container.top)
}
