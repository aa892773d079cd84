//! Resize-drag math for container grid spans.
//!
//! Containers sit on a 12-column grid with fixed-height row units. Dragging
//! a container's edge or corner runs a small state machine:
//!
//! ```text
//! Idle ──pointer-down──▶ Resizing ──pointer-move──▶ Resizing (pixel preview)
//!                            │
//!                      pointer-up ──▶ snap to spans, emit SpanPatch
//!                      cancel     ──▶ revert to the pre-drag size
//! ```
//!
//! During the drag only the raw pixel size changes — spans are derived once
//! at release, so the layout doesn't reflow mid-drag. All functions here are
//! pure and testable without any UI.
//!
//! The caller owns the wiring: a finished drag yields a [`SpanPatch`] which
//! is handed to [`crate::mutate::patch_props`] through whatever callback the
//! canvas was given. Nothing here touches a document directly.

use crate::props::Props;

/// Number of layout grid columns.
pub const GRID_COLUMNS: u32 = 12;
/// Number of layout grid row units.
pub const GRID_ROWS: u32 = 6;
/// Fixed pixel height of one grid row unit.
pub const ROW_HEIGHT_PX: f64 = 100.0;
/// Smallest width a container can be dragged down to.
pub const MIN_WIDTH_PX: f64 = 100.0;
/// Smallest height a container can be dragged down to.
pub const MIN_HEIGHT_PX: f64 = 50.0;

/// Which container edge the drag started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDirection {
    Horizontal,
    Vertical,
    Both,
}

/// The grid spans committed at the end of a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanPatch {
    pub column_span: u32,
    pub row_span: u32,
}

impl SpanPatch {
    /// Write the spans into a container prop bag (for a full-replace patch).
    pub fn apply_to(&self, props: &mut Props) {
        props.insert("gridColumnSpan".into(), self.column_span.into());
        props.insert("gridRowSpan".into(), self.row_span.into());
    }
}

/// Clamp a column span into `[1, 12]`.
pub fn clamp_column_span(span: i64) -> u32 {
    span.clamp(1, GRID_COLUMNS as i64) as u32
}

/// Clamp a row span into `[1, 6]`.
pub fn clamp_row_span(span: i64) -> u32 {
    span.clamp(1, GRID_ROWS as i64) as u32
}

/// Snap a pixel size to the nearest grid spans.
///
/// Column width is the container's available width divided into 12; row
/// height is fixed. Results are clamped to the grid bounds.
pub fn snap_to_spans(size: (f64, f64), available_width: f64) -> SpanPatch {
    let column_width = (available_width / GRID_COLUMNS as f64).max(1.0);
    let (width, height) = size;
    SpanPatch {
        column_span: clamp_column_span((width / column_width).round() as i64),
        row_span: clamp_row_span((height / ROW_HEIGHT_PX).round() as i64),
    }
}

/// An in-flight resize drag.
///
/// Created on pointer-down, updated on every pointer-move, consumed by
/// [`finish`](ResizeSession::finish) on pointer-up or
/// [`cancel`](ResizeSession::cancel) on any abnormal termination (Escape,
/// pointer leaving the window).
#[derive(Debug, Clone)]
pub struct ResizeSession {
    direction: ResizeDirection,
    start_pointer: (f64, f64),
    start_size: (f64, f64),
    size: (f64, f64),
}

impl ResizeSession {
    /// Start a drag from the given pointer position and container size.
    pub fn begin(direction: ResizeDirection, pointer: (f64, f64), size: (f64, f64)) -> Self {
        Self {
            direction,
            start_pointer: pointer,
            start_size: size,
            size,
        }
    }

    /// Apply a pointer move and return the new preview size in pixels.
    ///
    /// No span math happens here — the preview tracks the pointer
    /// continuously and only the release snaps to the grid.
    pub fn update(&mut self, pointer: (f64, f64)) -> (f64, f64) {
        self.size = self.resized(pointer);
        self.size
    }

    /// Current preview size in pixels.
    pub fn size(&self) -> (f64, f64) {
        self.size
    }

    /// Finish the drag: snap the final pixel size to grid spans.
    ///
    /// `available_width` is the pixel width the 12 columns divide.
    pub fn finish(self, pointer: (f64, f64), available_width: f64) -> SpanPatch {
        snap_to_spans(self.resized(pointer), available_width)
    }

    /// Abandon the drag, returning the pre-drag size to restore.
    pub fn cancel(self) -> (f64, f64) {
        self.start_size
    }

    fn resized(&self, pointer: (f64, f64)) -> (f64, f64) {
        let dx = pointer.0 - self.start_pointer.0;
        let dy = pointer.1 - self.start_pointer.1;
        let (start_w, start_h) = self.start_size;
        let mut width = start_w;
        let mut height = start_h;
        match self.direction {
            ResizeDirection::Horizontal => width = start_w + dx,
            ResizeDirection::Vertical => height = start_h + dy,
            ResizeDirection::Both => {
                width = start_w + dx;
                height = start_h + dy;
            }
        }
        (width.max(MIN_WIDTH_PX), height.max(MIN_HEIGHT_PX))
    }
}
