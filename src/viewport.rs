//! Terminal viewport scroll state
//!
//! Tracks the document scroll position in fractional pixels so the animated
//! session can accumulate sub-row motion between frames. Rows map to a fixed
//! cell height, keeping the px/s configuration meaningful in the terminal.

use crate::session::Geometry;

/// Pixels represented by one terminal row. Matches a typical browser line
/// height, so a px/s setting means the same here and in the bookmarklet.
pub const CELL_HEIGHT_PX: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    /// Current scroll offset in pixels, always within `[0, max_offset_px]`.
    pub offset_px: f64,
    pub content_px: f64,
    pub viewport_px: f64,
    pub viewport_rows: u16,
}

impl ViewportState {
    pub fn new() -> Self {
        Self {
            offset_px: 0.0,
            content_px: 0.0,
            viewport_px: 0.0,
            viewport_rows: 0,
        }
    }

    /// Recompute bounds from the document and the rendered area, clamping
    /// the offset back into range when the content shrank.
    pub fn update_bounds(&mut self, content_lines: usize, viewport_rows: u16) {
        self.viewport_rows = viewport_rows;
        self.content_px = content_lines as f64 * CELL_HEIGHT_PX;
        self.viewport_px = f64::from(viewport_rows) * CELL_HEIGHT_PX;
        self.offset_px = self.offset_px.clamp(0.0, self.max_offset_px());
    }

    /// Geometry snapshot handed to the session each tick.
    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.content_px, self.viewport_px)
    }

    pub fn max_offset_px(&self) -> f64 {
        (self.content_px - self.viewport_px).max(0.0)
    }

    /// Apply an offset produced by the session.
    pub fn set_offset(&mut self, offset_px: f64) {
        self.offset_px = offset_px.clamp(0.0, self.max_offset_px());
    }

    /// Topmost visible row, for rendering and the scrollbar.
    pub fn top_row(&self) -> u16 {
        let row = (self.offset_px / CELL_HEIGHT_PX).floor();
        row.min(f64::from(u16::MAX)) as u16
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.set_offset(self.offset_px + f64::from(rows) * CELL_HEIGHT_PX);
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.set_offset(self.offset_px - f64::from(rows) * CELL_HEIGHT_PX);
    }

    pub fn half_page_down(&mut self) {
        self.scroll_down(self.viewport_rows / 2);
    }

    pub fn half_page_up(&mut self) {
        self.scroll_up(self.viewport_rows / 2);
    }

    pub fn jump_to_top(&mut self) {
        self.offset_px = 0.0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset_px = self.max_offset_px();
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new()
    }
}
