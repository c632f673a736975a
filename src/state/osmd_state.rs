//! OsmdState - Notation Display Surface

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};

/// State for the rendered notation surface
#[derive(Debug, Clone)]
pub struct OsmdState {
    /// Zoom factor (1.0 = 100%)
    zoom: f32,
    /// Current page (0-based)
    page: u32,
    /// Total rendered pages
    total_pages: u32,
    /// Measure index the playback cursor sits on
    cursor_measure: u32,
    /// Whether the last layout pass completed
    rendered: bool,
    /// Whether the view scrolls to keep the cursor visible
    pub follow_cursor: bool,
}

impl Default for OsmdState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            page: 0,
            total_pages: 0,
            cursor_measure: 0,
            rendered: false,
            follow_cursor: true,
        }
    }
}

impl OsmdState {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn cursor_measure(&self) -> u32 {
        self.cursor_measure
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    // ==================== Setters ====================

    /// Set the zoom factor, clamped to the supported range
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * 1.25);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / 1.25);
    }

    /// Record the result of a layout pass
    pub fn mark_rendered(&mut self, total_pages: u32) {
        self.total_pages = total_pages;
        self.page = self.page.min(total_pages.saturating_sub(1));
        self.rendered = true;
    }

    /// Invalidate the layout (e.g., after an edit or zoom change)
    pub fn invalidate(&mut self) {
        self.rendered = false;
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.page = page.min(self.total_pages.saturating_sub(1));
    }

    pub fn set_cursor_measure(&mut self, measure: u32) {
        self.cursor_measure = measure;
    }
}
