//! ScoreState - Open Score Document

use chrono::Utc;

use crate::domain::score::{Part, ScoreDocument};

/// A selection within the score (part + measure range)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub part: u32,
    pub measure_start: u32,
    pub measure_end: u32,
}

/// State for the open score document
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    /// The open document
    document: ScoreDocument,
    /// Current selection, if any
    selection: Option<Selection>,
    /// Whether a document is being fetched
    pub loading: bool,
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn document(&self) -> &ScoreDocument {
        &self.document
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn title(&self) -> &str {
        &self.document.title
    }

    // ==================== Setters ====================

    /// Replace the open document (clears selection)
    pub fn set_document(&mut self, document: ScoreDocument) {
        self.document = document;
        self.selection = None;
        self.loading = false;
    }

    /// Select a measure range; out-of-range selections are clamped
    pub fn select(&mut self, part: u32, measure_start: u32, measure_end: u32) {
        let last = self.document.measure_count.saturating_sub(1);
        let start = measure_start.min(last);
        let end = measure_end.clamp(start, last);
        self.selection = Some(Selection {
            part,
            measure_start: start,
            measure_end: end,
        });
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.document.title = title.into();
        self.document.updated_time = Utc::now();
    }

    pub fn add_part(&mut self, part: Part) {
        self.document.parts.push(part);
        self.document.updated_time = Utc::now();
    }

    pub fn set_measure_count(&mut self, count: u32) {
        self.document.measure_count = count;
        self.document.updated_time = Utc::now();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_document_clears_selection() {
        let mut state = ScoreState::new();
        let mut doc = ScoreDocument::untitled();
        doc.measure_count = 8;
        state.set_document(doc);
        state.select(0, 2, 5);
        assert!(state.selection().is_some());

        state.set_document(ScoreDocument::untitled());
        assert!(state.selection().is_none());
    }

    #[test]
    fn selection_is_clamped_to_measure_count() {
        let mut state = ScoreState::new();
        let mut doc = ScoreDocument::untitled();
        doc.measure_count = 4;
        state.set_document(doc);

        state.select(0, 10, 20);
        let sel = state.selection().expect("selection");
        assert_eq!(sel.measure_start, 3);
        assert_eq!(sel.measure_end, 3);
    }
}
