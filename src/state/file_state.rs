//! FileState - Open Document Binding

use crate::constants::RECENT_FILES_CAPACITY;
use crate::helpers::BoundedDeque;

/// Metadata for the currently open document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenFile {
    /// Display name (file stem or score title)
    pub name: String,
    /// Backend record ID, if the document lives on the server
    pub remote_id: Option<String>,
}

/// State for the open document and recent files
#[derive(Debug)]
pub struct FileState {
    current: Option<OpenFile>,
    /// Unsaved changes since the last save
    dirty: bool,
    recent: BoundedDeque<String>,
}

impl Default for FileState {
    fn default() -> Self {
        Self::new()
    }
}

impl FileState {
    pub fn new() -> Self {
        Self {
            current: None,
            dirty: false,
            recent: BoundedDeque::new(RECENT_FILES_CAPACITY),
        }
    }

    // ==================== Getters ====================

    pub fn current(&self) -> Option<&OpenFile> {
        self.current.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Recent file names, most recent first
    pub fn recent(&self) -> Vec<&str> {
        self.recent.iter_rev().map(String::as_str).collect()
    }

    // ==================== Setters ====================

    /// Open a document, pushing the previous one onto the recent list
    pub fn open(&mut self, file: OpenFile) {
        if let Some(previous) = self.current.take() {
            self.push_recent(previous.name);
        }
        self.current = Some(file);
        self.dirty = false;
    }

    /// Close the current document
    pub fn close(&mut self) {
        if let Some(previous) = self.current.take() {
            self.push_recent(previous.name);
        }
        self.dirty = false;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_saved(&mut self, remote_id: Option<String>) {
        if let Some(current) = self.current.as_mut() {
            if remote_id.is_some() {
                current.remote_id = remote_id;
            }
        }
        self.dirty = false;
    }

    fn push_recent(&mut self, name: String) {
        // Deduplicate before pushing so the list holds distinct names
        self.recent.retain(|n| n != &name);
        self.recent.push(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> OpenFile {
        OpenFile {
            name: name.to_string(),
            remote_id: None,
        }
    }

    #[test]
    fn open_tracks_recent_and_clears_dirty() {
        let mut state = FileState::new();
        state.open(file("sonata"));
        state.mark_dirty();
        assert!(state.is_dirty());

        state.open(file("etude"));
        assert!(!state.is_dirty());
        assert_eq!(state.recent(), vec!["sonata"]);
        assert_eq!(state.current().map(|f| f.name.as_str()), Some("etude"));
    }

    #[test]
    fn recent_list_deduplicates() {
        let mut state = FileState::new();
        state.open(file("a"));
        state.open(file("b"));
        state.open(file("a"));
        state.open(file("c"));

        assert_eq!(state.recent(), vec!["a", "b"]);
    }

    #[test]
    fn mark_saved_records_remote_id() {
        let mut state = FileState::new();
        state.open(file("sonata"));
        state.mark_dirty();
        state.mark_saved(Some("rec_42".to_string()));

        assert!(!state.is_dirty());
        assert_eq!(
            state.current().and_then(|f| f.remote_id.as_deref()),
            Some("rec_42")
        );
    }
}
