//! HistoryState - Undo/Redo Stacks

use crate::constants::UNDO_DEPTH;
use crate::domain::edit::EditOp;
use crate::helpers::BoundedDeque;

/// State for edit history
#[derive(Debug)]
pub struct HistoryState {
    undo_stack: BoundedDeque<EditOp>,
    redo_stack: Vec<EditOp>,
}

impl HistoryState {
    pub fn new(depth: usize) -> Self {
        Self {
            undo_stack: BoundedDeque::new(depth),
            redo_stack: Vec::new(),
        }
    }

    /// Record a newly applied edit; clears the redo stack
    pub fn record(&mut self, op: EditOp) {
        self.undo_stack.push(op);
        self.redo_stack.clear();
    }

    /// Pop the most recent edit and return the operation that reverses it
    pub fn undo(&mut self) -> Option<EditOp> {
        let op = self.undo_stack.pop_back()?;
        self.redo_stack.push(op.clone());
        Some(op.inverted())
    }

    /// Re-apply the most recently undone edit
    pub fn redo(&mut self) -> Option<EditOp> {
        let op = self.redo_stack.pop()?;
        self.undo_stack.push(op.clone());
        Some(op)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Label of the edit the next undo would revert
    pub fn undo_label(&self) -> Option<&'static str> {
        self.undo_stack.last().map(EditOp::label)
    }

    /// Drop all history (e.g., when opening a different document)
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new(UNDO_DEPTH)
    }
}
