//! Edit - Reversible Score Edit Operations

use serde::{Deserialize, Serialize};

/// A single reversible edit applied to the open score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditOp {
    /// A note was inserted
    NoteInserted { part: u32, measure: u32, pitch: u8 },
    /// A note was removed
    NoteRemoved { part: u32, measure: u32, pitch: u8 },
    /// A measure was appended or inserted at an index
    MeasureAdded { at: u32 },
    /// A measure was removed from an index
    MeasureRemoved { at: u32 },
    /// The score tempo changed
    TempoChanged { from: u16, to: u16 },
    /// The score title changed
    TitleChanged { from: String, to: String },
}

impl EditOp {
    /// Short label for undo/redo menus
    pub fn label(&self) -> &'static str {
        match self {
            EditOp::NoteInserted { .. } => "Insert note",
            EditOp::NoteRemoved { .. } => "Remove note",
            EditOp::MeasureAdded { .. } => "Add measure",
            EditOp::MeasureRemoved { .. } => "Remove measure",
            EditOp::TempoChanged { .. } => "Change tempo",
            EditOp::TitleChanged { .. } => "Rename score",
        }
    }

    /// The operation that undoes this one
    pub fn inverted(&self) -> EditOp {
        match self {
            EditOp::NoteInserted { part, measure, pitch } => EditOp::NoteRemoved {
                part: *part,
                measure: *measure,
                pitch: *pitch,
            },
            EditOp::NoteRemoved { part, measure, pitch } => EditOp::NoteInserted {
                part: *part,
                measure: *measure,
                pitch: *pitch,
            },
            EditOp::MeasureAdded { at } => EditOp::MeasureRemoved { at: *at },
            EditOp::MeasureRemoved { at } => EditOp::MeasureAdded { at: *at },
            EditOp::TempoChanged { from, to } => EditOp::TempoChanged {
                from: *to,
                to: *from,
            },
            EditOp::TitleChanged { from, to } => EditOp::TitleChanged {
                from: to.clone(),
                to: from.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverting_twice_is_identity() {
        let ops = vec![
            EditOp::NoteInserted { part: 0, measure: 4, pitch: 60 },
            EditOp::MeasureAdded { at: 8 },
            EditOp::TempoChanged { from: 120, to: 90 },
            EditOp::TitleChanged {
                from: "Old".to_string(),
                to: "New".to_string(),
            },
        ];

        for op in ops {
            assert_eq!(op.inverted().inverted(), op);
        }
    }

    #[test]
    fn note_insert_inverts_to_removal() {
        let op = EditOp::NoteInserted { part: 1, measure: 2, pitch: 67 };
        assert_eq!(
            op.inverted(),
            EditOp::NoteRemoved { part: 1, measure: 2, pitch: 67 }
        );
    }
}
