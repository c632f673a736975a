//! Score - Score Document Data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single instrument part within a score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Display name (e.g., "Violin I")
    pub name: String,
    /// Instrument identifier
    pub instrument: String,
    /// Number of staves (1 for most instruments, 2 for piano)
    pub staff_count: u8,
}

impl Part {
    pub fn new(name: impl Into<String>, instrument: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instrument: instrument.into(),
            staff_count: 1,
        }
    }
}

/// A score document as edited by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDocument {
    /// Backend record ID (empty for documents never saved)
    pub id: String,
    /// Score title
    pub title: String,
    /// Composer credit
    pub composer: String,
    /// Instrument parts, in display order
    pub parts: Vec<Part>,
    /// Total measure count
    pub measure_count: u32,
    /// Last modification timestamp
    pub updated_time: DateTime<Utc>,
}

impl Default for ScoreDocument {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            composer: String::new(),
            parts: Vec::new(),
            measure_count: 0,
            updated_time: Utc::now(),
        }
    }
}

impl ScoreDocument {
    /// Create a fresh unsaved document with a single empty part
    pub fn untitled() -> Self {
        Self {
            title: "Untitled Score".to_string(),
            parts: vec![Part::new("Part 1", "piano")],
            measure_count: 1,
            ..Default::default()
        }
    }

    /// Whether the document has ever been saved to the backend
    pub fn is_saved(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn part_names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.name.as_str()).collect()
    }
}
