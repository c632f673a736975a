//! LogState - Log Messages with Ring Buffer

use chrono::{DateTime, Local};

use crate::constants::GLOBAL_LOG_CAPACITY;
use crate::helpers::BoundedDeque;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: u64,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// State for log messages using a ring buffer
#[derive(Debug)]
pub struct LogState {
    entries: BoundedDeque<LogEntry>,
    next_id: u64,
    /// Whether auto-scroll is enabled
    pub auto_scroll: bool,
}

impl LogState {
    /// Create a new log state with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BoundedDeque::new(capacity),
            next_id: 1,
            auto_scroll: true,
        }
    }

    /// Push a new log entry
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>, timestamp: DateTime<Local>) {
        let entry = LogEntry {
            id: self.next_id,
            level,
            message: message.into(),
            timestamp,
        };
        self.next_id += 1;
        self.entries.push(entry);
    }

    /// Push a log entry with current timestamp
    pub fn push_now(&mut self, level: LogLevel, message: impl Into<String>) {
        self.push(level, message, Local::now());
    }

    /// Iterate over entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Toggle auto-scroll
    pub fn toggle_auto_scroll(&mut self) {
        self.auto_scroll = !self.auto_scroll;
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(GLOBAL_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids_and_evicts_at_capacity() {
        let mut state = LogState::new(2);
        state.push_now(LogLevel::Info, "first");
        state.push_now(LogLevel::Warn, "second");
        state.push_now(LogLevel::Error, "third");

        assert_eq!(state.len(), 2);
        let messages: Vec<_> = state.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "third"]);

        let ids: Vec<_> = state.entries().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
