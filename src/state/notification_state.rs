//! NotificationState - Toast Notification Queue

use chrono::{DateTime, Local};

use crate::constants::NOTIFICATION_CAPACITY;
use crate::helpers::BoundedDeque;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Success => "Success",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

/// A single notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
    pub created_time: DateTime<Local>,
    /// Whether the user has dismissed this notification
    pub dismissed: bool,
}

/// State for toast notifications
#[derive(Debug)]
pub struct NotificationState {
    notifications: BoundedDeque<Notification>,
    next_id: u64,
}

impl NotificationState {
    pub fn new(capacity: usize) -> Self {
        Self {
            notifications: BoundedDeque::new(capacity),
            next_id: 1,
        }
    }

    /// Push a new notification and return its ID
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notifications.push(Notification {
            id,
            severity,
            message: message.into(),
            created_time: Local::now(),
            dismissed: false,
        });
        id
    }

    /// Dismiss a notification by ID; returns whether it was found
    pub fn dismiss(&mut self, id: u64) -> bool {
        let mut found = false;
        self.notifications.retain(|n| {
            if n.id == id {
                found = true;
                false
            } else {
                true
            }
        });
        found
    }

    /// Active (non-dismissed) notifications, oldest first
    pub fn active(&self) -> Vec<&Notification> {
        self.notifications.iter().filter(|n| !n.dismissed).collect()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Clear all notifications
    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new(NOTIFICATION_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let mut state = NotificationState::default();
        let id1 = state.push(Severity::Info, "saved");
        let id2 = state.push(Severity::Error, "sync failed");
        assert_eq!(state.active().len(), 2);

        assert!(state.dismiss(id1));
        assert!(!state.dismiss(id1));
        assert_eq!(state.active().len(), 1);
        assert_eq!(state.active()[0].id, id2);
    }

    #[test]
    fn oldest_notifications_evicted_at_capacity() {
        let mut state = NotificationState::new(2);
        state.push(Severity::Info, "one");
        state.push(Severity::Info, "two");
        state.push(Severity::Info, "three");

        let messages: Vec<_> = state.active().iter().map(|n| n.message.clone()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }
}
