//! AppEvent - Application Event Enum
//!
//! All events that can be sent from services to the state layer.

use chrono::{DateTime, Local};

use crate::domain::user::User;
use crate::state::log_state::LogLevel;
use crate::state::notification_state::Severity;

/// External endpoints whose connection status is tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionTarget {
    /// Plain HTTP endpoint
    Http,
    /// Record backend
    Backend,
}

impl ConnectionTarget {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionTarget::Http => "HTTP",
            ConnectionTarget::Backend => "Backend",
        }
    }
}

/// Application events for service -> state communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Log message
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    /// Connection status changed
    ConnectionChanged {
        target: ConnectionTarget,
        connected: bool,
        detail: Option<String>,
    },

    /// Session established or dropped
    AuthChanged {
        user: Option<User>,
    },

    /// User-facing notification
    Notify {
        severity: Severity,
        message: String,
    },
}

impl AppEvent {
    /// Create a log event with current timestamp
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Create an info log event
    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }

    /// Create a warning log event
    pub fn warn(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Warn, message)
    }

    /// Create an error log event
    pub fn error(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Error, message)
    }

    /// Create a user-facing notification event
    pub fn notify(severity: Severity, message: impl Into<String>) -> Self {
        Self::Notify {
            severity,
            message: message.into(),
        }
    }
}
