//! Application Constants
//!
//! Centralized constants for buffer capacities, limits, and file names.

/// Bounded cache capacities
pub const GLOBAL_LOG_CAPACITY: usize = 2000;
pub const NOTIFICATION_CAPACITY: usize = 50;
pub const RECENT_FILES_CAPACITY: usize = 10;
pub const UNDO_DEPTH: usize = 200;

/// Playback engine limits
pub const MIN_BPM: u16 = 20;
pub const MAX_BPM: u16 = 400;
pub const DEFAULT_BPM: u16 = 120;

/// Notation display zoom limits
pub const MIN_ZOOM: f32 = 0.25;
pub const MAX_ZOOM: f32 = 4.0;
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Persisted file names (under the platform config dir)
pub const CONFIG_FILE: &str = "clef-client.toml";
pub const SETTINGS_FILE: &str = "settings.json";
pub const SESSION_FILE: &str = "session.json";

/// HTTP timeouts
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const BACKEND_TIMEOUT_SECS: u64 = 30;
