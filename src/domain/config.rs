//! Config - Application Configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::{BACKEND_TIMEOUT_SECS, CONFIG_FILE, GLOBAL_LOG_CAPACITY, HTTP_TIMEOUT_SECS};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

fn config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(CONFIG_FILE);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Backend service configuration
    #[serde(default)]
    pub backend: BackendConfig,
    /// Plain HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Log buffer configuration
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from the config file
    ///
    /// An empty or absent file yields the defaults.
    pub fn try_load() -> Result<Self> {
        let path = config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;

        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;

        Ok(config)
    }

    /// Save configuration to the config file
    pub fn save(&self) -> Result<()> {
        let path = config_path()?;
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }
}

/// Backend service connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend base URL
    pub url: String,
    /// Collection used for password authentication
    pub auth_collection: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8090".to_string(),
            auth_collection: "users".to_string(),
            timeout_secs: BACKEND_TIMEOUT_SECS,
        }
    }
}

/// Plain HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Base URL prefixed to relative request paths
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8090".to_string(),
            timeout_secs: HTTP_TIMEOUT_SECS,
        }
    }
}

/// Log buffer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Ring buffer capacity for in-app log entries
    pub capacity: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            capacity: GLOBAL_LOG_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip_preserves_defaults() {
        let config = AppConfig::default();
        let text = toml::to_string(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&text).expect("parse");

        assert_eq!(parsed.backend.url, config.backend.url);
        assert_eq!(parsed.http.timeout_secs, config.http.timeout_secs);
        assert_eq!(parsed.log.capacity, config.log.capacity);
    }

    #[test]
    fn partial_config_falls_back_to_section_defaults() {
        let parsed: AppConfig = toml::from_str(
            r#"
            [backend]
            url = "https://clef.example.com"
            auth_collection = "users"
            timeout_secs = 5
            "#,
        )
        .expect("parse");

        assert_eq!(parsed.backend.url, "https://clef.example.com");
        assert_eq!(parsed.backend.timeout_secs, 5);
        // Missing sections take their defaults
        assert_eq!(parsed.log.capacity, GLOBAL_LOG_CAPACITY);
    }
}
