//! HTTP Client Service
//!
//! Thin wrapper around reqwest for plain HTTP calls outside the record
//! backend (update checks, asset downloads). The instance is constructed
//! once at startup and bound into the store registry.

use std::time::Duration;

use crossbeam_channel::Sender;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::config::HttpConfig;
use crate::error::Result;
use crate::eventing::app_event::{AppEvent, ConnectionTarget};

/// HTTP client bound into the store registry
pub struct HttpClient {
    config: HttpConfig,
    client: reqwest::Client,
    tx: Sender<AppEvent>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &HttpConfig, tx: Sender<AppEvent>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            config: config.clone(),
            client,
            tx,
        })
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Resolve a request path against the base URL
    ///
    /// Absolute URLs pass through untouched.
    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// GET a JSON resource
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    /// POST a JSON body and parse a JSON response
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    /// Probe the base URL and report the connection state
    pub async fn ping(&self) -> bool {
        let connected = match self.client.get(self.url("/")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("HTTP ping failed: {e}");
                false
            }
        };
        let _ = self.tx.send(AppEvent::ConnectionChanged {
            target: ConnectionTarget::Http,
            connected,
            detail: Some(self.config.base_url.clone()),
        });
        connected
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .finish()
    }
}
