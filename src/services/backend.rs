//! Backend Client
//!
//! Record-oriented client for the Clef backend service. Speaks plain JSON
//! over HTTP: password authentication against an auth collection, and CRUD
//! on record collections. The instance is constructed once at startup and
//! bound into the store registry; the auth token lives inside the client
//! so every consumer sees the same session.

use std::time::Duration;

use crossbeam_channel::Sender;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::domain::config::BackendConfig;
use crate::domain::user::User;
use crate::error::{Error, Result};
use crate::eventing::app_event::{AppEvent, ConnectionTarget};

/// Response of a successful password authentication
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent requests
    pub token: String,
    /// The authenticated user record
    pub record: User,
}

/// One page of a record listing
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPage<T> {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub items: Vec<T>,
}

/// Client for the record backend
pub struct BackendClient {
    config: BackendConfig,
    http: reqwest::Client,
    /// Session token; `None` while signed out
    token: RwLock<Option<String>>,
    tx: Sender<AppEvent>,
}

impl BackendClient {
    /// Create a new backend client from configuration
    pub fn new(config: &BackendConfig, tx: Sender<AppEvent>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            config: config.clone(),
            http,
            token: RwLock::new(None),
            tx,
        })
    }

    /// The configured backend base URL
    pub fn base_url(&self) -> &str {
        &self.config.url
    }

    /// Current session token, if authenticated
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Whether a session token is held
    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Adopt a previously persisted session token
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    /// Drop the session token and notify listeners
    pub fn sign_out(&self) {
        *self.token.write() = None;
        let _ = self.tx.send(AppEvent::AuthChanged { user: None });
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn collection_url(&self, collection: &str) -> String {
        self.url(&format!("api/collections/{collection}/records"))
    }

    /// Attach the session token and a correlation ID to a request
    fn decorate(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header("X-Request-Id", uuid::Uuid::new_v4().to_string());
        match self.token() {
            Some(token) => request.header("Authorization", token),
            None => request,
        }
    }

    /// Send a request and parse the JSON response
    async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = self.decorate(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Backend {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json::<T>().await?)
    }

    // ==================== Auth ====================

    /// Authenticate against the configured auth collection
    ///
    /// On success the token is retained for subsequent requests and an
    /// `AuthChanged` event is emitted.
    pub async fn auth_with_password(&self, identity: &str, password: &str) -> Result<AuthResponse> {
        let path = format!(
            "api/collections/{}/auth-with-password",
            self.config.auth_collection
        );
        let body = serde_json::json!({
            "identity": identity,
            "password": password,
        });

        let auth: AuthResponse = self
            .execute(self.http.post(self.url(&path)).json(&body))
            .await?;

        *self.token.write() = Some(auth.token.clone());
        tracing::info!(user = %auth.record.email, "Authenticated with backend");
        let _ = self.tx.send(AppEvent::AuthChanged {
            user: Some(auth.record.clone()),
        });

        Ok(auth)
    }

    // ==================== Records ====================

    /// List one page of records from a collection
    pub async fn list_records<T: DeserializeOwned>(
        &self,
        collection: &str,
        page: u32,
        per_page: u32,
    ) -> Result<RecordPage<T>> {
        let url = format!(
            "{}?page={}&perPage={}",
            self.collection_url(collection),
            page,
            per_page
        );
        self.execute(self.http.get(url)).await
    }

    /// Fetch a single record by ID
    pub async fn get_record<T: DeserializeOwned>(&self, collection: &str, id: &str) -> Result<T> {
        let url = format!("{}/{}", self.collection_url(collection), id);
        self.execute(self.http.get(url)).await
    }

    /// Create a record
    pub async fn create_record<B: Serialize, T: DeserializeOwned>(
        &self,
        collection: &str,
        body: &B,
    ) -> Result<T> {
        self.execute(self.http.post(self.collection_url(collection)).json(body))
            .await
    }

    /// Update a record by ID
    pub async fn update_record<B: Serialize, T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}/{}", self.collection_url(collection), id);
        self.execute(self.http.patch(url).json(body)).await
    }

    /// Delete a record by ID
    pub async fn delete_record(&self, collection: &str, id: &str) -> Result<()> {
        let url = format!("{}/{}", self.collection_url(collection), id);
        let response = self.decorate(self.http.delete(url)).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Backend {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    // ==================== Health ====================

    /// Probe the backend health endpoint and report the connection state
    pub async fn health(&self) -> bool {
        let connected = match self.http.get(self.url("api/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("Backend health check failed: {e}");
                false
            }
        };
        let _ = self.tx.send(AppEvent::ConnectionChanged {
            target: ConnectionTarget::Backend,
            connected,
            detail: Some(self.config.url.clone()),
        });
        connected
    }
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("url", &self.config.url)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> BackendClient {
        let (tx, _rx) = crossbeam_channel::unbounded();
        BackendClient::new(&BackendConfig::default(), tx).expect("client")
    }

    #[test]
    fn test_token_lifecycle() {
        let client = test_client();
        assert!(!client.is_authenticated());

        client.set_token("tok_123");
        assert!(client.is_authenticated());
        assert_eq!(client.token().as_deref(), Some("tok_123"));

        client.sign_out();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_sign_out_emits_auth_changed() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let client = BackendClient::new(&BackendConfig::default(), tx).expect("client");
        client.set_token("tok_123");
        client.sign_out();

        match rx.try_recv() {
            Ok(AppEvent::AuthChanged { user: None }) => {}
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_collection_url() {
        let client = test_client();
        assert_eq!(
            client.collection_url("scores"),
            "http://127.0.0.1:8090/api/collections/scores/records"
        );
    }

    #[test]
    fn test_record_page_deserialization() {
        let json = r#"{
            "page": 1,
            "perPage": 30,
            "totalItems": 2,
            "items": [
                {"id": "rec_1", "email": "a@example.com"},
                {"id": "rec_2", "email": "b@example.com"}
            ]
        }"#;
        let page: RecordPage<User> = serde_json::from_str(json).expect("parse");
        assert_eq!(page.per_page, 30);
        assert_eq!(page.total_items, 2);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].id, "rec_2");
    }
}
