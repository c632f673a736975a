//! StoreRegistry - Bound State Modules and Client Singletons
//!
//! Holds the handles every other part of the application reads: nine
//! state modules resolved from the root
//! [`StateContainer`](crate::app::StateContainer) plus the two client
//! singletons (HTTP and backend). Slots start unset; the UI shell
//! invokes the three initializers once at startup, before anything reads
//! the registry. Reading an unset slot is an explicit error rather than
//! a latent crash.
//!
//! The registry is an explicit object passed by reference (tests build a
//! fresh one per case); it holds non-owning `Arc` handles and never
//! manages the lifecycle of the container or the clients.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::container::{ModuleSource, Shared};
use crate::error::{Error, Result};
use crate::services::{BackendClient, HttpClient};
use crate::state::auth_state::AuthState;
use crate::state::engine_state::EngineState;
use crate::state::file_state::FileState;
use crate::state::history_state::HistoryState;
use crate::state::log_state::LogState;
use crate::state::notification_state::NotificationState;
use crate::state::osmd_state::OsmdState;
use crate::state::score_state::ScoreState;
use crate::state::settings_state::SettingsState;

/// A registry slot: unset until its initializer binds a value
///
/// Rebinding silently replaces the previous value; the slot never
/// transitions back to unset.
struct Slot<T>(RwLock<Option<T>>);

impl<T: Clone> Slot<T> {
    fn new() -> Self {
        Self(RwLock::new(None))
    }

    fn bind(&self, value: T) {
        *self.0.write() = Some(value);
    }

    fn get(&self, store: &'static str) -> Result<T> {
        self.0
            .read()
            .clone()
            .ok_or(Error::StoreNotInitialised { store })
    }

    fn is_bound(&self) -> bool {
        self.0.read().is_some()
    }
}

/// Registry of bound store handles
pub struct StoreRegistry {
    auth: Slot<Shared<AuthState>>,
    file: Slot<Shared<FileState>>,
    history: Slot<Shared<HistoryState>>,
    score: Slot<Shared<ScoreState>>,
    engine: Slot<Shared<EngineState>>,
    log: Slot<Shared<LogState>>,
    notification: Slot<Shared<NotificationState>>,
    osmd: Slot<Shared<OsmdState>>,
    settings: Slot<Shared<SettingsState>>,
    http: Slot<Arc<HttpClient>>,
    backend: Slot<Arc<BackendClient>>,
}

impl Default for StoreRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreRegistry {
    /// Create a registry with every slot unset
    pub fn new() -> Self {
        Self {
            auth: Slot::new(),
            file: Slot::new(),
            history: Slot::new(),
            score: Slot::new(),
            engine: Slot::new(),
            log: Slot::new(),
            notification: Slot::new(),
            osmd: Slot::new(),
            settings: Slot::new(),
            http: Slot::new(),
            backend: Slot::new(),
        }
    }

    // ==================== Initializers ====================

    /// Bind the HTTP client singleton
    ///
    /// Calling again replaces the previous instance.
    pub fn init_http(&self, client: Arc<HttpClient>) {
        self.http.bind(client);
        tracing::debug!("HTTP client bound");
    }

    /// Bind the backend client singleton
    ///
    /// Calling again replaces the previous instance.
    pub fn init_backend(&self, client: Arc<BackendClient>) {
        self.backend.bind(client);
        tracing::debug!("Backend client bound");
    }

    /// Resolve and bind all nine state modules from the container
    ///
    /// Every module found in the container is bound, even when others are
    /// missing; the returned error names each missing module. Calling
    /// again re-resolves and rebinds.
    pub fn init_stores<C: ModuleSource>(&self, container: &C) -> Result<()> {
        let mut missing: Vec<&'static str> = Vec::new();

        match container.lookup::<AuthState>() {
            Some(module) => self.auth.bind(module),
            None => missing.push("auth"),
        }
        match container.lookup::<FileState>() {
            Some(module) => self.file.bind(module),
            None => missing.push("file"),
        }
        match container.lookup::<HistoryState>() {
            Some(module) => self.history.bind(module),
            None => missing.push("history"),
        }
        match container.lookup::<ScoreState>() {
            Some(module) => self.score.bind(module),
            None => missing.push("score"),
        }
        match container.lookup::<EngineState>() {
            Some(module) => self.engine.bind(module),
            None => missing.push("engine"),
        }
        match container.lookup::<LogState>() {
            Some(module) => self.log.bind(module),
            None => missing.push("log"),
        }
        match container.lookup::<NotificationState>() {
            Some(module) => self.notification.bind(module),
            None => missing.push("notification"),
        }
        match container.lookup::<OsmdState>() {
            Some(module) => self.osmd.bind(module),
            None => missing.push("osmd"),
        }
        match container.lookup::<SettingsState>() {
            Some(module) => self.settings.bind(module),
            None => missing.push("settings"),
        }

        if missing.is_empty() {
            tracing::info!("All state modules bound");
            Ok(())
        } else {
            Err(Error::ModuleNotRegistered {
                modules: missing.join(", "),
            })
        }
    }

    // ==================== State module accessors ====================

    pub fn auth(&self) -> Result<Shared<AuthState>> {
        self.auth.get("auth")
    }

    pub fn file(&self) -> Result<Shared<FileState>> {
        self.file.get("file")
    }

    pub fn history(&self) -> Result<Shared<HistoryState>> {
        self.history.get("history")
    }

    pub fn score(&self) -> Result<Shared<ScoreState>> {
        self.score.get("score")
    }

    pub fn engine(&self) -> Result<Shared<EngineState>> {
        self.engine.get("engine")
    }

    pub fn log(&self) -> Result<Shared<LogState>> {
        self.log.get("log")
    }

    pub fn notification(&self) -> Result<Shared<NotificationState>> {
        self.notification.get("notification")
    }

    pub fn osmd(&self) -> Result<Shared<OsmdState>> {
        self.osmd.get("osmd")
    }

    pub fn settings(&self) -> Result<Shared<SettingsState>> {
        self.settings.get("settings")
    }

    // ==================== Client accessors ====================

    pub fn http(&self) -> Result<Arc<HttpClient>> {
        self.http.get("http")
    }

    pub fn backend(&self) -> Result<Arc<BackendClient>> {
        self.backend.get("backend")
    }

    // ==================== Introspection ====================

    /// Whether every slot (state modules and clients) is bound
    pub fn is_fully_initialised(&self) -> bool {
        self.auth.is_bound()
            && self.file.is_bound()
            && self.history.is_bound()
            && self.score.is_bound()
            && self.engine.is_bound()
            && self.log.is_bound()
            && self.notification.is_bound()
            && self.osmd.is_bound()
            && self.settings.is_bound()
            && self.http.is_bound()
            && self.backend.is_bound()
    }
}

impl std::fmt::Debug for StoreRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreRegistry")
            .field("fully_initialised", &self.is_fully_initialised())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::container::{StateContainer, shared};
    use crate::domain::config::{BackendConfig, HttpConfig};

    fn full_container() -> StateContainer {
        let container = StateContainer::new();
        container.register_default::<AuthState>();
        container.register_default::<FileState>();
        container.register_default::<HistoryState>();
        container.register_default::<ScoreState>();
        container.register_default::<EngineState>();
        container.register_default::<LogState>();
        container.register_default::<NotificationState>();
        container.register_default::<OsmdState>();
        container.register_default::<SettingsState>();
        container
    }

    fn http_client() -> Arc<HttpClient> {
        let (tx, _rx) = crossbeam_channel::unbounded();
        Arc::new(HttpClient::new(&HttpConfig::default(), tx).expect("client"))
    }

    fn backend_client() -> Arc<BackendClient> {
        let (tx, _rx) = crossbeam_channel::unbounded();
        Arc::new(BackendClient::new(&BackendConfig::default(), tx).expect("client"))
    }

    #[test]
    fn every_slot_errors_before_initialisation() {
        let registry = StoreRegistry::new();

        assert!(registry.auth().is_err());
        assert!(registry.file().is_err());
        assert!(registry.history().is_err());
        assert!(registry.score().is_err());
        assert!(registry.engine().is_err());
        assert!(registry.log().is_err());
        assert!(registry.notification().is_err());
        assert!(registry.osmd().is_err());
        assert!(registry.settings().is_err());
        assert!(registry.http().is_err());
        assert!(registry.backend().is_err());
        assert!(!registry.is_fully_initialised());
    }

    #[test]
    fn init_stores_binds_the_container_instances() {
        let registry = StoreRegistry::new();
        let container = full_container();
        registry.init_stores(&container).expect("init");

        // The registry hands back the very instance the container resolves
        let from_container = container.lookup::<ScoreState>().expect("registered");
        let from_registry = registry.score().expect("bound");
        assert!(Arc::ptr_eq(&from_container, &from_registry));
    }

    #[test]
    fn init_http_is_identity_preserving() {
        let registry = StoreRegistry::new();
        let client = http_client();
        registry.init_http(client.clone());

        let bound = registry.http().expect("bound");
        assert!(Arc::ptr_eq(&client, &bound));
    }

    #[test]
    fn rebinding_replaces_the_client() {
        let registry = StoreRegistry::new();
        let first = backend_client();
        let second = backend_client();

        registry.init_backend(first.clone());
        registry.init_backend(second.clone());

        let bound = registry.backend().expect("bound");
        assert!(Arc::ptr_eq(&second, &bound));
        assert!(!Arc::ptr_eq(&first, &bound));
    }

    #[test]
    fn partial_container_binds_what_it_has_and_names_the_rest() {
        let registry = StoreRegistry::new();

        let container = StateContainer::new();
        let score = shared(ScoreState::new());
        container.register(score.clone());

        let err = registry.init_stores(&container).expect_err("missing modules");
        match err {
            Error::ModuleNotRegistered { modules } => {
                for name in [
                    "auth",
                    "file",
                    "history",
                    "engine",
                    "log",
                    "notification",
                    "osmd",
                    "settings",
                ] {
                    assert!(modules.contains(name), "missing list lacks {name}");
                }
                assert!(!modules.contains("score"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // The module that was present is bound...
        let bound = registry.score().expect("score bound");
        assert!(Arc::ptr_eq(&score, &bound));
        // ...while the absent ones stay unset
        assert!(registry.auth().is_err());
        assert!(registry.osmd().is_err());
    }

    #[test]
    fn full_initialisation_is_observable() {
        let registry = StoreRegistry::new();
        registry.init_stores(&full_container()).expect("init");
        registry.init_http(http_client());
        registry.init_backend(backend_client());

        assert!(registry.is_fully_initialised());
    }
}
