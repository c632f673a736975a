//! Bootstrap - Application Startup Wiring
//!
//! The startup contract: build the root container with every state
//! module, construct the two client singletons, then bind everything into
//! a fresh store registry. The UI shell calls [`bootstrap`] once, before
//! anything reads the registry.

use std::sync::Arc;

use crossbeam_channel::Receiver;

use crate::app::container::{StateContainer, shared};
use crate::app::stores::StoreRegistry;
use crate::constants::{SESSION_FILE, SETTINGS_FILE};
use crate::domain::config::AppConfig;
use crate::domain::settings::Settings;
use crate::error::{Error, Result};
use crate::eventing::app_event::AppEvent;
use crate::services::{BackendClient, HttpClient};
use crate::state::auth_state::{AuthState, PersistedSession};
use crate::state::engine_state::EngineState;
use crate::state::file_state::FileState;
use crate::state::history_state::HistoryState;
use crate::state::log_state::LogState;
use crate::state::notification_state::NotificationState;
use crate::state::osmd_state::OsmdState;
use crate::state::score_state::ScoreState;
use crate::state::settings_state::SettingsState;
use crate::utils::config_store;

/// Initialize tracing for logging
///
/// Call once from the shell's `main` before anything else.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();
}

/// Build a root container populated with a default instance of every
/// state module
pub fn build_state_container(config: &AppConfig) -> StateContainer {
    let container = StateContainer::new();
    container.register_default::<AuthState>();
    container.register_default::<FileState>();
    container.register_default::<HistoryState>();
    container.register_default::<ScoreState>();
    container.register_default::<EngineState>();
    container.register(shared(LogState::new(config.log.capacity)));
    container.register_default::<NotificationState>();
    container.register_default::<OsmdState>();
    container.register_default::<SettingsState>();
    container
}

/// Wire the full application core
///
/// Returns the initialised registry and the receiver for service events;
/// the shell drains the receiver on its own loop.
pub fn bootstrap(config: &AppConfig) -> Result<(StoreRegistry, Receiver<AppEvent>)> {
    let (event_tx, event_rx) = crossbeam_channel::unbounded::<AppEvent>();

    let container = build_state_container(config);

    let registry = StoreRegistry::new();
    registry.init_stores(&container)?;
    registry.init_http(Arc::new(HttpClient::new(&config.http, event_tx.clone())?));
    registry.init_backend(Arc::new(BackendClient::new(&config.backend, event_tx.clone())?));

    restore_settings(&registry)?;
    restore_session(&registry)?;

    let _ = event_tx.send(AppEvent::info("Application core initialised"));
    tracing::info!("Store registry initialised");

    Ok((registry, event_rx))
}

/// Load persisted user settings into the settings store
///
/// A missing file yields the defaults; a corrupt file is logged and
/// ignored so a bad write never blocks startup.
fn restore_settings(registry: &StoreRegistry) -> Result<()> {
    match config_store::load_config::<Settings>(SETTINGS_FILE) {
        Ok(settings) => {
            registry.settings()?.write().update_settings(settings);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load settings, using defaults");
        }
    }
    Ok(())
}

/// Restore a persisted session into the auth store and backend client
fn restore_session(registry: &StoreRegistry) -> Result<()> {
    match config_store::load_config::<PersistedSession>(SESSION_FILE) {
        Ok(persisted) => {
            let auth = AuthState::from_persisted(persisted);
            if let Some(token) = auth.token() {
                registry.backend()?.set_token(token);
                tracing::info!("Restored persisted session");
            }
            *registry.auth()?.write() = auth;
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load session, starting signed out");
        }
    }
    Ok(())
}

/// Persist the current user settings to disk
pub fn save_settings(registry: &StoreRegistry) -> Result<()> {
    let settings = *registry.settings()?.read().settings();
    config_store::save_config(SETTINGS_FILE, &settings).map_err(|e| Error::Invalid {
        message: format!("Failed to save settings: {e}"),
    })
}

/// Persist the current session (token encrypted) to disk
pub fn save_session(registry: &StoreRegistry) -> Result<()> {
    let persisted = registry.auth()?.read().to_persisted()?;
    config_store::save_config(SESSION_FILE, &persisted).map_err(|e| Error::Invalid {
        message: format!("Failed to save session: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_fully_initialises_the_registry() {
        let config = AppConfig::default();
        let (registry, events) = bootstrap(&config).expect("bootstrap");

        assert!(registry.is_fully_initialised());

        // The init log event is on the channel
        let saw_init = events
            .try_iter()
            .any(|e| matches!(e, AppEvent::Log { message, .. } if message.contains("initialised")));
        assert!(saw_init);
    }

    #[test]
    fn container_holds_all_nine_modules() {
        let container = build_state_container(&AppConfig::default());
        assert_eq!(container.len(), 9);
    }
}
