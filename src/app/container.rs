//! StateContainer - Root State Container
//!
//! Thread-safe, type-keyed holder of the application's state-module
//! instances. The UI shell constructs one at startup, registers every
//! state module, and hands it to the store registry, which resolves the
//! modules it exposes.

use std::any::{Any, TypeId, type_name};
use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;

/// Shared handle to a state module
pub type Shared<T> = Arc<RwLock<T>>;

/// Wrap a state-module instance into a shared handle
pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(RwLock::new(value))
}

/// Type-keyed lookup of state-module instances
///
/// The store registry depends on this interface only; how instances get
/// into the source is the host's concern.
pub trait ModuleSource {
    /// Resolve the registered instance of `T`, if any
    fn lookup<T: Send + Sync + 'static>(&self) -> Option<Shared<T>>;
}

/// Root container for state-module instances
#[derive(Default)]
pub struct StateContainer {
    modules: RwLock<AHashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl StateContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module instance
    ///
    /// A later registration of the same type replaces the earlier one.
    pub fn register<T: Send + Sync + 'static>(&self, module: Shared<T>) {
        self.modules.write().insert(TypeId::of::<T>(), module);
        tracing::debug!(module = type_name::<T>(), "State module registered");
    }

    /// Register a default-constructed module and return its handle
    pub fn register_default<T: Default + Send + Sync + 'static>(&self) -> Shared<T> {
        let handle = shared(T::default());
        self.register(handle.clone());
        handle
    }

    /// Whether an instance of `T` is registered
    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        self.modules.read().contains_key(&TypeId::of::<T>())
    }

    /// Number of registered modules
    pub fn len(&self) -> usize {
        self.modules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.read().is_empty()
    }
}

impl ModuleSource for StateContainer {
    fn lookup<T: Send + Sync + 'static>(&self) -> Option<Shared<T>> {
        let erased = self.modules.read().get(&TypeId::of::<T>()).cloned()?;
        erased.downcast::<RwLock<T>>().ok()
    }
}

impl std::fmt::Debug for StateContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateContainer")
            .field("modules", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::score_state::ScoreState;
    use crate::state::settings_state::SettingsState;

    #[test]
    fn lookup_returns_the_registered_handle() {
        let container = StateContainer::new();
        let score = shared(ScoreState::new());
        container.register(score.clone());

        let resolved = container.lookup::<ScoreState>().expect("registered");
        assert!(Arc::ptr_eq(&score, &resolved));
    }

    #[test]
    fn lookup_of_unregistered_type_is_none() {
        let container = StateContainer::new();
        container.register(shared(ScoreState::new()));

        assert!(container.lookup::<SettingsState>().is_none());
        assert!(container.contains::<ScoreState>());
        assert!(!container.contains::<SettingsState>());
    }

    #[test]
    fn re_registration_replaces_the_instance() {
        let container = StateContainer::new();
        let first = shared(ScoreState::new());
        let second = shared(ScoreState::new());

        container.register(first.clone());
        container.register(second.clone());
        assert_eq!(container.len(), 1);

        let resolved = container.lookup::<ScoreState>().expect("registered");
        assert!(Arc::ptr_eq(&second, &resolved));
        assert!(!Arc::ptr_eq(&first, &resolved));
    }
}
