//! SettingsState - User Settings State

use crate::domain::settings::Settings;

/// State for user settings
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    /// Current settings
    settings: Settings,
    /// Whether settings have been loaded from disk
    pub loaded: bool,
    /// Whether settings are being saved
    pub saving: bool,
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the settings value wholesale
    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.loaded = true;
    }

    pub fn set_saving(&mut self, saving: bool) {
        self.saving = saving;
    }

    // ==================== View toggles ====================

    pub fn toggle_score(&mut self) {
        self.settings.view.score = !self.settings.view.score;
    }

    pub fn toggle_log(&mut self) {
        self.settings.view.log = !self.settings.view.log;
    }

    pub fn toggle_minimap(&mut self) {
        self.settings.view.minimap = !self.settings.view.minimap;
    }

    pub fn toggle_pixel_grid(&mut self) {
        self.settings.view.pixel_grid = !self.settings.view.pixel_grid;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::DEFAULT_SETTINGS;

    #[test]
    fn starts_with_defaults_until_loaded() {
        let state = SettingsState::new();
        assert_eq!(*state.settings(), DEFAULT_SETTINGS);
        assert!(!state.loaded);
    }

    #[test]
    fn toggles_flip_individual_flags() {
        let mut state = SettingsState::new();
        state.toggle_minimap();
        state.toggle_pixel_grid();

        assert!(!state.settings().view.minimap);
        assert!(!state.settings().view.pixel_grid);
        assert!(state.settings().view.score);
        assert!(state.settings().view.log);
    }
}
