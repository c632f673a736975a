//! Settings - User View Preferences

use serde::{Deserialize, Serialize};

/// View panel toggles
///
/// Each flag is independently togglable; there is no cross-field constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSettings {
    /// Show the score editing surface
    pub score: bool,
    /// Show the log panel
    pub log: bool,
    /// Show the document minimap
    pub minimap: bool,
    /// Show the pixel grid overlay
    pub pixel_grid: bool,
}

/// User settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// View panel toggles
    pub view: ViewSettings,
}

/// The default settings value: every view panel enabled.
///
/// Consumers copy this value (it is `Copy`); the constant itself is never
/// mutated.
pub const DEFAULT_SETTINGS: Settings = Settings {
    view: ViewSettings {
        score: true,
        log: true,
        minimap: true,
        pixel_grid: true,
    },
};

impl Default for Settings {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        DEFAULT_SETTINGS.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_all_view_panels() {
        let settings = DEFAULT_SETTINGS;
        assert!(settings.view.score);
        assert!(settings.view.log);
        assert!(settings.view.minimap);
        assert!(settings.view.pixel_grid);
        assert_eq!(Settings::default(), DEFAULT_SETTINGS);
    }

    #[test]
    fn copies_are_independent_of_the_default() {
        let mut mine = DEFAULT_SETTINGS;
        mine.view.minimap = false;
        mine.view.pixel_grid = false;

        assert!(DEFAULT_SETTINGS.view.minimap);
        assert!(DEFAULT_SETTINGS.view.pixel_grid);
        assert_ne!(mine, DEFAULT_SETTINGS);
    }

    #[test]
    fn serializes_view_flags_in_camel_case() {
        let json = serde_json::to_string(&DEFAULT_SETTINGS).expect("serialize");
        assert!(json.contains("\"pixelGrid\":true"));

        let parsed: Settings =
            serde_json::from_str(r#"{"view":{"score":true,"log":false,"minimap":true,"pixelGrid":false}}"#)
                .expect("deserialize");
        assert!(!parsed.view.log);
        assert!(!parsed.view.pixel_grid);
        assert!(parsed.view.score);
    }
}
