//! Game settings and preferences
//!
//! Persisted separately from any session state, as a JSON file next to the
//! binary. Missing or malformed files fall back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all audio
    pub muted: bool,

    // === HUD ===
    /// Show shield percentage alongside lives
    pub show_shield: bool,
    /// Show tick-rate counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            show_shield: true,
            show_fps: false,
        }
    }
}

impl Settings {
    pub const DEFAULT_PATH: &'static str = "gridfire_settings.json";

    /// Load settings, defaulting when the file is absent or unreadable
    pub fn load(path: impl AsRef<Path>) -> Self {
        match fs::read_to_string(path.as_ref()) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.as_ref().display());
                    settings
                }
                Err(err) => {
                    log::warn!("settings file unreadable ({err}); using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file; using defaults");
                Self::default()
            }
        }
    }

    /// Save settings; failures are logged and ignored
    pub fn save(&self, path: impl AsRef<Path>) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path.as_ref(), json) {
                    log::warn!("failed to save settings: {err}");
                }
            }
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let settings = Settings::load("definitely/not/a/real/path.json");
        assert_eq!(settings.master_volume, 0.8);
        assert!(!settings.muted);
    }

    #[test]
    fn roundtrip_through_disk() {
        let dir = std::env::temp_dir().join("gridfire_settings_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");

        let mut settings = Settings::default();
        settings.muted = true;
        settings.sfx_volume = 0.25;
        settings.save(&path);

        let loaded = Settings::load(&path);
        assert!(loaded.muted);
        assert_eq!(loaded.sfx_volume, 0.25);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = std::env::temp_dir().join("gridfire_settings_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("garbage.json");
        fs::write(&path, "{not json").unwrap();

        let settings = Settings::load(&path);
        assert_eq!(settings.sfx_volume, 1.0);

        let _ = fs::remove_file(path);
    }
}
