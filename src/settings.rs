//! Session settings and preferences
//!
//! A small JSON preferences file on disk. Only knobs live here; game state
//! itself is never persisted.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Tunables for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Fixed session seed for reproducible runs; random when absent
    pub seed: Option<u64>,
    /// Frames the demo binary runs before exiting
    pub demo_frames: u64,
    /// Demo tick rate in frames per second
    pub tick_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            demo_frames: 1800,
            tick_rate: 60,
        }
    }
}

impl Settings {
    /// Settings file, looked up in the working directory
    const FILE: &'static str = "lane-hopper.json";

    /// Load from disk, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE))
    }

    fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save to disk; failures are logged, never fatal
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(Self::FILE, json) {
                    log::warn!("Could not save settings: {}", err);
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Could not serialize settings: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_roundtrip() {
        let settings = Settings {
            seed: Some(7),
            demo_frames: 120,
            tick_rate: 30,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load_from(Path::new("does-not-exist.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("lane-hopper-settings-test.json");
        fs::write(&path, "{not json").unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings, Settings::default());
        let _ = fs::remove_file(&path);
    }
}
