//! Game settings
//!
//! Read once at startup from an optional JSON file in the working directory.
//! Missing or unreadable files fall back to defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::persistence::DEFAULT_DATA_FILE;

/// Settings file looked up by `Settings::load`
pub const SETTINGS_FILE: &str = "lane-dodger.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Session log location
    pub data_file: PathBuf,
    /// Wait for a key before the first tick of a round
    pub start_prompt: bool,
    /// Fixed RNG seed; a fresh random seed per round when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            start_prompt: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Load `SETTINGS_FILE` from the working directory
    pub fn load() -> Self {
        Self::load_from(SETTINGS_FILE)
    }

    /// Load from `path`, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) if e.is_not_found() => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
