//! Persisted user preferences (`~/.ptree/config.json`)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PtreeError, Result};
use crate::i18n::Language;

const SETTINGS_DIR: &str = ".ptree";
const SETTINGS_FILE: &str = "config.json";

/// Colour and language defaults kept between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub use_color: bool,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_color: true,
            language: Language::Zh,
        }
    }
}

impl Settings {
    /// Read each field on its own; a missing or mistyped field keeps its default.
    pub fn from_json(value: &Value) -> Self {
        let defaults = Self::default();
        Self {
            use_color: value
                .get("use_color")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.use_color),
            language: value
                .get("language")
                .and_then(Value::as_str)
                .and_then(Language::from_code)
                .unwrap_or(defaults.language),
        }
    }
}

/// Location of the settings file on disk.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.ptree/config.json`
    pub fn default_location() -> Option<Self> {
        dirs::home_dir().map(|home| Self::new(home.join(SETTINGS_DIR).join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults. Never fails.
    pub fn load(&self) -> Settings {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Settings::default(),
            Err(e) => {
                log::warn!(
                    "failed to read config file {}: {}, using defaults",
                    self.path.display(),
                    e
                );
                return Settings::default();
            }
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Settings::from_json(&value),
            Err(e) => {
                log::warn!(
                    "failed to parse config file {}: {}, using defaults",
                    self.path.display(),
                    e
                );
                Settings::default()
            }
        }
    }

    /// Write settings as pretty JSON, creating the directory if needed.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| PtreeError::Settings {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json).map_err(|source| PtreeError::Settings {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("saved settings to {}", self.path.display());
        Ok(())
    }
}
