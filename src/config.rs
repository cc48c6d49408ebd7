//! Global configuration management
//!
//! Provides persistent storage for user preferences.
//! Config is stored at `~/.config/conjuga/config.toml` (XDG standard), or in
//! `$CONJUGA_HOME` when that is set. Every field is optional in the file.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::models::Tense;
use crate::core::services::DEFAULT_RECENT_WINDOW;
use crate::paths;

/// Default minimum login name length (characters, after trimming)
pub const DEFAULT_MIN_NAME_LENGTH: usize = 2;

/// User preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tense restored when the practice selection is emptied
    pub default_tense: Tense,

    /// Tenses selected when a session starts (empty = just the default)
    pub default_tenses: Vec<Tense>,

    /// How many recent attempts the tense breakdown looks at
    pub recent_window: usize,

    /// Shortest accepted login name
    pub min_name_length: usize,

    /// Where the data slots live (overridden by `--data-dir` / `CONJUGA_HOME`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_tense: Tense::Present,
            default_tenses: Vec::new(),
            recent_window: DEFAULT_RECENT_WINDOW,
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
            data_dir: None,
        }
    }
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or defaults if missing or malformed
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific file, or defaults if missing or malformed
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match fs::read_to_string(path).map_err(anyhow::Error::from).and_then(|content| {
            toml::from_str::<Self>(&content).map_err(anyhow::Error::from)
        }) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                config
            },
            Err(e) => {
                warn!("Ignoring malformed config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The breakdown window, never zero
    #[must_use]
    pub const fn window(&self) -> usize {
        if self.recent_window == 0 { DEFAULT_RECENT_WINDOW } else { self.recent_window }
    }
}
