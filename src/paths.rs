//! Centralized path definitions for conjuga
//!
//! This module provides a single source of truth for all filesystem paths used by conjuga.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/conjuga/
//! └── config.toml               # User preferences
//!
//! ~/.local/share/conjuga/       # Data directory (one JSON file per slot)
//! ├── verb_bank.json
//! ├── students.json
//! ├── attempts.json
//! └── active_student.json
//! ```
//!
//! Setting `CONJUGA_HOME` puts both the config file and the data slots in
//! that one directory.

use std::path::{Path, PathBuf};

use crate::config::Config;

/// Environment variable overriding the config and data locations
pub const HOME_ENV: &str = "CONJUGA_HOME";

/// Application directory name under the platform config/data dirs
const APP_DIR: &str = "conjuga";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Last-resort directory when the platform dirs are unknown
const LOCAL_DIR: &str = ".conjuga";

/// `CONJUGA_HOME`, if set to something non-empty
fn home_override() -> Option<PathBuf> {
    std::env::var_os(HOME_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Get the directory holding `config.toml`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    home_override()
        .or_else(|| dirs::config_dir().map(|d| d.join(APP_DIR)))
        .unwrap_or_else(|| PathBuf::from(LOCAL_DIR))
}

/// Get path to `config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}

/// Resolve the data directory.
///
/// Precedence: `--data-dir` flag → `CONJUGA_HOME` → config `data_dir` →
/// platform data dir → `./.conjuga`.
#[must_use]
pub fn data_dir(flag: Option<&Path>, config: &Config) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(home_override)
        .or_else(|| config.data_dir.clone())
        .or_else(|| dirs::data_dir().map(|d| d.join(APP_DIR)))
        .unwrap_or_else(|| PathBuf::from(LOCAL_DIR))
}
