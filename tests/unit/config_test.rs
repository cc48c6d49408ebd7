//! Tests for configuration and data directory resolution

use std::fs;
use std::path::{Path, PathBuf};

use conjuga::config::{Config, DEFAULT_MIN_NAME_LENGTH};
use conjuga::core::models::Tense;
use conjuga::core::services::DEFAULT_RECENT_WINDOW;
use conjuga::paths::{self, HOME_ENV};
use serial_test::serial;
use tempfile::TempDir;

/// Run `f` with `CONJUGA_HOME` set to `value` (or unset), then restore it
fn with_home<T>(value: Option<&Path>, f: impl FnOnce() -> T) -> T {
    let saved = std::env::var_os(HOME_ENV);
    // SAFETY: callers are #[serial(env)], so no other test thread touches the environment
    unsafe {
        match value {
            Some(v) => std::env::set_var(HOME_ENV, v),
            None => std::env::remove_var(HOME_ENV),
        }
    }
    let result = f();
    // SAFETY: as above
    unsafe {
        match saved {
            Some(v) => std::env::set_var(HOME_ENV, v),
            None => std::env::remove_var(HOME_ENV),
        }
    }
    result
}

// =============================================================================
// BASIC CONFIG TESTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.default_tense, Tense::Present);
    assert!(config.default_tenses.is_empty());
    assert_eq!(config.recent_window, DEFAULT_RECENT_WINDOW);
    assert_eq!(config.min_name_length, DEFAULT_MIN_NAME_LENGTH);
    assert!(config.data_dir.is_none());
}

#[test]
fn test_config_partial_file_keeps_other_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "default_tense = \"preterite\"\nrecent_window = 10\n").unwrap();

    let config = Config::load_from(&path);
    assert_eq!(config.default_tense, Tense::Preterite);
    assert_eq!(config.recent_window, 10);
    assert_eq!(config.min_name_length, DEFAULT_MIN_NAME_LENGTH);
}

#[test]
fn test_config_malformed_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "default_tense = [").unwrap();
    assert_eq!(Config::load_from(&path), Config::default());
}

#[test]
fn test_config_missing_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    assert_eq!(Config::load_from(&temp.path().join("nope.toml")), Config::default());
}

#[test]
fn test_config_save_and_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/config.toml");
    let config = Config {
        default_tenses: vec![Tense::Future, Tense::Conditional],
        data_dir: Some(PathBuf::from("/srv/conjuga")),
        ..Config::default()
    };
    config.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path), config);
}

#[test]
fn test_zero_window_means_default() {
    let config = Config {
        recent_window: 0,
        ..Config::default()
    };
    assert_eq!(config.window(), DEFAULT_RECENT_WINDOW);
}

// =============================================================================
// DATA DIRECTORY RESOLUTION
// =============================================================================

#[test]
#[serial(env)]
fn test_flag_beats_everything() {
    let config = Config {
        data_dir: Some(PathBuf::from("/from/config")),
        ..Config::default()
    };
    let dir = with_home(Some(Path::new("/from/env")), || {
        paths::data_dir(Some(Path::new("/from/flag")), &config)
    });
    assert_eq!(dir, PathBuf::from("/from/flag"));
}

#[test]
#[serial(env)]
fn test_home_env_beats_config() {
    let config = Config {
        data_dir: Some(PathBuf::from("/from/config")),
        ..Config::default()
    };
    let dir = with_home(Some(Path::new("/from/env")), || paths::data_dir(None, &config));
    assert_eq!(dir, PathBuf::from("/from/env"));
}

#[test]
#[serial(env)]
fn test_config_data_dir_used_without_env() {
    let config = Config {
        data_dir: Some(PathBuf::from("/from/config")),
        ..Config::default()
    };
    let dir = with_home(None, || paths::data_dir(None, &config));
    assert_eq!(dir, PathBuf::from("/from/config"));
}

#[test]
#[serial(env)]
fn test_home_env_holds_config_file() {
    let temp = TempDir::new().unwrap();
    let path = with_home(Some(temp.path()), paths::global_config);
    assert_eq!(path, temp.path().join("config.toml"));
}
