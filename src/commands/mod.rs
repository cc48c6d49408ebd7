//! Command implementations

mod check;
mod config;
mod conjugate;
mod export;
mod import;
mod practice;
mod progress;
mod student;
mod verbs;

use std::path::PathBuf;

use log::debug;

use conjuga::adapters::{JsonFileStore, MemoryStore};
use conjuga::config::Config;
use conjuga::core::models::student_id;
use conjuga::core::ports::KeyValueStore;
use conjuga::core::services::Workbook;
use conjuga::output::OutputMode;
use conjuga::paths;

pub use check::check;
pub use config::config;
pub use conjugate::conjugate;
pub use export::export;
pub use import::import;
pub use practice::practice;
pub use progress::{progress, reset_progress};
pub use student::student;
pub use verbs::verbs;

/// A workbook over whichever store this run uses
pub type Book = Workbook<Box<dyn KeyValueStore>>;

/// Settings shared by every command
#[derive(Debug)]
pub struct Context {
    data_dir_flag: Option<PathBuf>,
    ephemeral: bool,
    /// Output mode
    pub mode: OutputMode,
    /// Loaded configuration
    pub config: Config,
}

impl Context {
    /// Load the config and remember the global flags
    pub fn new(data_dir_flag: Option<PathBuf>, ephemeral: bool, mode: OutputMode) -> Self {
        Self {
            data_dir_flag,
            ephemeral,
            mode,
            config: Config::load(),
        }
    }

    /// Where the data slots live
    pub fn data_dir(&self) -> PathBuf {
        paths::data_dir(self.data_dir_flag.as_deref(), &self.config)
    }

    /// Open the workbook for this run
    pub fn open(&self) -> Book {
        let store: Box<dyn KeyValueStore> = if self.ephemeral {
            debug!("Using in-memory store");
            Box::new(MemoryStore::new())
        } else {
            let dir = self.data_dir();
            debug!("Using data dir {}", dir.display());
            Box::new(JsonFileStore::new(dir))
        };
        Workbook::open(store, &self.config)
    }
}

/// The named student, or the logged-in one, as (identity, display name)
pub fn resolve_student(book: &Book, name: Option<&str>) -> conjuga::Result<(String, String)> {
    match name {
        Some(name) => Ok(book.student(name).map_or_else(
            || (student_id(name), name.trim().to_string()),
            |s| (s.id.clone(), s.name.clone()),
        )),
        None => book
            .active_student()
            .map(|s| (s.id.clone(), s.name.clone()))
            .ok_or(conjuga::Error::NoActiveStudent),
    }
}
