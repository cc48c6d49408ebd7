//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - one JSON file per slot in the data directory
//! - `memory` - in-process store for tests and ephemeral runs
//! - `random` - OS entropy for question draws
//! - `exchange/` - CSV/JSON export and bulk import

pub mod exchange;
pub mod file;
pub mod memory;
pub mod random;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use random::OsRandom;
