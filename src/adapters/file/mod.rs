//! File-based slot storage
//!
//! Implements `KeyValueStore` using JSON files.

mod store;

pub use store::JsonFileStore;
