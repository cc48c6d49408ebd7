//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (local storage, entropy).
//!
//! Implementations live in the `adapters` module.

mod kv_store;
mod random;

pub use kv_store::{KeyValueStore, Slot, load_slot, save_slot};
pub use random::RandomSource;
