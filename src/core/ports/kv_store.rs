//! Key-value store port
//!
//! Local persistence is a handful of named slots holding serialized
//! snapshots. Loading never fails (callers supply a fallback) and saving is
//! fire-and-forget: a failed write is logged and otherwise ignored.

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Raw string storage keyed by slot name
///
/// Implementations handle where the bytes live (files, memory, ...).
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`, `None` if nothing is stored
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Replace the value stored under `key`
    fn write(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).write(key, value)
    }
}

/// The persisted slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Verb bank snapshot
    VerbBank,
    /// Student roster
    Students,
    /// Append-only attempt log
    Attempts,
    /// Identity of the logged-in student
    ActiveStudent,
}

impl Slot {
    /// All slots
    pub const ALL: [Self; 4] = [Self::VerbBank, Self::Students, Self::Attempts, Self::ActiveStudent];

    /// Storage key for this slot
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::VerbBank => "verb_bank",
            Self::Students => "students",
            Self::Attempts => "attempts",
            Self::ActiveStudent => "active_student",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Load a slot, returning `fallback` when it is missing or unparseable
pub fn load_slot<S, T>(store: &S, slot: Slot, fallback: T) -> T
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.read(slot.key()) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Ignoring unparseable {slot} data: {e}");
                fallback
            },
        },
        Ok(None) => {
            debug!("No stored {slot}, using default");
            fallback
        },
        Err(e) => {
            warn!("Failed to read {slot}: {e}");
            fallback
        },
    }
}

/// Save a slot; failures are logged and swallowed
pub fn save_slot<S, T>(store: &S, slot: Slot, value: &T)
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = match serde_json::to_string_pretty(value) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Failed to serialize {slot}: {e}");
            return;
        },
    };
    if let Err(e) = store.write(slot.key(), &raw) {
        warn!("Failed to save {slot}: {e}");
    } else {
        debug!("Saved {slot}");
    }
}
