//! In-memory slot storage
//!
//! Nothing touches disk. Used by tests and `--ephemeral` runs.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::core::ports::KeyValueStore;

/// Slot storage held in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// An empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with raw slot values
    #[must_use]
    pub fn with_slots<I, K, V>(slots: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            slots: Mutex::new(slots.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    /// Raw value under `key`, for inspection
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.lock().ok().and_then(|slots| slots.get(key).cloned())
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let slots = self.slots.lock().map_err(|_| anyhow::anyhow!("memory store poisoned"))?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut slots = self.slots.lock().map_err(|_| anyhow::anyhow!("memory store poisoned"))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
