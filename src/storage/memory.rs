//! In-memory store

use super::{PersistenceError, Store};
use rustc_hash::FxHashMap;

/// Store backed by a hash map, for tests and ephemeral sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail, simulating full or disabled storage
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::Unavailable("writes disabled".to_string()));
        }
        self.entries.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert!(store.contains("k"));
    }

    #[test]
    fn failing_writes_leave_previous_value() {
        let mut store = MemoryStore::new();
        store.set("k", "v1").unwrap();
        store.set_fail_writes(true);

        assert!(store.set("k", "v2").is_err());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));
    }
}
