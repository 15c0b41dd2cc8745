//! Persistence port
//!
//! A key/blob store used for the review queue and the word shuffle bags.
//! Faults surface here as `PersistenceError`; callers that must never fail
//! (the scheduler, the shuffle bag) log and swallow them at this boundary.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised by a `Store`
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("stored blob for '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode blob for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Opaque key/blob storage
pub trait Store {
    /// Read the blob stored under `key`
    ///
    /// # Errors
    /// Returns `PersistenceError` if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replace the blob stored under `key`
    ///
    /// # Errors
    /// Returns `PersistenceError` if the backing storage cannot be written.
    fn set(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        (**self).set(key, blob)
    }
}

/// Read and decode a JSON blob
///
/// # Errors
/// Returns `PersistenceError::Corrupt` if the blob does not parse as `T`, or
/// any error from the store itself.
pub fn load_json<T: DeserializeOwned>(
    store: &impl Store,
    key: &str,
) -> Result<Option<T>, PersistenceError> {
    let Some(blob) = store.get(key)? else {
        return Ok(None);
    };

    serde_json::from_str(&blob)
        .map(Some)
        .map_err(|source| PersistenceError::Corrupt {
            key: key.to_string(),
            source,
        })
}

/// Encode and write a JSON blob
///
/// # Errors
/// Returns `PersistenceError` if encoding or the write fails.
pub fn save_json<T: Serialize>(
    store: &mut impl Store,
    key: &str,
    value: &T,
) -> Result<(), PersistenceError> {
    let blob = serde_json::to_string(value).map_err(|source| PersistenceError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        round: u64,
        words: Vec<String>,
    }

    #[test]
    fn json_round_trip_through_store() {
        let mut store = MemoryStore::new();
        let sample = Sample {
            round: 4,
            words: vec!["plant".into()],
        };

        save_json(&mut store, "sample", &sample).unwrap();
        let loaded: Option<Sample> = load_json(&store, "sample").unwrap();
        assert_eq!(loaded, Some(sample));
    }

    #[test]
    fn missing_key_is_none() {
        let store = MemoryStore::new();
        let loaded: Option<Sample> = load_json(&store, "absent").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn corrupt_blob_is_reported() {
        let mut store = MemoryStore::new();
        store.set("sample", "{not json").unwrap();

        let result: Result<Option<Sample>, _> = load_json(&store, "sample");
        assert!(matches!(result, Err(PersistenceError::Corrupt { .. })));
    }
}
