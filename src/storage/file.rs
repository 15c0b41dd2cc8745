//! File-backed store
//!
//! One `<key>.json` file per key inside a data directory. Bytes outside
//! `[A-Za-z0-9_-]` are written as `%XX`, so distinct keys never share a file.

use super::{PersistenceError, Store};
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Store writing each key to its own file
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`
    ///
    /// # Errors
    /// Returns `PersistenceError::Io` if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", escape_key(key)))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        // Readers never observe a half-written file
        if let Err(e) = fs::write(&tmp, blob).and_then(|()| fs::rename(&tmp, &path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

fn escape_key(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            name.push(char::from(byte));
        } else {
            let _ = write!(name, "%{byte:02X}");
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.get("review").unwrap().is_none());
    }

    #[test]
    fn write_then_read_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("review", r#"{"round":3}"#).unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(
            reopened.get("review").unwrap().as_deref(),
            Some(r#"{"round":3}"#)
        );
    }

    #[test]
    fn keys_are_escaped_into_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.set("wq_v2_shuffle_bag:all", "{}").unwrap();
        assert!(dir.path().join("wq_v2_shuffle_bag%3Aall.json").exists());
        assert_eq!(
            store.get("wq_v2_shuffle_bag:all").unwrap().as_deref(),
            Some("{}")
        );
    }

    #[test]
    fn similar_keys_use_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.set("a:b", "colon").unwrap();
        store.set("a_b", "underscore").unwrap();
        store.set("a%3Ab", "percent").unwrap();

        assert_eq!(store.get("a:b").unwrap().as_deref(), Some("colon"));
        assert_eq!(store.get("a_b").unwrap().as_deref(), Some("underscore"));
        assert_eq!(store.get("a%3Ab").unwrap().as_deref(), Some("percent"));
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        // A non-empty directory where the target file should go
        let blocked = dir.path().join("blocked.json");
        fs::create_dir(&blocked).unwrap();
        fs::write(blocked.join("inner"), "x").unwrap();

        assert!(store.set("blocked", "{}").is_err());
        assert!(!dir.path().join("blocked.json.tmp").exists());
    }

    #[test]
    fn open_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        assert!(store.dir().is_dir());
    }
}
