//! JSON-file-backed key-value storage.
//!
//! The CLI's stand-in for a browser's local storage: one flat JSON object on
//! disk, rewritten on every `set`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clothing_co_core::{KeyValueStore, MemoryStore, StorageError};

use crate::error::CliError;

/// Key-value storage persisted to a JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: MemoryStore,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. So is a file that does not hold a
    /// flat JSON object of strings; it is overwritten on the next write.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Io` if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CliError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed storage file");
                MemoryStore::new()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => MemoryStore::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self { path, entries })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        let backend = |e: io::Error| StorageError::Backend(format!("{}: {e}", self.path.display()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(backend)?;
        }
        fs::write(&self.path, json).map_err(backend)?;

        tracing::debug!(path = %self.path.display(), "Storage file written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.set(key, value)?;
        self.flush()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clothing_co_core::storage::{CART_KEY, DARK_MODE_KEY};

    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("storage.json")).unwrap();
        assert_eq!(store.get(CART_KEY), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set(DARK_MODE_KEY, "1".to_string()).unwrap();
        store.set(CART_KEY, r#"{"jeans":1}"#.to_string()).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(DARK_MODE_KEY).as_deref(), Some("1"));
        assert_eq!(reopened.get(CART_KEY).as_deref(), Some(r#"{"jeans":1}"#));
    }

    #[test]
    fn test_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(CART_KEY), None);

        store.set(DARK_MODE_KEY, "0".to_string()).unwrap();
        assert_eq!(
            FileStore::open(&path).unwrap().get(DARK_MODE_KEY).as_deref(),
            Some("0")
        );
    }

    #[test]
    fn test_unwritable_path_is_backend_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(FileStore::open(dir.path()), Err(CliError::Io(_))));

        // A directory where the file should be
        let mut store = FileStore {
            path: dir.path().to_path_buf(),
            entries: MemoryStore::new(),
        };
        let err = store.set(CART_KEY, "{}".to_string()).unwrap_err();
        assert!(matches!(err, StorageError::Backend(_)));
    }
}
