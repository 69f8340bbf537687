//! Durable key-value stores backing the persisted history and watch-list.
//!
//! The browser build uses `window.localStorage` (see the ui crate's compat
//! module); native builds use [`FileStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StorageError;

/// A string-to-string store that survives restarts.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Volatile store, used in tests and as the fallback when no durable store
/// can be opened.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store {
    use super::*;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::Path;
    use std::path::PathBuf;

    /// Keeps all keys in one json object on disk.
    ///
    /// Every write rewrites the whole file. That is fine for two small keys
    /// written once per user action.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub const FILE_NAME: &'static str = "nexus-storage.json";

        /// Opens (without creating) the storage file inside `dir`.
        pub fn in_dir(dir: &Path) -> Self {
            Self {
                path: dir.join(Self::FILE_NAME),
            }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_all(&self) -> Result<HashMap<String, String>, StorageError> {
            match fs::read_to_string(&self.path) {
                Ok(contents) if contents.trim().is_empty() => Ok(HashMap::new()),
                Ok(contents) => Ok(serde_json::from_str(&contents)?),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
                Err(e) => Err(e.into()),
            }
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.read_all()?.remove(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut entries = self.read_all()?;
            entries.insert(key.to_string(), value.to_string());

            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileStore::in_dir(dir.path());
        assert_eq!(store.get("cryptoWatchlist").unwrap(), None);
        store.set("cryptoWatchlist", "[]").unwrap();
        store.set("cryptoSearchHistory", r#"["bitcoin"]"#).unwrap();

        let reopened = FileStore::in_dir(dir.path());
        assert_eq!(
            reopened.get("cryptoSearchHistory").unwrap().as_deref(),
            Some(r#"["bitcoin"]"#)
        );
        assert_eq!(reopened.get("cryptoWatchlist").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn file_store_reports_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::in_dir(dir.path());
        std::fs::write(store.path(), "not json").unwrap();

        assert!(matches!(store.get("any"), Err(StorageError::Serde(_))));
    }
}
