//! File-backed store: one JSON file per key under a root directory.

use std::{fs, io, path::PathBuf};

use super::{KeyValueStore, Result};

/// Local file-based key-value storage.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a new store rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the default storage root: `~/.fieldlog/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".fieldlog"))
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Whole-file overwrite: last writer wins.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn test_store() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data")).unwrap();
        (dir, store)
    }

    #[test]
    fn new_creates_root() {
        let (dir, _store) = test_store();
        assert!(dir.path().join("data").is_dir());
    }

    #[test]
    fn get_missing_key_is_none() {
        let (_dir, store) = test_store();
        assert!(store.get("nothing-here").unwrap().is_none());
    }

    #[test]
    fn set_then_get() {
        let (dir, mut store) = test_store();

        store.set("fieldOfficerData", "{}").unwrap();

        assert_eq!(store.get("fieldOfficerData").unwrap().as_deref(), Some("{}"));
        assert!(dir.path().join("data").join("fieldOfficerData.json").is_file());
    }

    #[test]
    fn set_overwrites_previous_value() {
        let (_dir, mut store) = test_store();

        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
    }
}
