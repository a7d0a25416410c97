//! JSON file store.

use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing::debug;

use crate::storage::{KeyValueStore, StorageError};

/// Key-value store persisted as a single JSON object on disk.
///
/// Every write rewrites the whole document through a sibling temp file and a
/// rename, so readers only ever see a complete document.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Store backed by the file at `path`. Nothing is touched until first use.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next document is staged in: the store path with
    /// `.tmp` appended.
    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();

        tmp.push(".tmp");

        PathBuf::from(tmp)
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(error) => Err(StorageError::Io(error)),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.tmp_path();

        fs::write(&tmp_path, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!(path = %self.path.display(), keys = entries.len(), "storage file written");

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut entries = self.read_entries()?;

        Ok(entries.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().map_err(|_err| StorageError::Poisoned)?;

        let mut entries = self.read_entries()?;

        entries.insert(key.to_string(), value.to_string());

        self.write_entries(&entries)
    }
}
