//! Durable key-value slot for the watched list.
//!
//! The whole list is the unit of persistence: every mutation rewrites the
//! slot with the full JSON array. There is no versioning or migration.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fs2::FileExt;
use parking_lot::Mutex;
use thiserror::Error;

use crate::watched::entry::WatchedEntry;

const LOCK_FILE: &str = ".lock";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to lock '{path}': {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored value for '{key}' is not a valid watched list: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode watched list: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Synchronous string slots addressed by key.
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// One `<key>.json` file per slot inside a directory.
///
/// Writes go to a temp file that is renamed over the slot while holding an
/// exclusive lock on `<dir>/.lock`, so readers never see a half-written list.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn open_lock(&self) -> Result<File, StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.dir.join(LOCK_FILE);
        OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|source| StoreError::Io { path, source })
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let lock = self.open_lock()?;
        FileExt::lock_shared(&lock).map_err(|source| StoreError::Lock {
            path: self.dir.join(LOCK_FILE),
            source,
        })?;
        let result = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        });
        let _ = FileExt::unlock(&lock);

        result.map(Some)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let lock = self.open_lock()?;
        FileExt::lock_exclusive(&lock).map_err(|source| StoreError::Lock {
            path: self.dir.join(LOCK_FILE),
            source,
        })?;

        let path = self.slot_path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        let result = write_then_rename(&tmp, &path, value);
        let _ = FileExt::unlock(&lock);
        result
    }
}

fn write_then_rename(tmp: &Path, path: &Path, value: &str) -> Result<(), StoreError> {
    let mut file = File::create(tmp).map_err(|source| StoreError::Io {
        path: tmp.to_path_buf(),
        source,
    })?;
    file.write_all(value.as_bytes())
        .and_then(|_| file.sync_all())
        .map_err(|source| StoreError::Io {
            path: tmp.to_path_buf(),
            source,
        })?;
    fs::rename(tmp, path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// In-process slots. Clones share the same map, which is how tests simulate
/// a reload against the same storage.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.slots.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads and saves the watched list under one slot.
#[derive(Clone)]
pub struct WatchedStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
}

impl WatchedStore {
    pub fn new(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Previously stored list, or empty when nothing was stored.
    pub fn load(&self) -> Result<Vec<WatchedEntry>, StoreError> {
        let Some(raw) = self.backend.read(&self.key)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries: Option<Vec<WatchedEntry>> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                key: self.key.clone(),
                source,
            })?;
        Ok(entries.unwrap_or_default())
    }

    /// Rewrites the slot with the full list.
    pub fn save(&self, entries: &[WatchedEntry]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(entries).map_err(StoreError::Encode)?;
        self.backend.write(&self.key, &raw)?;
        tracing::debug!(key = %self.key, count = entries.len(), "Saved watched list");
        Ok(())
    }
}
