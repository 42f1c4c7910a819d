//! Injected key-value storage port.
//!
//! The gallery never touches a backend directly; it goes through
//! [`StoragePort`] so session history is testable without a real store.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::Result;

pub trait StoragePort: Send + Sync {
    /// Read the value under `key`. Missing keys are `Ok(None)`, not errors.
    ///
    /// # Errors
    /// Returns an error only when the backend itself fails.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Overwrite the value under `key` in full.
    ///
    /// # Errors
    /// Returns an error when the backend rejects the write.
    fn write(&self, key: &str, value: &[u8]) -> Result<()>;
}

/// In-memory storage. Clones share the same map, which lets tests inspect
/// what a moved-in handle persisted.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key before hydration.
    pub fn seed(&self, key: &str, value: &[u8]) {
        self.lock().insert(key.to_string(), value.to_vec());
    }

    /// Snapshot of the stored value, for assertions.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().get(key).cloned()
    }

    // A poisoned lock only means some holder panicked; the map itself is
    // still a valid snapshot, so recover it instead of propagating.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<()> {
        self.lock().insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// File-backed storage, one file per key under a directory. The desktop
/// analog of the browser's local storage.
#[derive(Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl StoragePort for FileStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
