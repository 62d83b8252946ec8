//! In-memory artifact storage for tests and benchmarks.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::domain::SlotKey;
use crate::error::PersistError;
use crate::ports::artifact_storage::ArtifactStorage;

/// `HashMap`-backed storage. Can be switched to fail every write.
#[derive(Debug, Default)]
pub struct MemoryArtifactStorage {
    artifacts: Mutex<HashMap<String, Vec<u8>>>,
    fail_writes: AtomicBool,
}

impl MemoryArtifactStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail with a permission error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    /// Raw artifact bytes of a slot, if any.
    pub fn raw(&self, key: &SlotKey) -> Option<Vec<u8>> {
        self.lock().get(key.digest()).cloned()
    }

    /// Replace a slot's raw artifact bytes.
    pub fn put_raw(&self, key: &SlotKey, artifact: impl Into<Vec<u8>>) {
        self.lock().insert(key.digest().to_string(), artifact.into());
    }

    /// Drop a slot's artifact, as an external file manager would.
    pub fn remove(&self, key: &SlotKey) -> Option<Vec<u8>> {
        self.lock().remove(key.digest())
    }

    /// Number of stored artifacts.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.artifacts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ArtifactStorage for MemoryArtifactStorage {
    fn read(&self, key: &SlotKey) -> Result<Option<Vec<u8>>, PersistError> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &SlotKey, artifact: &str) -> Result<(), PersistError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(PersistError::io(
                key.file_name(),
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "writes disabled"),
            ));
        }
        self.put_raw(key, artifact);
        Ok(())
    }

    fn contains(&self, key: &SlotKey) -> bool {
        self.lock().contains_key(key.digest())
    }
}
