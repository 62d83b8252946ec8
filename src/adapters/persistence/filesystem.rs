//! File Artifact Storage - One File per Slot
//!
//! Artifacts live at `<data_dir>/<sha256_hex(slot)>.json`. Writes go to
//! a temporary file first and are renamed over the target, so a crash
//! leaves either the old or the new artifact, never a partial one. Each
//! write gets its own temporary name, so racing saves of one slot end
//! last-writer-wins instead of failing. The data directory is created on
//! first write, not at construction.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::domain::SlotKey;
use crate::error::PersistError;
use crate::ports::artifact_storage::ArtifactStorage;

/// Per-process counter making temporary file names unique.
static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Data-directory backed artifact storage.
#[derive(Debug, Clone)]
pub struct FileArtifactStorage {
    /// Directory holding all artifacts.
    data_dir: PathBuf,
}

impl FileArtifactStorage {
    /// Storage rooted at `data_dir`. Nothing is touched until a write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of a slot's artifact.
    pub fn path_for(&self, key: &SlotKey) -> PathBuf {
        self.data_dir.join(key.file_name())
    }

    /// Fresh temporary path: `<file>.<pid>.<n>.tmp`.
    fn tmp_path_for(&self, key: &SlotKey) -> PathBuf {
        let n = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        self.data_dir
            .join(format!("{}.{}.{n}.tmp", key.file_name(), std::process::id()))
    }
}

impl ArtifactStorage for FileArtifactStorage {
    fn read(&self, key: &SlotKey) -> Result<Option<Vec<u8>>, PersistError> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => {
                debug!(slot = %key, path = %path.display(), bytes = bytes.len(), "Artifact read");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistError::io(path, e)),
        }
    }

    fn write(&self, key: &SlotKey, artifact: &str) -> Result<(), PersistError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| PersistError::io(&self.data_dir, e))?;

        let tmp_path = self.tmp_path_for(key);
        let path = self.path_for(key);

        fs::write(&tmp_path, artifact).map_err(|e| PersistError::io(&tmp_path, e))?;

        if let Err(e) = fs::rename(&tmp_path, &path) {
            if fs::remove_file(&tmp_path).is_err() {
                warn!(path = %tmp_path.display(), "Could not remove temporary artifact");
            }
            return Err(PersistError::io(path, e));
        }

        debug!(slot = %key, path = %path.display(), bytes = artifact.len(), "Artifact written");
        Ok(())
    }

    fn contains(&self, key: &SlotKey) -> bool {
        self.path_for(key).is_file()
    }
}
