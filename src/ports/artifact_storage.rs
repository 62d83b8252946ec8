//! Artifact Storage Port - Durable Slot Artifacts
//!
//! Moves opaque artifacts in and out of durable storage, addressed by
//! `SlotKey`. Artifacts are written as text but read back as raw bytes:
//! a damaged file is the cipher's problem, not the backend's.
//! Implementations know nothing about encryption or record types.

use crate::domain::SlotKey;
use crate::error::PersistError;

/// Backend holding at most one artifact per slot.
pub trait ArtifactStorage: Send + Sync + 'static {
  /// Read a slot's artifact. `Ok(None)` if the slot was never written.
  fn read(&self, key: &SlotKey) -> Result<Option<Vec<u8>>, PersistError>;

  /// Create or overwrite a slot's artifact.
  fn write(&self, key: &SlotKey, artifact: &str) -> Result<(), PersistError>;

  /// Whether an artifact is present. Never fails; anything that prevents
  /// the check counts as absent.
  fn contains(&self, key: &SlotKey) -> bool;
}
