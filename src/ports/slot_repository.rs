//! Slot Repository Port - Typed Save/Load/Exists
//!
//! The interface callers program against. One record per saveable type;
//! saving overwrites, loading an unsaved type yields `None`.

use crate::domain::Saveable;
use crate::error::PersistError;

/// Typed, single-record-per-type persistence.
pub trait SlotRepository: Send + Sync + 'static {
  /// Persist `record` into `T`'s slot, replacing any previous value.
  fn save<T: Saveable>(&self, record: &T) -> Result<(), PersistError>;

  /// Load `T`'s slot. `Ok(None)` when nothing was saved yet.
  fn load<T: Saveable>(&self) -> Result<Option<T>, PersistError>;

  /// Whether `T`'s slot holds an artifact.
  fn exists<T: Saveable>(&self) -> bool;
}
