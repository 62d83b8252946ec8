//! Persistence Facade - Save/Load/Exists for the Rest of the App
//!
//! Callers hold a facade instead of the store, so they never see how
//! the store was built or what key material it carries. Pure delegation:
//! no caching, no retries, errors pass through unchanged.

use std::sync::Arc;

use crate::domain::Saveable;
use crate::error::PersistError;
use crate::ports::slot_repository::SlotRepository;

/// Shared entry point to slot persistence.
pub struct PersistenceFacade<R: SlotRepository> {
    /// The one store instance of the process.
    repository: Arc<R>,
}

impl<R: SlotRepository> PersistenceFacade<R> {
    /// Wrap a shared repository.
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Persist `record` into its type's slot.
    pub fn save<T: Saveable>(&self, record: &T) -> Result<(), PersistError> {
        self.repository.save(record)
    }

    /// Load the record of type `T`, `None` if never saved.
    pub fn load<T: Saveable>(&self) -> Result<Option<T>, PersistError> {
        self.repository.load()
    }

    /// Whether a record of type `T` is stored.
    pub fn exists<T: Saveable>(&self) -> bool {
        self.repository.exists::<T>()
    }
}

impl<R: SlotRepository> Clone for PersistenceFacade<R> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}
