//! slotvault — Library Root
//!
//! Encrypted, type-keyed local record storage: one slot per record type,
//! each slot an AES-encrypted file named by the SHA-256 of the type's
//! slot name.
//!
//! Re-exports all modules for integration tests and benchmarks.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod usecases;

pub use adapters::persistence::PersistenceStore;
pub use domain::{Saveable, SlotKey};
pub use error::PersistError;
pub use ports::slot_repository::SlotRepository;
pub use usecases::PersistenceFacade;
