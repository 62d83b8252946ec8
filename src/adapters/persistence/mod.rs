//! Persistence Adapters - Encrypted Slot Files
//!
//! Implements the `SlotRepository` port with one AES-encrypted,
//! base64-encoded file per record type, named by the SHA-256 of the
//! type's slot name.

pub mod cipher;
pub mod filesystem;
pub mod json_codec;
pub mod memory;
pub mod store;

pub use cipher::ArtifactCipher;
pub use filesystem::FileArtifactStorage;
pub use json_codec::JsonCodec;
pub use memory::MemoryArtifactStorage;
pub use store::PersistenceStore;
