//! Persistence Store - Encrypted, Type-Keyed Slots
//!
//! Implements the `SlotRepository` port:
//! - save: codec encode -> encrypt -> base64 -> storage write
//! - load: storage read -> base64 -> decrypt -> codec decode
//! - exists: storage presence check
//!
//! Every call is a full I/O round trip. There is no cache and no
//! locking; concurrent saves of one type are last-writer-wins.

use tracing::{debug, info, instrument, warn};

use super::cipher::ArtifactCipher;
use super::filesystem::FileArtifactStorage;
use super::json_codec::JsonCodec;
use crate::config::PersistenceConfig;
use crate::domain::{Saveable, SlotKey};
use crate::error::PersistError;
use crate::ports::artifact_storage::ArtifactStorage;
use crate::ports::codec::RecordCodec;
use crate::ports::slot_repository::SlotRepository;

/// Encrypted slot store over an artifact backend and a record codec.
pub struct PersistenceStore<S = FileArtifactStorage, C = JsonCodec> {
    /// Where artifacts live.
    storage: S,
    /// At-rest cipher.
    cipher: ArtifactCipher,
    /// Record <-> text codec.
    codec: C,
}

impl PersistenceStore {
    /// File-backed JSON store built from configuration.
    ///
    /// Falls back to the legacy key material when no key/IV is configured.
    pub fn from_config(config: &PersistenceConfig) -> anyhow::Result<Self> {
        let cipher = config.cipher()?;
        if !config.has_custom_key() {
            warn!("No key material configured, using legacy key (obfuscation only)");
        }
        info!(data_dir = %config.data_dir, "Persistence store ready");
        Ok(Self::new(
            FileArtifactStorage::new(&config.data_dir),
            cipher,
            JsonCodec,
        ))
    }
}

impl<S: ArtifactStorage, C: RecordCodec> PersistenceStore<S, C> {
    /// Assemble a store from its parts.
    pub const fn new(storage: S, cipher: ArtifactCipher, codec: C) -> Self {
        Self {
            storage,
            cipher,
            codec,
        }
    }

    /// The artifact backend.
    pub const fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: ArtifactStorage, C: RecordCodec> SlotRepository for PersistenceStore<S, C> {
    #[instrument(skip(self, record), fields(slot = T::SLOT_NAME))]
    fn save<T: Saveable>(&self, record: &T) -> Result<(), PersistError> {
        let key = SlotKey::of::<T>();

        let text = self
            .codec
            .encode(record)
            .map_err(|source| PersistError::Serialize {
                slot: T::SLOT_NAME.to_string(),
                source,
            })?;

        let artifact = self.cipher.encrypt(&text);
        self.storage.write(&key, &artifact)?;

        debug!(slot = %key, bytes = artifact.len(), "Slot saved");
        Ok(())
    }

    #[instrument(skip(self), fields(slot = T::SLOT_NAME))]
    fn load<T: Saveable>(&self) -> Result<Option<T>, PersistError> {
        let key = SlotKey::of::<T>();

        let Some(artifact) = self.storage.read(&key)? else {
            debug!(slot = %key, "No artifact, slot is empty");
            return Ok(None);
        };

        let text = self
            .cipher
            .decrypt(&artifact)
            .map_err(|source| PersistError::Decrypt {
                slot: T::SLOT_NAME.to_string(),
                source,
            })?;

        let record = self
            .codec
            .decode(&text)
            .map_err(|source| PersistError::Deserialize {
                slot: T::SLOT_NAME.to_string(),
                source,
            })?;

        debug!(slot = %key, bytes = artifact.len(), "Slot loaded");
        Ok(Some(record))
    }

    fn exists<T: Saveable>(&self) -> bool {
        self.storage.contains(&SlotKey::of::<T>())
    }
}
