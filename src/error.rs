//! Error types for slot persistence.
//!
//! Absence of an artifact is never an error: `load` returns `Ok(None)`
//! and `exists` returns `false`. Everything below is surfaced to the
//! caller unchanged, without retries.

use std::path::PathBuf;

use thiserror::Error;

use crate::adapters::persistence::cipher::CipherFailure;

/// Failure of a save, load or exists round trip.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The artifact could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File the operation touched.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored artifact is not a valid ciphertext for the configured
    /// key/IV (bad base64, truncated blocks, bad padding, non-UTF-8 plaintext).
    #[error("failed to decrypt slot '{slot}': {source}")]
    Decrypt {
        /// Slot name of the artifact.
        slot: String,
        #[source]
        source: CipherFailure,
    },

    /// The decrypted text does not decode into the requested type.
    #[error("failed to deserialize slot '{slot}': {source}")]
    Deserialize {
        /// Slot name of the artifact.
        slot: String,
        #[source]
        source: CodecError,
    },

    /// The record could not be encoded by the codec.
    #[error("failed to serialize slot '{slot}': {source}")]
    Serialize {
        /// Slot name of the record.
        slot: String,
        #[source]
        source: CodecError,
    },
}

impl PersistError {
    /// Wrap an `std::io::Error` with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors that mean the artifact on disk is unusable.
    pub const fn is_corruption(&self) -> bool {
        matches!(self, Self::Decrypt { .. } | Self::Deserialize { .. })
    }
}

/// Error reported by a [`RecordCodec`](crate::ports::codec::RecordCodec).
#[derive(Debug, Error)]
#[error("{0}")]
pub struct CodecError(pub String);

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        Self(e.to_string())
    }
}
