//! Slot keys - content addressing of slots by type name.
//!
//! A slot's artifact lives at `<sha256_hex(name)>.json`. The hash is
//! computed over the UTF-8 bytes of the slot name and rendered as 64
//! lowercase hex characters. The `.json` extension is cosmetic: the
//! content is encrypted.

use std::fmt;
use std::fmt::Write as _;

use super::saveable::Saveable;

/// File extension of stored artifacts.
pub const ARTIFACT_EXTENSION: &str = "json";

/// Deterministic identity of a slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
    /// Human-readable slot name (logged, never stored).
    name: String,
    /// Lowercase hex SHA-256 of `name`.
    digest: String,
}

impl SlotKey {
    /// Key for an arbitrary slot name.
    pub fn from_name(name: &str) -> Self {
        let hash = hmac_sha256::Hash::hash(name.as_bytes());
        let mut digest = String::with_capacity(hash.len() * 2);
        for byte in hash {
            let _ = write!(digest, "{byte:02x}");
        }
        Self {
            name: name.to_string(),
            digest,
        }
    }

    /// Key of the slot owned by `T`.
    pub fn of<T: Saveable>() -> Self {
        Self::from_name(T::SLOT_NAME)
    }

    /// Slot name the key was derived from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 64-character lowercase hex digest.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Artifact file name: `<digest>.json`.
    pub fn file_name(&self) -> String {
        format!("{}.{ARTIFACT_EXTENSION}", self.digest)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, &self.digest[..12])
    }
}
