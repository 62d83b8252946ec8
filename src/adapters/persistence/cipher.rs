//! Artifact Cipher - AES-128-CBC + PKCS#7, base64 text
//!
//! Turns codec output into the text stored on disk and back. The key
//! and IV are fixed per installation, so identical plaintexts produce
//! identical artifacts. This deters casual inspection of the files; it
//! is not confidentiality against anyone holding the key material.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use thiserror::Error;

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// Key and IV length in bytes.
pub const KEY_LEN: usize = 16;

/// Key and IV used by every earlier build. Artifacts written with it can
/// only be read back with it.
pub const LEGACY_KEY_MATERIAL: [u8; KEY_LEN] = *b"1234567890123456";

/// Why a ciphertext was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherFailure {
    /// Not valid standard base64 (including non-ASCII bytes).
    #[error("invalid base64: {0}")]
    Encoding(String),
    /// Wrong length or padding for the key/IV.
    #[error("bad block length or padding")]
    Padding,
    /// Decrypted bytes are not UTF-8.
    #[error("plaintext is not UTF-8")]
    NotUtf8,
}

/// Symmetric cipher for slot artifacts.
#[derive(Clone)]
pub struct ArtifactCipher {
    key: [u8; KEY_LEN],
    iv: [u8; KEY_LEN],
}

impl ArtifactCipher {
    /// Cipher with explicit key material.
    pub const fn new(key: [u8; KEY_LEN], iv: [u8; KEY_LEN]) -> Self {
        Self { key, iv }
    }

    /// Cipher compatible with artifacts from earlier builds.
    pub const fn legacy() -> Self {
        Self::new(LEGACY_KEY_MATERIAL, LEGACY_KEY_MATERIAL)
    }

    /// Build from UTF-8 strings of exactly 16 bytes each.
    pub fn from_strings(key: &str, iv: &str) -> anyhow::Result<Self> {
        Ok(Self::new(key_bytes("key", key)?, key_bytes("iv", iv)?))
    }

    /// Encrypt `plaintext` and return base64 text.
    pub fn encrypt(&self, plaintext: &str) -> String {
        let ciphertext = Aes128CbcEnc::new(&self.key.into(), &self.iv.into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
        STANDARD.encode(ciphertext)
    }

    /// Decode and decrypt base64 text produced by [`encrypt`](Self::encrypt).
    ///
    /// Takes raw artifact bytes so that a damaged file which is no longer
    /// UTF-8 is still reported as a cipher failure. Surrounding ASCII
    /// whitespace is ignored.
    pub fn decrypt(&self, artifact: impl AsRef<[u8]>) -> Result<String, CipherFailure> {
        let ciphertext = STANDARD
            .decode(artifact.as_ref().trim_ascii())
            .map_err(|e| CipherFailure::Encoding(e.to_string()))?;

        let plaintext = Aes128CbcDec::new(&self.key.into(), &self.iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
            .map_err(|_| CipherFailure::Padding)?;

        String::from_utf8(plaintext).map_err(|_| CipherFailure::NotUtf8)
    }
}

impl Default for ArtifactCipher {
    fn default() -> Self {
        Self::legacy()
    }
}

impl std::fmt::Debug for ArtifactCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactCipher")
            .field("legacy", &(self.key == LEGACY_KEY_MATERIAL && self.iv == LEGACY_KEY_MATERIAL))
            .finish_non_exhaustive()
    }
}

fn key_bytes(label: &str, value: &str) -> anyhow::Result<[u8; KEY_LEN]> {
    <[u8; KEY_LEN]>::try_from(value.as_bytes()).map_err(|_| {
        anyhow::anyhow!(
            "{label} must be exactly {KEY_LEN} bytes, got {}",
            value.len()
        )
    })
}
