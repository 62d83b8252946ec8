//! Configuration Module - TOML-based Application Configuration
//!
//! Loads and validates configuration from `config.toml`. Every section
//! has defaults, so an absent file yields a working setup that reads
//! and writes artifacts compatible with earlier builds.

pub mod loader;

use serde::Deserialize;

use crate::adapters::persistence::cipher::{ArtifactCipher, LEGACY_KEY_MATERIAL};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Application identity and logging.
  #[serde(default)]
  pub app: AppSection,
  /// Slot storage location and key material.
  #[serde(default)]
  pub persistence: PersistenceConfig,
}

/// Application identity and logging.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
  /// Human-readable application name.
  #[serde(default = "default_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error). `RUST_LOG` overrides.
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Emit JSON log lines instead of human-readable ones.
  #[serde(default)]
  pub json_logs: bool,
}

/// Persistence configuration.
///
/// `key` and `iv` must both be 16-byte UTF-8 strings. When either is
/// omitted the legacy constant is used for it.
#[derive(Debug, Clone, Deserialize)]
pub struct PersistenceConfig {
  /// Directory holding slot artifacts.
  #[serde(default = "default_data_dir")]
  pub data_dir: String,
  /// AES-128 key.
  #[serde(default)]
  pub key: Option<String>,
  /// AES-128 CBC initialization vector.
  #[serde(default)]
  pub iv: Option<String>,
}

impl PersistenceConfig {
  /// Whether any key material overrides the legacy constant.
  pub const fn has_custom_key(&self) -> bool {
    self.key.is_some() || self.iv.is_some()
  }

  /// Build the artifact cipher from the configured key material.
  pub fn cipher(&self) -> anyhow::Result<ArtifactCipher> {
    let legacy = std::str::from_utf8(&LEGACY_KEY_MATERIAL)?;
    ArtifactCipher::from_strings(
      self.key.as_deref().unwrap_or(legacy),
      self.iv.as_deref().unwrap_or(legacy),
    )
  }
}

impl Default for AppSection {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
      json_logs: false,
    }
  }
}

impl Default for PersistenceConfig {
  fn default() -> Self {
    Self {
      data_dir: default_data_dir(),
      key: None,
      iv: None,
    }
  }
}

// Default value functions for serde

fn default_name() -> String {
  "slotvault".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_data_dir() -> String {
  "data".to_string()
}
