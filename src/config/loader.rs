//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;
use crate::adapters::persistence::cipher::KEY_LEN;

/// Log levels accepted in `app.log_level`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config: AppConfig = toml::from_str(&content)
    .with_context(|| format!("Failed to parse {}", path.display()))?;

  validate_config(&config)?;

  info!(
    path = %path.display(),
    data_dir = %config.persistence.data_dir,
    custom_key = config.persistence.has_custom_key(),
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Like [`load_config`], but a missing file yields the defaults.
///
/// Either way the returned configuration has passed [`validate_config`].
pub fn load_or_default(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();
  if !path.exists() {
    let config = AppConfig::default();
    validate_config(&config)?;
    return Ok(config);
  }
  load_config(path)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - A known log level
/// - A non-empty data directory
/// - Key and IV of exactly 16 bytes
pub fn validate_config(config: &AppConfig) -> Result<()> {
  let level = config.app.log_level.to_ascii_lowercase();
  anyhow::ensure!(
    LOG_LEVELS.contains(&level.as_str()),
    "Unknown log_level '{}', expected one of {:?}",
    config.app.log_level,
    LOG_LEVELS
  );

  anyhow::ensure!(
    !config.persistence.data_dir.trim().is_empty(),
    "persistence.data_dir must not be empty"
  );

  for (label, value) in [
    ("key", &config.persistence.key),
    ("iv", &config.persistence.iv),
  ] {
    if let Some(value) = value {
      anyhow::ensure!(
        value.len() == KEY_LEN,
        "persistence.{} must be exactly {} bytes, got {}",
        label,
        KEY_LEN,
        value.len()
      );
    }
  }

  Ok(())
}
