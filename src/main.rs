//! slotvault — Demo Entry Point
//!
//! Restores the simulated clock from its slot, advances it and saves it
//! back, the same startup/shutdown cycle an application embedding the
//! store goes through.
//!
//! Usage: `slotvault [config.toml] [minutes]`
//!
//! Wiring sequence:
//! 1. Load + validate config (defaults if the file is absent)
//! 2. Init tracing (`RUST_LOG` overrides the configured level)
//! 3. Build the single store instance and share it through the facade
//! 4. Restore `TimeData`, advance, persist

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use slotvault::config::{self, AppConfig};
use slotvault::domain::TimeData;
use slotvault::usecases::{PersistenceFacade, TimeKeeper};
use slotvault::PersistenceStore;

const DEFAULT_CONFIG_PATH: &str = "config.toml";
const DEFAULT_ADVANCE_MINUTES: u32 = 60;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let minutes = match args.next() {
        Some(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("Invalid minute count: {raw}"))?,
        None => DEFAULT_ADVANCE_MINUTES,
    };

    // ── 1. Load configuration ───────────────────────────────
    let config = config::loader::load_or_default(&config_path)
        .context("Failed to load configuration")?;

    // ── 2. Initialize logging ───────────────────────────────
    init_tracing(&config);

    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path,
        data_dir = %config.persistence.data_dir,
        "Starting slotvault"
    );

    // ── 3. One store per process, shared via the facade ─────
    let store = Arc::new(
        PersistenceStore::from_config(&config.persistence)
            .context("Failed to create persistence store")?,
    );
    let facade = PersistenceFacade::new(Arc::clone(&store));

    // ── 4. Restore, advance, persist ────────────────────────
    let mut keeper = TimeKeeper::new(facade, TimeData::new(0, 6, 1));
    keeper
        .restore()
        .context("Saved clock is unreadable; refusing to overwrite it")?;

    keeper.advance_minutes(minutes);
    keeper.persist().context("Failed to save clock")?;

    let time = keeper.time();
    info!(
        minutes,
        day = time.days,
        clock = %format!("{:02}:{:02}", time.hours, time.minute),
        "Clock advanced"
    );
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.app.log_level));

    if config.app.json_logs {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
