//! Time Keeper - Restores and Persists the Simulated Clock
//!
//! Startup: load the saved `TimeData`; an empty slot keeps the defaults
//! (first run). Shutdown: save the current value. Corrupt data is an
//! error for the caller to handle, never silently replaced.

use tracing::{info, instrument};

use super::facade::PersistenceFacade;
use crate::domain::TimeData;
use crate::error::PersistError;
use crate::ports::slot_repository::SlotRepository;

/// Owns the current clock value and its slot.
pub struct TimeKeeper<R: SlotRepository> {
    /// Persistence entry point.
    facade: PersistenceFacade<R>,
    /// Current clock value.
    time: TimeData,
}

impl<R: SlotRepository> TimeKeeper<R> {
    /// Keeper starting at `initial` until [`restore`](Self::restore) runs.
    pub const fn new(facade: PersistenceFacade<R>, initial: TimeData) -> Self {
        Self {
            facade,
            time: initial,
        }
    }

    /// Current clock value.
    pub const fn time(&self) -> TimeData {
        self.time
    }

    /// Replace the in-memory value with the saved one, if any.
    ///
    /// Returns whether a saved value was found.
    #[instrument(skip(self))]
    pub fn restore(&mut self) -> Result<bool, PersistError> {
        match self.facade.load::<TimeData>()? {
            Some(saved) => {
                self.time = saved;
                info!(
                    minute = saved.minute,
                    hours = saved.hours,
                    days = saved.days,
                    "Clock restored"
                );
                Ok(true)
            }
            None => {
                info!("No saved clock, starting fresh");
                Ok(false)
            }
        }
    }

    /// Advance the clock by `minutes`.
    pub fn advance_minutes(&mut self, minutes: u32) {
        self.time.advance(minutes);
    }

    /// Save the current value.
    #[instrument(skip(self))]
    pub fn persist(&self) -> Result<(), PersistError> {
        self.facade.save(&self.time)?;
        info!(
            minute = self.time.minute,
            hours = self.time.hours,
            days = self.time.days,
            "Clock saved"
        );
        Ok(())
    }
}
