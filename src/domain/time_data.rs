//! Saved clock position of the simulation.
//!
//! The clock itself runs elsewhere; this record is what survives a restart.

use serde::{Deserialize, Serialize};

use super::saveable::Saveable;

/// Minutes per hour on the simulated clock.
pub const MINUTES_PER_HOUR: u32 = 60;
/// Hours per day on the simulated clock.
pub const HOURS_PER_DAY: u32 = 24;

/// Simulated time of day plus elapsed day count.
///
/// Artifacts from earlier builds name the fields after their auto-property
/// backing fields (`<Minute>k__BackingField`); both spellings load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeData {
    /// Minute of the hour (0..=59).
    #[serde(alias = "<Minute>k__BackingField")]
    pub minute: u32,
    /// Hour of the day (0..=23).
    #[serde(alias = "<Hours>k__BackingField")]
    pub hours: u32,
    /// Day counter.
    #[serde(alias = "<Days>k__BackingField")]
    pub days: u32,
}

impl Saveable for TimeData {
    const SLOT_NAME: &'static str = "TimeData";
}

impl TimeData {
    pub const fn new(minute: u32, hours: u32, days: u32) -> Self {
        Self {
            minute,
            hours,
            days,
        }
    }

    /// Overwrite all three fields.
    pub const fn set(&mut self, minute: u32, hours: u32, days: u32) {
        self.minute = minute;
        self.hours = hours;
        self.days = days;
    }

    /// Advance one minute, carrying into hours and days.
    ///
    /// Out-of-range values from a loaded record roll over on the next
    /// carry; the day counter saturates at `u32::MAX`.
    pub const fn tick_minute(&mut self) {
        self.minute = self.minute.saturating_add(1);
        if self.minute >= MINUTES_PER_HOUR {
            self.minute = 0;
            self.hours = self.hours.saturating_add(1);
            if self.hours >= HOURS_PER_DAY {
                self.hours = 0;
                self.days = self.days.saturating_add(1);
            }
        }
    }

    /// Advance `minutes` minutes.
    pub fn advance(&mut self, minutes: u32) {
        for _ in 0..minutes {
            self.tick_minute();
        }
    }
}
