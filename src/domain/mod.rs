//! Domain layer - slot identity and saveable records.
//!
//! No I/O and no cryptography beyond the slot-name hash. Everything here
//! is pure and testable in isolation.

pub mod saveable;
pub mod slot;
pub mod time_data;

pub use saveable::Saveable;
pub use slot::SlotKey;
pub use time_data::TimeData;
