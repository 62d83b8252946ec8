//! Use Cases Layer - Application Services over the Ports
//!
//! - `PersistenceFacade`: save/load/exists for every caller in the process
//! - `TimeKeeper`: restores the simulated clock at startup, saves it on exit

pub mod facade;
pub mod time_keeper;

pub use facade::PersistenceFacade;
pub use time_keeper::TimeKeeper;
