//! # clockly
//!
//! Timezone-aware clock core with a small terminal front end.
//!
//! ## Architecture
//!
//! - **Clock core**: `clock` samples wall-clock time in an IANA timezone,
//!   formats the digital reading and computes continuous analog hand angles
//! - **Scheduling**: `scheduler` refreshes subscribed displays once per second,
//!   one schedule per timezone
//! - **Time**: `time` provides the real system clock and simulated clocks
//! - **Configuration**: `config` reads the optional `clockly.toml`
//! - **CLI**: `args` and `commands` implement the `clockly` binary
//! - **Infrastructure**: signal handling and structured logging

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod common;

pub mod args;
pub mod clock;
pub mod commands;
pub mod config;
pub mod scheduler;
pub mod signals;
pub mod time;

pub use clock::{ClockError, DisplayConfig, HandAngles, TimeParts, angles, format, sample};
pub use scheduler::{RefreshScheduler, SchedulerState, SubscriptionId};
