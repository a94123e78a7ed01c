//! Time sources: the system clock and simulated clocks.

pub mod source;
