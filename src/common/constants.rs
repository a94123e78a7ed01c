//! Application-wide constants and defaults.
//!
//! Configuration fields that are left out of `clockly.toml` fall back to the
//! defaults defined here, and validation uses the limits below.

use std::time::Duration;

// # Display defaults

/// Timezone used when neither the config file nor the CLI names one.
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";
/// Zone substituted for an identifier the timezone database does not know.
pub const FALLBACK_TIMEZONE: &str = "UTC";
/// `hour_format = "24"` unless configured otherwise.
pub const DEFAULT_IS_24_HOUR: bool = true;
pub const DEFAULT_SHOW_SECONDS: bool = true;

// # Analog face

pub const DEFAULT_FACE_SIZE: f64 = 220.0;
pub const MINIMUM_FACE_SIZE: f64 = 40.0;
pub const MAXIMUM_FACE_SIZE: f64 = 2000.0;
pub const DEFAULT_SHOW_NUMBERS: bool = true;

/// Distance of the numerals from the face edge, in face units.
pub const NUMERAL_INSET: f64 = 26.0;
pub const TICK_COUNT: u32 = 60;
pub const MAJOR_TICK_EVERY: u32 = 5;
pub const MAJOR_TICK_LENGTH: f64 = 10.0;
pub const MAJOR_TICK_WIDTH: f64 = 2.0;
pub const MINOR_TICK_LENGTH: f64 = 6.0;
pub const MINOR_TICK_WIDTH: f64 = 1.0;

// # Scheduling

/// Period between samples of one schedule.
pub const REFRESH_PERIOD: Duration = Duration::from_secs(1);

// # Configuration files

pub const CONFIG_DIR_NAME: &str = "clockly";
pub const CONFIG_FILE_NAME: &str = "clockly.toml";

// # Exit codes

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
