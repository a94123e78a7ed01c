//! Clock core: sampling wall-clock time in a timezone and turning it into
//! something a display can show.
//!
//! The pipeline is always the same:
//!
//! 1. [`sampler`] reads an instant and converts it to [`TimeParts`] in the
//!    configured IANA zone.
//! 2. [`digital`] renders the parts as `HH:MM[:SS][ AM|PM]`.
//! 3. [`analog`] turns the parts into continuous hand angles.
//!
//! None of these steps keep state between samples; each display refresh
//! starts again from "now".

pub mod analog;
pub mod catalog;
pub mod digital;
pub mod error;
pub mod sampler;

pub use analog::{HandAngles, angles};
pub use digital::format;
pub use error::ClockError;
pub use sampler::{sample, sample_now};

use crate::common::constants::*;

/// Civil wall-clock time in one timezone, on a 24-hour basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeParts {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeParts {
    /// Build parts from components, rejecting anything outside a clock face.
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Option<Self> {
        (hours < 24 && minutes < 60 && seconds < 60).then_some(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Seconds since local midnight.
    pub fn seconds_of_day(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl std::fmt::Display for TimeParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Hour basis of the digital display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourFormat {
    /// 00–23
    TwentyFourHour,
    /// 12, 01–11 with an AM/PM marker
    TwelveHour,
}

/// Settings one digital display is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// IANA identifier, resolved only when sampling
    pub time_zone: String,
    pub hour_format: HourFormat,
    pub show_seconds: bool,
}

impl DisplayConfig {
    pub fn new(time_zone: impl Into<String>, is_24_hour: bool, show_seconds: bool) -> Self {
        Self {
            time_zone: time_zone.into(),
            hour_format: if is_24_hour {
                HourFormat::TwentyFourHour
            } else {
                HourFormat::TwelveHour
            },
            show_seconds,
        }
    }

    pub fn is_24_hour(&self) -> bool {
        self.hour_format == HourFormat::TwentyFourHour
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_TIMEZONE,
            DEFAULT_IS_24_HOUR,
            DEFAULT_SHOW_SECONDS,
        )
    }
}

/// Geometry options of the analog face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceConfig {
    pub size: f64,
    pub show_numbers: bool,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_FACE_SIZE,
            show_numbers: DEFAULT_SHOW_NUMBERS,
        }
    }
}
