//! Digital clock rendering.
//!
//! The layout is fixed rather than locale-negotiated so the same parts always
//! render to the same string on every platform: colon separators, two-digit
//! fields, and an upper-case `AM`/`PM` after a single space in 12-hour mode.

use super::{DisplayConfig, HourFormat, TimeParts};

/// Half of the day in 12-hour mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn from_hours(hours: u32) -> Self {
        if hours < 12 { Meridiem::Am } else { Meridiem::Pm }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

/// Hour shown on the display: 0–23, or 12, 1–11 in 12-hour mode.
pub fn display_hour(hours: u32, hour_format: HourFormat) -> u32 {
    match hour_format {
        HourFormat::TwentyFourHour => hours,
        HourFormat::TwelveHour => match hours % 12 {
            0 => 12,
            h => h,
        },
    }
}

/// Render `parts` for a digital display.
pub fn format(parts: TimeParts, config: &DisplayConfig) -> String {
    let hour = display_hour(parts.hours, config.hour_format);

    let mut text = format!("{hour:02}:{:02}", parts.minutes);
    if config.show_seconds {
        text.push_str(&format!(":{:02}", parts.seconds));
    }

    if config.hour_format == HourFormat::TwelveHour {
        text.push(' ');
        text.push_str(Meridiem::from_hours(parts.hours).as_str());
    }

    text
}
