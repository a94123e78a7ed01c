//! Analog clock geometry.
//!
//! Angles are degrees clockwise from 12 o'clock. Each hand also moves with
//! the units below it, so the hour hand creeps between hour marks instead of
//! jumping once an hour.

use super::TimeParts;
use crate::common::constants::*;

/// Rotation of the three hands, each in [0, 360) for valid parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour_deg: f64,
    pub minute_deg: f64,
    pub second_deg: f64,
}

/// Continuous hand angles for `parts`.
pub fn angles(parts: TimeParts) -> HandAngles {
    let hours_on_12 = f64::from(parts.hours % 12);
    let minutes = f64::from(parts.minutes);
    let seconds = f64::from(parts.seconds);

    HandAngles {
        hour_deg: hours_on_12 * 30.0 + minutes * 0.5 + seconds * (0.5 / 60.0),
        minute_deg: minutes * 6.0 + seconds * 0.1,
        second_deg: seconds * 6.0,
    }
}

/// One of the 60 marks around the dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub index: u32,
    pub angle_deg: f64,
    /// Hour marks are longer and thicker
    pub major: bool,
    pub length: f64,
    pub width: f64,
}

pub fn tick_marks() -> Vec<TickMark> {
    (0..TICK_COUNT)
        .map(|index| {
            let major = index % MAJOR_TICK_EVERY == 0;
            TickMark {
                index,
                angle_deg: f64::from(index) / f64::from(TICK_COUNT) * 360.0,
                major,
                length: if major { MAJOR_TICK_LENGTH } else { MINOR_TICK_LENGTH },
                width: if major { MAJOR_TICK_WIDTH } else { MINOR_TICK_WIDTH },
            }
        })
        .collect()
}

/// Placement of an hour numeral, relative to the face center.
///
/// `y` grows downwards, as in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumeralPosition {
    pub numeral: u32,
    pub angle_deg: f64,
    pub x: f64,
    pub y: f64,
}

/// Numerals 12, 1, ..., 11 placed around a face of `size` units.
pub fn numeral_positions(size: f64) -> Vec<NumeralPosition> {
    let radius = size / 2.0 - NUMERAL_INSET;

    (0..12u32)
        .map(|i| {
            let angle_deg = f64::from(i) / 12.0 * 360.0;
            let radians = angle_deg.to_radians();
            NumeralPosition {
                numeral: if i == 0 { 12 } else { i },
                angle_deg,
                x: radians.sin() * radius,
                y: -radians.cos() * radius,
            }
        })
        .collect()
}

/// Accessible description of the face.
pub fn describe(parts: TimeParts, time_zone: &str) -> String {
    format!("Analog clock showing {parts} in {time_zone}")
}
