//! Timezone presets offered for quick selection.

/// Common zones, in the order they are listed to the user.
pub const PRESET_TIMEZONES: [&str; 10] = [
    "UTC",
    "Asia/Kolkata",
    "Asia/Dubai",
    "Asia/Tokyo",
    "Europe/London",
    "Europe/Berlin",
    "America/New_York",
    "America/Los_Angeles",
    "Australia/Sydney",
    "Africa/Johannesburg",
];

pub fn presets() -> &'static [&'static str] {
    &PRESET_TIMEZONES
}

pub fn is_preset(time_zone: &str) -> bool {
    PRESET_TIMEZONES.contains(&time_zone)
}
