//! Configuration for clockly displays.
//!
//! Settings are read from an optional TOML file. Every field may be left out,
//! in which case the defaults from `common::constants` apply, and command-line
//! flags override whatever the file says.
//!
//! ## Configuration Sources
//!
//! 1. `<dir>/clockly.toml` when started with `--config <dir>`
//! 2. **XDG_CONFIG_HOME**/clockly/clockly.toml
//!
//! A missing file is not an error. clockly never writes the file itself.
//!
//! ## Configuration Structure
//!
//! ```toml
//! timezone = "Asia/Kolkata" # IANA identifier (unknown zones fall back to UTC)
//! hour_format = "24"        # "24" or "12"
//! show_seconds = true       # Include the seconds field in the digital clock
//! size = 220                # Analog face size in face units (40-2000)
//! show_numbers = true       # Draw the 1-12 numerals on the analog face
//! ```

pub mod loading;
pub mod validation;

use serde::Deserialize;

use crate::clock::sampler::{resolve_timezone, resolve_timezone_or_utc};
use crate::clock::{DisplayConfig, FaceConfig};
use crate::common::constants::*;

pub use loading::{get_config_path, get_custom_config_dir, load, load_from_path, set_config_dir};

/// Hour basis as written in the config file.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum HourFormatSetting {
    #[serde(rename = "24")]
    TwentyFour,
    #[serde(rename = "12")]
    Twelve,
}

impl HourFormatSetting {
    pub fn is_24_hour(&self) -> bool {
        matches!(self, HourFormatSetting::TwentyFour)
    }
}

/// Settings loaded from `clockly.toml`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub timezone: Option<String>,
    pub hour_format: Option<HourFormatSetting>,
    pub show_seconds: Option<bool>,
    pub size: Option<f64>,       // analog face size
    pub show_numbers: Option<bool>,
}

/// Values given on the command line, applied on top of the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub timezone: Option<String>,
    pub hour_format: Option<HourFormatSetting>,
    pub show_seconds: Option<bool>,
}

impl Config {
    /// Load configuration using the module's load function
    pub fn load() -> anyhow::Result<(Self, Option<std::path::PathBuf>)> {
        load()
    }

    /// Replace file values with any values given on the command line.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(ref timezone) = overrides.timezone {
            self.timezone = Some(timezone.clone());
        }
        if overrides.hour_format.is_some() {
            self.hour_format = overrides.hour_format;
        }
        if overrides.show_seconds.is_some() {
            self.show_seconds = overrides.show_seconds;
        }
    }

    /// Configured zone name, before resolution.
    pub fn timezone_name(&self) -> &str {
        self.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE)
    }

    pub fn is_24_hour(&self) -> bool {
        self.hour_format
            .map_or(DEFAULT_IS_24_HOUR, |format| format.is_24_hour())
    }

    /// The zone a display will actually show, noting a UTC substitution.
    pub fn effective_timezone(&self) -> String {
        let name = self.timezone_name();
        match resolve_timezone(name) {
            Ok(tz) => tz.name().to_string(),
            Err(_) => format!("{FALLBACK_TIMEZONE} (unknown timezone '{name}')"),
        }
    }

    /// Settings for the digital display. Unknown zones are replaced by UTC.
    pub fn display_config(&self) -> DisplayConfig {
        let tz = resolve_timezone_or_utc(self.timezone_name());
        DisplayConfig::new(
            tz.name(),
            self.is_24_hour(),
            self.show_seconds.unwrap_or(DEFAULT_SHOW_SECONDS),
        )
    }

    pub fn face_config(&self) -> FaceConfig {
        FaceConfig {
            size: self.size.unwrap_or(DEFAULT_FACE_SIZE),
            show_numbers: self.show_numbers.unwrap_or(DEFAULT_SHOW_NUMBERS),
        }
    }

    pub fn log_config(&self, source: Option<&std::path::Path>) {
        match source {
            Some(path) => log_block_start!("Loaded configuration from {}", path.display()),
            None => log_block_start!("Using default configuration"),
        }

        log_indented!("Timezone: {}", self.effective_timezone());
        log_indented!(
            "Hour format: {}-hour",
            if self.is_24_hour() { 24 } else { 12 }
        );
        log_indented!(
            "Seconds: {}",
            if self.show_seconds.unwrap_or(DEFAULT_SHOW_SECONDS) {
                "shown"
            } else {
                "hidden"
            }
        );

        let face = self.face_config();
        log_indented!(
            "Analog face: {} units{}",
            face.size,
            if face.show_numbers { ", numerals" } else { "" }
        );
    }
}
