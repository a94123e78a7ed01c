//! Command-line command handlers for clockly.
//!
//! Each command lives in its own submodule. The helpers here load the
//! effective display settings and render the one-line clock summary that both
//! `now` and `watch` print.

pub mod help;
pub mod now;
pub mod watch;
pub mod zones;

use anyhow::{Context, Result};

use crate::args::DisplayOptions;
use crate::clock::analog::HandAngles;
use crate::clock::{DisplayConfig, TimeParts, format};
use crate::config::{self, Config};

/// Load the config file and apply command-line overrides.
pub(crate) fn load_config(options: &DisplayOptions) -> Result<Config> {
    if options.config_dir.is_some() {
        config::set_config_dir(options.config_dir.clone())?;
    }

    let (mut config, source) = Config::load().context("Failed to load configuration")?;
    config.apply_overrides(&options.overrides);

    if options.debug_enabled {
        config.log_config(source.as_deref());
    }

    Ok(config)
}

/// `HH:MM:SS  ◷ h 90.00° m 0.00° s 0.00°`
pub fn status_line(parts: TimeParts, display: &DisplayConfig, hands: &HandAngles) -> String {
    format!(
        "{}  ◷ h {:.2}° m {:.2}° s {:.2}°",
        format(parts, display),
        hands.hour_deg,
        hands.minute_deg,
        hands.second_deg
    )
}
