//! The `zones` command: list timezone presets with their current time.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::args::DisplayOptions;
use crate::clock::catalog::presets;
use crate::clock::{ClockError, DisplayConfig, format, sample};
use crate::time::source;

pub fn run_zones_command(options: &DisplayOptions) -> Result<()> {
    log_version!();

    let config = super::load_config(options)?;
    let display = config.display_config();

    let now = source::global()
        .checked_now()
        .context("Failed to read the current time")?;

    log_block_start!("Timezone presets:");
    for line in preset_lines(now, &display)? {
        log_indented!("{}", line);
    }

    if !crate::clock::catalog::is_preset(&display.time_zone) {
        log_pipe!();
        log_info!("Current timezone {} is not a preset", display.time_zone);
    }
    log_end!();

    Ok(())
}

/// One line per preset, the configured zone marked with `*`.
pub fn preset_lines(now: DateTime<Utc>, display: &DisplayConfig) -> Result<Vec<String>, ClockError> {
    presets()
        .iter()
        .map(|zone| {
            let parts = sample(zone, now)?;
            let marker = if *zone == display.time_zone { '*' } else { ' ' };
            Ok(format!("{marker} {zone:<20} {}", format(parts, display)))
        })
        .collect()
}

pub fn display_help() {
    log_version!();
    log_block_start!("zones - List timezone presets");
    log_block_start!("Usage: clockly zones [OPTIONS]");
    log_block_start!("Description:");
    log_indented!("Shows every preset timezone with its current time, using the");
    log_indented!("configured hour format. The active timezone is marked with '*'.");
    log_end!();
}
