//! The `now` command: print the current time once.

use anyhow::{Context, Result};

use crate::args::DisplayOptions;
use crate::clock::analog::{describe, numeral_positions, tick_marks};
use crate::clock::{angles, format, sample_now};
use crate::time::source;

pub fn run_now_command(options: &DisplayOptions) -> Result<()> {
    log_version!();

    let config = super::load_config(options)?;
    let display = config.display_config();
    let face = config.face_config();

    let parts = sample_now(&display.time_zone, source::global().as_ref())
        .context("Failed to read the current time")?;
    let hands = angles(parts);

    log_block_start!(
        "{} ({}-hour)",
        display.time_zone,
        if display.is_24_hour() { 24 } else { 12 }
    );
    log_indented!("{}", format(parts, &display));

    log_block_start!("Analog face:");
    log_indented!("Hour hand:   {:>7.2}°", hands.hour_deg);
    log_indented!("Minute hand: {:>7.2}°", hands.minute_deg);
    log_indented!("Second hand: {:>7.2}°", hands.second_deg);

    if options.debug_enabled {
        let ticks = tick_marks();
        log_pipe!();
        log_debug!(
            "Dial: {} tick marks, {} major",
            ticks.len(),
            ticks.iter().filter(|t| t.major).count()
        );
    }

    if options.debug_enabled && face.show_numbers {
        log_pipe!();
        log_debug!("Numeral positions for a {} unit face:", face.size);
        for numeral in numeral_positions(face.size) {
            log_indented!("{:>2} at ({:>7.2}, {:>7.2})", numeral.numeral, numeral.x, numeral.y);
        }
    }

    log_pipe!();
    log_info!("{}", describe(parts, &display.time_zone));
    log_end!();

    Ok(())
}

pub fn display_help() {
    log_version!();
    log_block_start!("now - Print the current time");
    log_block_start!("Usage: clockly now [OPTIONS]");
    log_block_start!("Description:");
    log_indented!("Samples the current time once in the configured timezone and");
    log_indented!("prints the digital reading and the analog hand angles.");
    log_block_start!("Examples:");
    log_indented!("# Current time in Tokyo, 12-hour clock");
    log_indented!("clockly now --tz Asia/Tokyo --12h");
    log_end!();
}
