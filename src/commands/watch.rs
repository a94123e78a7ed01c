//! The `watch` command: a live clock in the terminal.
//!
//! One display subscribes to the refresh scheduler and redraws a single status
//! line on every tick. When stdout is not a terminal each tick is printed on
//! its own line instead.

use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveToColumn,
    execute,
    style::Print,
    terminal::{Clear, ClearType},
    tty::IsTty,
};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use crate::args::{DisplayOptions, SimulateArgs};
use crate::clock::sampler::resolve_timezone;
use crate::clock::{DisplayConfig, TimeParts, angles};
use crate::scheduler::RefreshScheduler;
use crate::signals::setup_signal_handler;
use crate::time::source::{self, SimulatedTimeSource, parse_datetime_in_tz};

pub fn run_watch_command(
    options: &DisplayOptions,
    ticks: Option<u64>,
    simulate: Option<&SimulateArgs>,
) -> Result<()> {
    log_version!();

    let config = super::load_config(options)?;
    let display = config.display_config();

    if let Some(simulate) = simulate {
        let simulation = build_simulation(simulate, &display.time_zone)?;
        source::init_time_source(Arc::new(simulation));
        log_block_start!(
            "Simulating {} to {} in {}",
            simulate.start_time,
            simulate.end_time,
            display.time_zone
        );
    }

    let signal_state = setup_signal_handler(options.debug_enabled)?;

    log_block_start!("Watching {} (Ctrl+C to stop)", display.time_zone);

    let mut scheduler =
        RefreshScheduler::new(source::global()).with_debug(options.debug_enabled);

    let interactive = std::io::stdout().is_tty();
    let delivered = Rc::new(Cell::new(0u64));
    let stop = Arc::clone(&signal_state.stop);

    let on_tick = {
        let display = display.clone();
        let delivered = Rc::clone(&delivered);
        move |parts: TimeParts| {
            render(parts, &display, interactive);

            delivered.set(delivered.get() + 1);
            if ticks.is_some_and(|limit| delivered.get() >= limit) {
                stop.store(true, Ordering::SeqCst);
            }
        }
    };

    let on_teardown = move || {
        if interactive {
            // Keep the last reading on screen
            let _ = execute!(std::io::stdout(), Print("\n"));
        }
    };

    scheduler
        .subscribe(display.clone(), on_tick, on_teardown)
        .context("Failed to start the live clock")?;

    let report = scheduler.run(&signal_state.stop);
    scheduler.unsubscribe_all();

    if options.debug_enabled {
        log_pipe!();
        log_debug!(
            "Delivered {} updates ({} failed samples)",
            report.delivered,
            report.failures
        );
    }

    log_decorated!("Stopped after {} updates", delivered.get());
    log_end!();

    Ok(())
}

/// Simulated clock running between two wall-clock times of `time_zone`.
pub fn build_simulation(simulate: &SimulateArgs, time_zone: &str) -> Result<SimulatedTimeSource> {
    let tz = resolve_timezone(time_zone)?;

    let start = parse_datetime_in_tz(&simulate.start_time, tz)
        .map_err(anyhow::Error::msg)
        .context("Invalid simulation start time")?;
    let end = parse_datetime_in_tz(&simulate.end_time, tz)
        .map_err(anyhow::Error::msg)
        .context("Invalid simulation end time")?;

    if end <= start {
        anyhow::bail!(
            "Simulation end time ({}) must be after start time ({})",
            simulate.end_time,
            simulate.start_time
        );
    }

    Ok(SimulatedTimeSource::new(start, end, simulate.multiplier))
}

fn render(parts: TimeParts, display: &DisplayConfig, interactive: bool) {
    let line = super::status_line(parts, display, &angles(parts));

    if interactive {
        // Nowhere left to report a failed write to the terminal
        let _ = execute!(
            std::io::stdout(),
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(format!("┃   {line}"))
        );
    } else {
        log_indented!("{}", line);
    }
}

pub fn display_help() {
    log_version!();
    log_block_start!("watch - Live clock in the terminal");
    log_block_start!("Usage: clockly watch [OPTIONS]");
    log_block_start!("Options:");
    log_indented!("--for <seconds>                    Stop after this many updates");
    log_indented!("--simulate <start> <end> [speed]   Run against simulated time");
    log_indented!("                                   (\"YYYY-MM-DD HH:MM:SS\" in the display timezone,");
    log_indented!("                                   speed 0 = as fast as possible)");
    log_block_start!("Description:");
    log_indented!("Refreshes the digital time and analog hand angles once per");
    log_indented!("second until Ctrl+C is pressed.");
    log_block_start!("Examples:");
    log_indented!("# Watch New York time for ten seconds");
    log_indented!("clockly watch --tz America/New_York --for 10");
    log_pipe!();
    log_indented!("# Replay the US spring-forward night at one minute per second");
    log_indented!(
        "clockly watch --tz America/New_York --simulate \"2024-03-10 01:00:00\" \"2024-03-10 04:00:00\" 60"
    );
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::source::TimeSource;

    fn simulate(start: &str, end: &str) -> SimulateArgs {
        SimulateArgs {
            start_time: start.to_string(),
            end_time: end.to_string(),
            multiplier: 0.0,
        }
    }

    #[test]
    fn test_build_simulation_uses_display_timezone() {
        let source = build_simulation(
            &simulate("2024-01-15 09:30:00", "2024-01-15 10:30:00"),
            "Asia/Kolkata",
        )
        .unwrap();
        assert_eq!(source.now().to_rfc3339(), "2024-01-15T04:00:00+00:00");
        assert!(source.is_simulated());
    }

    #[test]
    fn test_build_simulation_rejects_bad_ranges() {
        assert!(build_simulation(&simulate("2024-01-15 10:00:00", "2024-01-15 09:00:00"), "UTC").is_err());
        assert!(build_simulation(&simulate("yesterday", "2024-01-15 09:00:00"), "UTC").is_err());
        assert!(build_simulation(&simulate("2024-01-15 08:00:00", "2024-01-15 09:00:00"), "Nowhere").is_err());
    }
}
