//! Signal handling for the live clock.
//!
//! SIGINT, SIGTERM and SIGHUP clear a shared running flag. The clock loop
//! checks the flag between ticks, so it stops within one refresh period and
//! still runs the subscribers' teardown.

use anyhow::{Context, Result};
use signal_hook::{
    consts::signal::{SIGHUP, SIGINT, SIGTERM},
    iterator::Signals,
};
use std::{
    sync::Arc,
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

/// Shared stop flag, set once a termination signal arrives.
pub struct SignalState {
    pub stop: Arc<AtomicBool>,
}

/// Install handlers for the termination signals.
pub fn setup_signal_handler(debug_enabled: bool) -> Result<SignalState> {
    let stop = Arc::new(AtomicBool::new(false));
    let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP])
        .context("Failed to register signal handlers")?;

    let stop_flag = Arc::clone(&stop);
    thread::Builder::new()
        .name("clockly-signals".to_string())
        .spawn(move || {
            for signal in signals.forever() {
                if debug_enabled {
                    let name = match signal {
                        SIGINT => "SIGINT",
                        SIGTERM => "SIGTERM",
                        _ => "SIGHUP",
                    };
                    log_pipe!();
                    log_debug!("Received {name}, stopping");
                }
                stop_flag.store(true, Ordering::SeqCst);
            }
        })
        .context("Failed to spawn signal handler thread")?;

    Ok(SignalState { stop })
}
