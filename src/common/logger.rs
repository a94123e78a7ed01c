//! Structured terminal logging with box-drawing decorations.
//!
//! Every line clockly prints goes through the macros in this module so that
//! command output, warnings and live clock status share one visual layout:
//!
//! ```text
//! ┏ clockly v0.1.0 ━━╸
//! ┃
//! ┣ Loaded default configuration
//! ┃   Timezone: Asia/Kolkata
//! ┣[WARNING] Unknown timezone 'Mars/Base', using UTC
//! ╹
//! ```
//!
//! Logging can be switched off at runtime, which the test suites use to keep
//! their output quiet.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

/// Runtime switches and helpers shared by the logging macros.
///
/// ## Conventions
///
/// - `log_block_start!` opens a new block: an empty `┃` spacer, then `┣ message`.
/// - `log_decorated!` continues a block with `┣ message`.
/// - `log_indented!` prints detail lines as `┃   message`.
/// - `log_pipe!` inserts a bare `┃` before a semantic message that starts
///   a block of its own.
/// - `log_version!` and `log_end!` frame a whole run.
/// - `log_info!`, `log_warning!`, `log_error!` and `log_debug!`
///   print a colored `[LEVEL]` tag instead of plain decoration.
pub struct Log;

impl Log {
    /// Enable or disable all logging output.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Timestamp prefix shown while running against simulated time.
    ///
    /// Returns `[HH:MM:SS] ` in simulated local time, or an empty string when
    /// the real clock is in use.
    pub fn get_timestamp_prefix() -> String {
        // Avoid initializing the global source just to print a log line
        if crate::time::source::is_initialized() && crate::time::source::is_simulated() {
            let now = crate::time::source::now().with_timezone(&chrono::Local);
            format!("[{}] ", now.format("%H:%M:%S"))
        } else {
            String::new()
        }
    }
}

// Public so the exported macros can reach it
pub fn write_output(text: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(text.as_bytes());
    let _ = stdout.flush();
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_line {
    ($layout:literal, $($arg:tt)+) => {{
        use $crate::common::logger::Log;
        if Log::is_enabled() {
            let prefix = Log::get_timestamp_prefix();
            let message = format!($($arg)+);
            let formatted = format!($layout, prefix = prefix, message = message);
            $crate::common::logger::write_output(&formatted);
        }
    }};
}

/// Log a decorated message as part of an existing block.
#[macro_export]
macro_rules! log_decorated {
    ($($arg:tt)+) => {
        $crate::__log_line!("{prefix}┣ {message}\n", $($arg)+)
    };
}

/// Log an indented detail line.
#[macro_export]
macro_rules! log_indented {
    ($($arg:tt)+) => {
        $crate::__log_line!("{prefix}┃   {message}\n", $($arg)+)
    };
}

/// Log a bare pipe for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {
        $crate::__log_line!("{prefix}┃{message}\n", "")
    };
}

/// Start a new block of related lines.
#[macro_export]
macro_rules! log_block_start {
    ($($arg:tt)+) => {
        $crate::__log_line!("{prefix}┃\n{prefix}┣ {message}\n", $($arg)+)
    };
}

/// Log the application version header.
#[macro_export]
macro_rules! log_version {
    () => {
        $crate::__log_line!(
            "{prefix}┏ clockly v{message} ━━╸\n",
            "{}",
            env!("CARGO_PKG_VERSION")
        )
    };
}

/// Log the final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {
        $crate::__log_line!("{prefix}╹{message}\n", "")
    };
}

/// Log a warning in yellow.
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)+) => {
        $crate::__log_line!("{prefix}┣[\x1b[33mWARNING\x1b[0m] {message}\n", $($arg)+)
    };
}

/// Log a warning without any box decoration, for output before a run header.
#[macro_export]
macro_rules! log_warning_standalone {
    ($($arg:tt)+) => {
        $crate::__log_line!("{prefix}[\x1b[33mWARNING\x1b[0m] {message}\n", $($arg)+)
    };
}

/// Log an error in red.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::__log_line!("{prefix}┣[\x1b[31mERROR\x1b[0m] {message}\n", $($arg)+)
    };
}

/// Log an informational message in green.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::__log_line!("{prefix}┣[\x1b[32mINFO\x1b[0m] {message}\n", $($arg)+)
    };
}

/// Log a debug message in green.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::__log_line!("{prefix}┣[\x1b[32mDEBUG\x1b[0m] {message}\n", $($arg)+)
    };
}

