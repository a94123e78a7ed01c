//! clockly binary entry point.
//!
//! Parses the command line and dispatches to the command handlers in
//! `clockly::commands`. Errors are printed in the logger's style and turned
//! into a non-zero exit code.

use clockly::args::{CliAction, ParsedArgs};
use clockly::commands::{help, now, watch, zones};
use clockly::common::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use clockly::{log_end, log_error, log_indented, log_pipe, log_warning_standalone};

fn main() {
    let parsed = ParsedArgs::parse(std::env::args());

    let result = match parsed.action {
        CliAction::Now(options) => now::run_now_command(&options),
        CliAction::Watch {
            options,
            ticks,
            simulate,
        } => watch::run_watch_command(&options, ticks, simulate.as_ref()),
        CliAction::Zones(options) => zones::run_zones_command(&options),
        CliAction::Help { command } => help::run_help_command(command.as_deref()),
        CliAction::ShowHelp => {
            help::display_usage();
            Ok(())
        }
        CliAction::ShowVersion => {
            println!("clockly {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        CliAction::ShowHelpDueToError { reason } => {
            log_warning_standalone!("{}", reason);
            help::display_usage();
            std::process::exit(EXIT_FAILURE);
        }
    };

    match result {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(e) => {
            log_pipe!();
            log_error!("{}", e);
            for cause in e.chain().skip(1) {
                log_indented!("{}", cause);
            }
            log_end!();
            std::process::exit(EXIT_FAILURE);
        }
    }
}
