//! Help command implementation for clockly.
//!
//! Dispatches to command-specific help or prints the general overview.

use anyhow::Result;

/// Show brief usage for a command (used for error messages)
pub fn show_command_usage(command: Option<&str>) {
    match command {
        Some("now") | Some("n") => log_block_start!("Usage: clockly now [OPTIONS]"),
        Some("watch") | Some("w") => log_block_start!("Usage: clockly watch [OPTIONS]"),
        Some("zones") | Some("z") => log_block_start!("Usage: clockly zones [OPTIONS]"),
        _ => log_block_start!("Usage: clockly [OPTIONS] [COMMAND]"),
    }
}

/// Run the help command (dispatcher)
///
/// # Arguments
/// * `command` - Optional command name to get help for (None = general help)
pub fn run_help_command(command: Option<&str>) -> Result<()> {
    match command {
        None => display_general_help(),
        Some("now") | Some("n") => super::now::display_help(),
        Some("watch") | Some("w") => super::watch::display_help(),
        Some("zones") | Some("z") => super::zones::display_help(),
        Some("help") | Some("h") => display_help_help(),
        Some(unknown) => {
            log_warning_standalone!("Unknown command: {}", unknown);
            display_general_help();
        }
    }
    Ok(())
}

/// Full usage, shown for `--help`
pub fn display_usage() {
    log_version!();
    show_command_usage(None);
    log_block_start!("Commands:");
    log_indented!("now, n            Print the current time (default)");
    log_indented!("watch, w          Live clock, refreshed every second");
    log_indented!("zones, z          List timezone presets");
    log_indented!("help, h [COMMAND] Show detailed help for a command");
    log_block_start!("Options:");
    log_indented!("-z, --tz <zone>      IANA timezone, e.g. Europe/London");
    log_indented!("    --12h / --24h    Hour format of the digital clock");
    log_indented!("    --seconds        Show the seconds field");
    log_indented!("    --no-seconds     Hide the seconds field");
    log_indented!("-c, --config <dir>   Read clockly.toml from this directory");
    log_indented!("-d, --debug          Show detailed output");
    log_indented!("-h, --help           Print help");
    log_indented!("-V, --version        Print version");
    log_end!();
}

fn display_general_help() {
    log_version!();
    log_block_start!("Available Commands:");
    log_indented!("now, n            Print the current time (default)");
    log_indented!("watch, w          Live clock, refreshed every second");
    log_indented!("zones, z          List timezone presets");
    log_indented!("help, h [COMMAND] Show detailed help for a command");
    log_pipe!();
    log_info!("Use 'clockly help <command>' to see detailed help for a specific command.");
    log_indented!("Use 'clockly --help' to see all options and general usage.");
    log_end!();
}

fn display_help_help() {
    log_version!();
    log_block_start!("help - Display help information");
    log_block_start!("Usage: clockly help [COMMAND]");
    log_block_start!("Arguments:");
    log_indented!("COMMAND  Optional command to get help for");
    log_indented!("         If omitted, shows general help");
    log_end!();
}
