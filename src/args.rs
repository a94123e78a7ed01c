//! Command-line argument parsing and processing.
//!
//! Arguments are parsed into a [`CliAction`] that `main` dispatches on.
//! Options may appear before or after the command name:
//!
//! ```text
//! clockly [OPTIONS] [COMMAND] [ARGS]
//! ```

use crate::config::{HourFormatSetting, Overrides};

/// Options shared by the commands that display a clock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayOptions {
    pub debug_enabled: bool,
    pub config_dir: Option<String>,
    pub overrides: Overrides,
}

/// Run the live clock against simulated time.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulateArgs {
    /// "YYYY-MM-DD HH:MM:SS" in the display timezone
    pub start_time: String,
    pub end_time: String,
    /// 0.0 runs as fast as possible
    pub multiplier: f64,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Print the current time once (default command)
    Now(DisplayOptions),
    /// Keep redrawing the clock until interrupted
    Watch {
        options: DisplayOptions,
        /// Stop after this many refreshes
        ticks: Option<u64>,
        simulate: Option<SimulateArgs>,
    },
    /// List the timezone presets
    Zones(DisplayOptions),
    /// Detailed help for one command, or general help
    Help { command: Option<String> },
    /// Display usage information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show usage because the arguments could not be understood
    ShowHelpDueToError { reason: String },
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

#[derive(Clone, Copy, PartialEq)]
enum Command {
    Now,
    Watch,
    Zones,
    Help,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "now" | "n" => Some(Command::Now),
            "watch" | "w" => Some(Command::Watch),
            "zones" | "z" => Some(Command::Zones),
            "help" | "h" => Some(Command::Help),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Command::Now => "now",
            Command::Watch => "watch",
            Command::Zones => "zones",
            Command::Help => "help",
        }
    }
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments, program name first
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let action = match Self::parse_action(&args_vec) {
            Ok(action) => action,
            Err(reason) => CliAction::ShowHelpDueToError { reason },
        };

        ParsedArgs { action }
    }

    fn parse_action(args: &[String]) -> Result<CliAction, String> {
        let mut options = DisplayOptions::default();
        let mut command: Option<Command> = None;
        let mut positional: Vec<String> = Vec::new();
        let mut ticks: Option<u64> = None;
        let mut simulate: Option<SimulateArgs> = None;
        let mut display_help = false;
        let mut display_version = false;

        let mut idx = 0;
        while idx < args.len() {
            let arg = args[idx].as_str();
            match arg {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => options.debug_enabled = true,
                "--12h" => options.overrides.hour_format = Some(HourFormatSetting::Twelve),
                "--24h" => options.overrides.hour_format = Some(HourFormatSetting::TwentyFour),
                "--seconds" => options.overrides.show_seconds = Some(true),
                "--no-seconds" => options.overrides.show_seconds = Some(false),
                "--tz" | "-z" => {
                    idx += 1;
                    let zone = args.get(idx).ok_or("--tz requires a timezone")?;
                    options.overrides.timezone = Some(zone.clone());
                }
                "--config" | "-c" => {
                    idx += 1;
                    let dir = args.get(idx).ok_or("--config requires a directory")?;
                    options.config_dir = Some(dir.clone());
                }
                "--for" => {
                    idx += 1;
                    let value = args.get(idx).ok_or("--for requires a number of seconds")?;
                    let parsed = value
                        .parse::<u64>()
                        .ok()
                        .filter(|n| *n > 0)
                        .ok_or_else(|| format!("Invalid --for value: {value} (expected 1 or more)"))?;
                    ticks = Some(parsed);
                }
                "--simulate" => {
                    let start_time = args
                        .get(idx + 1)
                        .ok_or("--simulate requires a start and end time")?
                        .clone();
                    let end_time = args
                        .get(idx + 2)
                        .ok_or("--simulate requires a start and end time")?
                        .clone();
                    idx += 2;

                    // Optional multiplier
                    let multiplier = match args.get(idx + 1).map(|m| m.parse::<f64>()) {
                        Some(Ok(m)) => {
                            idx += 1;
                            m
                        }
                        _ => 0.0,
                    };

                    simulate = Some(SimulateArgs {
                        start_time,
                        end_time,
                        multiplier,
                    });
                }
                flag if flag.starts_with('-') => {
                    return Err(format!("Unknown option: {flag}"));
                }
                word => {
                    if command.is_none() && positional.is_empty() {
                        command = Some(
                            Command::from_arg(word)
                                .ok_or_else(|| format!("Unknown command: {word}"))?,
                        );
                    } else {
                        positional.push(word.to_string());
                    }
                }
            }
            idx += 1;
        }

        if display_version {
            return Ok(CliAction::ShowVersion);
        }

        if display_help {
            return Ok(match command {
                None => CliAction::ShowHelp,
                Some(other) => CliAction::Help {
                    command: Some(other.name().to_string()),
                },
            });
        }

        let command = command.unwrap_or(Command::Now);

        if command != Command::Watch && (ticks.is_some() || simulate.is_some()) {
            return Err("--for and --simulate only apply to the watch command".to_string());
        }

        match command {
            Command::Help => {
                if positional.len() > 1 {
                    return Err("help takes at most one command".to_string());
                }
                Ok(CliAction::Help {
                    command: positional.into_iter().next(),
                })
            }
            _ if !positional.is_empty() => {
                Err(format!("Unexpected argument: {}", positional[0]))
            }
            Command::Now => Ok(CliAction::Now(options)),
            Command::Zones => Ok(CliAction::Zones(options)),
            Command::Watch => Ok(CliAction::Watch {
                options,
                ticks,
                simulate,
            }),
        }
    }
}
