//! Configuration loading functionality.
//!
//! Resolves where `clockly.toml` lives and turns it into a validated [`Config`].

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::Config;
use super::validation::validate_config;
use crate::common::constants::*;

/// Global configuration directory, set once at startup
static CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Set the configuration directory for the current process.
/// This can only be called once, typically at startup.
pub fn set_config_dir(dir: Option<String>) -> Result<()> {
    CONFIG_DIR
        .set(dir.map(PathBuf::from))
        .map_err(|_| anyhow::anyhow!("Configuration directory already set"))
}

/// Get the custom configuration directory if one was set.
pub fn get_custom_config_dir() -> Option<PathBuf> {
    CONFIG_DIR.get().and_then(|d| d.clone())
}

/// Path of `clockly.toml`, whether or not it exists.
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(custom_dir) = get_custom_config_dir() {
        return Ok(custom_dir.join(CONFIG_FILE_NAME));
    }

    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load configuration from the resolved path.
///
/// Returns the configuration together with the file it came from, or the
/// defaults and `None` when there is no file.
pub fn load() -> Result<(Config, Option<PathBuf>)> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        return Ok((Config::default(), None));
    }

    let config = load_from_path(&config_path)?;
    Ok((config, Some(config_path)))
}

/// Load and validate configuration from a specific file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

    let config = parse_config(&content)
        .with_context(|| format!("Failed to parse configuration at {}", path.display()))?;

    Ok(config)
}

/// Parse and validate configuration text.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).context("Invalid TOML in configuration")?;
    validate_config(&config)?;
    Ok(config)
}
