//! Configuration validation functionality.

use anyhow::Result;

use super::Config;
use crate::common::constants::*;

/// Reject values no display can work with.
///
/// Unknown timezones pass here; they are replaced by UTC
/// with a warning when the display settings are built.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(ref timezone) = config.timezone
        && timezone.trim().is_empty()
    {
        anyhow::bail!("timezone must not be empty");
    }

    if let Some(size) = config.size
        && !(MINIMUM_FACE_SIZE..=MAXIMUM_FACE_SIZE).contains(&size)
    {
        anyhow::bail!(
            "size ({}) must be between {} and {}",
            size,
            MINIMUM_FACE_SIZE,
            MAXIMUM_FACE_SIZE
        );
    }

    Ok(())
}
