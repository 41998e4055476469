//! Shared helpers for command implementations

use std::path::PathBuf;

use crate::config::Settings;
use crate::error::Result;

/// Load settings and compute the effective filter pattern.
///
/// A `--filter` flag wins over the configured default; with neither, the
/// empty pattern matches every capability.
pub fn load_settings_and_filter(
    config: Option<PathBuf>,
    flag_filter: Option<String>,
) -> Result<(Settings, String)> {
    let settings = Settings::load(config.as_deref())?;
    let filter = flag_filter
        .or_else(|| settings.filter.clone())
        .unwrap_or_default();
    Ok((settings, filter))
}
