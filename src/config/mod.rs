//! User configuration
//!
//! Settings come from an optional `capctl.yaml` in the user config
//! directory (or a path given with `--config` / `CAPCTL_CONFIG`). An
//! absent default file means defaults; an explicitly named file must
//! exist and parse.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, config_parse_failed, config_read_failed};
use crate::selection::DEFAULT_CANCEL_TOKEN;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Default filter pattern applied when no --filter is given
    #[serde(default)]
    pub filter: Option<String>,

    /// Token that cancels an interactive selection
    #[serde(default = "default_cancel_token")]
    pub cancel_token: String,
}

fn default_cancel_token() -> String {
    DEFAULT_CANCEL_TOKEN.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            filter: None,
            cancel_token: default_cancel_token(),
        }
    }
}

impl Settings {
    /// Load settings, preferring an explicit path over the default
    /// location. Only the explicit path is required to exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;
        serde_yaml::from_str(&text)
            .map_err(|e| config_parse_failed(path.display().to_string(), e.to_string()))
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("capctl").join("capctl.yaml"))
}
