//! List command implementation
//!
//! Lists capabilities matching the filter with their install states,
//! numbered to match what `install` and `show` accept.

use std::path::PathBuf;

use crate::cli::ListArgs;
use crate::commands::helpers::load_settings_and_filter;
use crate::error::{CapctlError, Result};
use crate::inventory;
use crate::provider::host::HostProvider;
use crate::ui;

/// Run list command
pub fn run(config: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let (_, filter) = load_settings_and_filter(config, args.filter)?;

    let provider = HostProvider::new();
    let snapshot = inventory::fetch(&provider, &filter)?;

    if args.json {
        let json = serde_json::to_string_pretty(&snapshot).map_err(|e| CapctlError::IoError {
            message: e.to_string(),
        })?;
        println!("{json}");
        return Ok(());
    }

    ui::render_snapshot(&snapshot, args.detailed);
    Ok(())
}
