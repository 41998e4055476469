//! Show command implementation

use std::path::PathBuf;

use crate::cli::ShowArgs;
use crate::commands::helpers::load_settings_and_filter;
use crate::error::{CapctlError, Result};
use crate::inventory;
use crate::provider::host::HostProvider;
use crate::selection;
use crate::ui;

/// Run show command
pub fn run(config: Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let (settings, filter) = load_settings_and_filter(config, args.filter)?;

    let provider = HostProvider::new();
    let snapshot = inventory::fetch(&provider, &filter)?;

    match selection::resolve(&snapshot, &args.token, &settings.cancel_token) {
        Ok(record) => {
            ui::render_record_detailed(record);
            Ok(())
        }
        // Cancel token given on the command line: nothing to show
        Err(CapctlError::SelectionCancelled) => Ok(()),
        Err(e) => Err(e),
    }
}
