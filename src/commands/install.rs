//! Install command implementation
//!
//! Two paths share the same orchestration core: a single-item path where
//! the user picks one entry from the listing, and a batch path that
//! installs every capability not yet installed. Install failures are
//! reported per item and never abort a run.

use std::path::PathBuf;

use inquire::{Confirm, Text};

use crate::cli::InstallArgs;
use crate::commands::helpers::load_settings_and_filter;
use crate::domain::{BatchReport, CapabilityRecord, InstallOutcome, InventorySnapshot};
use crate::error::{CapctlError, Result};
use crate::installer::{BatchInstallCoordinator, CapabilityInstaller};
use crate::inventory;
use crate::progress::ProgressDisplay;
use crate::provider::fallback::DismFallback;
use crate::provider::host::HostProvider;
use crate::selection;
use crate::ui;

/// Run install command
pub fn run(config: Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let (settings, filter) = load_settings_and_filter(config, args.filter.clone())?;

    let mut provider = HostProvider::new();
    let snapshot = inventory::fetch(&provider, &filter)?;

    if snapshot.is_empty() {
        ui::render_snapshot(&snapshot, false);
        return Ok(());
    }

    if args.all {
        return run_batch(&mut provider, &snapshot, args.yes);
    }

    let record = match args.token {
        Some(ref token) => selection::resolve(&snapshot, token, &settings.cancel_token)?.clone(),
        None => match prompt_for_selection(&snapshot, &settings.cancel_token)? {
            Some(record) => record,
            None => return Ok(()),
        },
    };

    run_single(&mut provider, &record)
}

/// Show the listing and prompt until the token resolves or the user
/// cancels. Invalid tokens re-prompt; cancellation returns `None`.
fn prompt_for_selection(
    snapshot: &InventorySnapshot,
    cancel_token: &str,
) -> Result<Option<CapabilityRecord>> {
    ui::render_snapshot(snapshot, false);
    println!();

    let prompt = format!(
        "Capability to install (1-{}, '{}' to cancel):",
        snapshot.len(),
        cancel_token
    );

    loop {
        let token = match Text::new(&prompt).prompt() {
            Ok(token) => token,
            Err(e) => match CapctlError::from(e) {
                CapctlError::SelectionCancelled => return Ok(None),
                other => return Err(other),
            },
        };

        match selection::resolve(snapshot, &token, cancel_token) {
            Ok(record) => return Ok(Some(record.clone())),
            Err(CapctlError::SelectionCancelled) => return Ok(None),
            Err(e @ CapctlError::InvalidSelection { .. }) => {
                eprintln!("{e}");
            }
            Err(e) => return Err(e),
        }
    }
}

fn run_single(provider: &mut HostProvider, record: &CapabilityRecord) -> Result<()> {
    // Installed entries never reach the install mechanisms
    if record.is_installed() {
        ui::render_outcome(&InstallOutcome::already_installed(&record.id));
        return Ok(());
    }

    println!("Installing {}...", record.display_name);

    let mut fallback = DismFallback::new();
    let mut installer = CapabilityInstaller::new(provider, &mut fallback);
    let outcome = installer.install(record);
    ui::render_outcome(&outcome);
    Ok(())
}

fn run_batch(provider: &mut HostProvider, snapshot: &InventorySnapshot, yes: bool) -> Result<()> {
    let pending = snapshot.pending().len();
    if pending == 0 {
        ui::render_report(&BatchReport::default());
        return Ok(());
    }

    if !yes && !confirm_batch(pending)? {
        return Ok(());
    }

    let mut fallback = DismFallback::new();
    let mut installer = CapabilityInstaller::new(provider, &mut fallback);
    let mut coordinator = BatchInstallCoordinator::new(&mut installer);

    let progress = ProgressDisplay::new(pending as u64);
    let report = coordinator.run_all_with(snapshot, |record, _| {
        progress.update(&record.display_name);
        progress.inc();
    });
    progress.finish();

    for outcome in &report.outcomes {
        ui::render_outcome(outcome);
    }
    ui::render_report(&report);
    Ok(())
}

fn confirm_batch(pending: usize) -> Result<bool> {
    let prompt = match pending {
        1 => "Install 1 capability?".to_string(),
        n => format!("Install {n} capabilities?"),
    };

    match Confirm::new(&prompt).with_default(false).prompt() {
        Ok(confirmed) => Ok(confirmed),
        Err(e) => match CapctlError::from(e) {
            CapctlError::SelectionCancelled => Ok(false),
            other => Err(other),
        },
    }
}
