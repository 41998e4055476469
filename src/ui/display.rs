//! Display functions for capability listings and install results
//!
//! All rendering goes through here so commands stay free of styling
//! concerns. Listings are numbered from 1 to match what the selection
//! resolver accepts.

use console::Style;

use crate::domain::{
    BatchReport, CapabilityRecord, InstallOutcome, InstallResult, InstallState, InventorySnapshot,
    Mechanism,
};

fn state_style(state: InstallState) -> Style {
    match state {
        InstallState::Installed => Style::new().green(),
        InstallState::InstallPending => Style::new().yellow(),
        InstallState::Failed => Style::new().red(),
        InstallState::NotInstalled => Style::new().dim(),
    }
}

/// Render a numbered capability listing
pub fn render_snapshot(snapshot: &InventorySnapshot, detailed: bool) {
    if snapshot.is_empty() {
        if snapshot.filter.is_empty() {
            println!("No capabilities found.");
        } else {
            println!("No capabilities matching '{}'.", snapshot.filter);
        }
        return;
    }

    println!("Available capabilities ({}):", snapshot.len());
    println!();

    let width = snapshot.len().to_string().len();
    for (i, record) in snapshot.iter().enumerate() {
        println!(
            "  {:>width$}. {} [{}]",
            i + 1,
            Style::new().bold().apply_to(&record.display_name),
            state_style(record.state).apply_to(record.state.label()),
        );
        if detailed {
            println!("  {:>width$}  {}", "", Style::new().dim().apply_to(&record.id));
        }
    }
}

/// Render one capability's fields
pub fn render_record_detailed(record: &CapabilityRecord) {
    println!(
        "  {}",
        Style::new().bold().yellow().apply_to(&record.display_name)
    );
    println!("    {} {}", Style::new().bold().apply_to("Id:"), record.id);
    println!(
        "    {} {}",
        Style::new().bold().apply_to("State:"),
        state_style(record.state).apply_to(record.state.label()),
    );
}

fn mechanism_label(mechanism: Mechanism) -> &'static str {
    match mechanism {
        Mechanism::Primary => "registry",
        Mechanism::Fallback => "command-line installer",
        Mechanism::None => "none",
    }
}

/// Render one install outcome
pub fn render_outcome(outcome: &InstallOutcome) {
    match outcome.result {
        InstallResult::Succeeded => {
            println!(
                "  {} {} (via {})",
                Style::new().green().apply_to("installed"),
                outcome.capability_id,
                mechanism_label(outcome.mechanism_used),
            );
        }
        InstallResult::AlreadyInstalled => {
            println!(
                "  {} {}",
                Style::new().dim().apply_to("already installed"),
                outcome.capability_id,
            );
        }
        InstallResult::FailedPrimary | InstallResult::FailedFallback => {
            println!(
                "  {} {}",
                Style::new().red().apply_to("failed"),
                outcome.capability_id,
            );
            // Mechanism error text is shown verbatim
            if let Some(ref detail) = outcome.error_detail {
                println!("    {}", Style::new().dim().apply_to(detail));
            }
        }
    }
}

/// Render the batch summary
pub fn render_report(report: &BatchReport) {
    if report.nothing_to_do() {
        println!("Nothing to install: all matching capabilities are already installed.");
        return;
    }

    println!();
    let summary = format!(
        "{} attempted, {} succeeded, {} failed",
        report.attempted, report.succeeded, report.failed
    );
    if report.failed == 0 {
        println!("{}", Style::new().green().apply_to(summary));
    } else {
        println!("{}", Style::new().red().apply_to(summary));
    }
}
