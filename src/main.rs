//! capctl - optional capability installer
//!
//! A command line tool for enumerating, inspecting and installing the
//! host's optional capabilities (RSAT tooling and friends), with a
//! primary/fallback install strategy and per-item failure reporting.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod installer;
mod inventory;
mod preflight;
mod progress;
mod provider;
mod selection;
mod ui;

use cli::{Cli, Commands};
use error::Result;

/// Installs mutate shared host state and download payloads on demand, so
/// they require elevation and connectivity up front. Read-only commands
/// (list, show, version, completions) run without either.
fn check_install_preconditions() -> Result<()> {
    preflight::ensure_elevated()?;
    preflight::ensure_connectivity()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if matches!(cli.command, Commands::Install(_)) {
        if let Err(e) = check_install_preconditions() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let result = match cli.command {
        Commands::List(args) => commands::list::run(cli.config, args),
        Commands::Show(args) => commands::show::run(cli.config, args),
        Commands::Install(args) => commands::install::run(cli.config, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
