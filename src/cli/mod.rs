//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - list: List command arguments
//! - show: Show command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod list;
pub mod show;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;
pub use show::ShowArgs;

/// capctl - optional capability installer
///
/// Enumerate, inspect and install the host's optional capabilities.
#[derive(Parser, Debug)]
#[command(
    name = "capctl",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Interactive installer for optional OS capabilities",
    long_about = "capctl enumerates the host's optional capabilities (RSAT tooling and friends), \
                  shows their install state, and installs them through the capability registry \
                  with a command-line installer as fallback.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  capctl list --filter rsat       \x1b[90m# List RSAT capabilities and states\x1b[0m\n   \
                  capctl install                  \x1b[90m# Pick one capability from the listing\x1b[0m\n   \
                  capctl install 3                \x1b[90m# Install entry 3 of the listing\x1b[0m\n   \
                  capctl install --all --yes      \x1b[90m# Install everything not yet installed\x1b[0m\n   \
                  capctl show 3                   \x1b[90m# Show details for entry 3\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to capctl.yaml in the user config dir)
    #[arg(long, global = true, env = "CAPCTL_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List capabilities and their install states
    List(ListArgs),

    /// Show details for one capability
    Show(ShowArgs),

    /// Install capabilities
    Install(InstallArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["capctl", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_cli_parsing_show() {
        let cli = Cli::try_parse_from(["capctl", "show", "2"]).unwrap();
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.token, "2");
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_parsing_install_no_token() {
        let cli = Cli::try_parse_from(["capctl", "install"]).unwrap();
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.token, None);
                assert!(!args.all);
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["capctl", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_config_flag() {
        let cli = Cli::try_parse_from(["capctl", "--config", "/tmp/capctl.yaml", "list"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/capctl.yaml")));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["capctl", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
