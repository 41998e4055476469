use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Pick a capability interactively:\n    capctl install\n\n\
                   Install entry 3 of the listing:\n    capctl install 3\n\n\
                   Install every missing capability:\n    capctl install --all\n\n\
                   Batch install without confirmation:\n    capctl install --all --yes")]
pub struct InstallArgs {
    /// Listing index to install (1-based). If not provided, shows the
    /// listing and prompts for a selection.
    pub token: Option<String>,

    /// Install every capability that is not yet installed
    #[arg(long, conflicts_with = "token")]
    pub all: bool,

    /// Filter pattern (case-insensitive substring of the capability id)
    #[arg(long, short = 'f', value_name = "PATTERN")]
    pub filter: Option<String>,

    /// Skip the confirmation prompt before a batch install
    #[arg(long, short = 'y')]
    pub yes: bool,
}
