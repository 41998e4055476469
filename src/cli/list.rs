use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all capabilities:\n    capctl list\n\n\
                  List RSAT tooling only:\n    capctl list --filter rsat\n\n\
                  Include full capability ids:\n    capctl list --detailed\n\n\
                  Machine-readable output:\n    capctl list --json")]
pub struct ListArgs {
    /// Filter pattern (case-insensitive substring of the capability id)
    #[arg(long, short = 'f', value_name = "PATTERN")]
    pub filter: Option<String>,

    /// Show full capability ids
    #[arg(long)]
    pub detailed: bool,

    /// Output the snapshot as JSON
    #[arg(long, conflicts_with = "detailed")]
    pub json: bool,
}
