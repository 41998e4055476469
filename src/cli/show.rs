use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show entry 3 of the listing:\n    capctl show 3\n\n\
                  Show within a filtered listing:\n    capctl show 1 --filter rsat.dns")]
pub struct ShowArgs {
    /// Listing index to show (1-based, matching `capctl list`)
    pub token: String,

    /// Filter pattern (case-insensitive substring of the capability id)
    #[arg(long, short = 'f', value_name = "PATTERN")]
    pub filter: Option<String>,
}
