use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    capctl completions bash > ~/.bash_completion.d/capctl\n\n\
                  Generate zsh completions:\n    capctl completions zsh > ~/.zfunc/_capctl\n\n\
                  Generate PowerShell completions:\n    capctl completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
