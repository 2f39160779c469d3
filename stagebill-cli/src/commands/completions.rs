//! Shell completion scripts

use std::io;

use anyhow::Result;
use clap::{Args, Command, ValueEnum};
use clap_complete::{generate, Shell as CompletionShell};

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

impl From<Shell> for CompletionShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => CompletionShell::Bash,
            Shell::Zsh => CompletionShell::Zsh,
            Shell::Fish => CompletionShell::Fish,
            Shell::PowerShell => CompletionShell::PowerShell,
            Shell::Elvish => CompletionShell::Elvish,
        }
    }
}

/// Write the completion script for `cmd` to stdout
pub fn run_completions(args: CompletionsArgs, mut cmd: Command) -> Result<()> {
    let bin_name = cmd.get_name().to_string();
    generate(
        CompletionShell::from(args.shell),
        &mut cmd,
        bin_name,
        &mut io::stdout(),
    );
    Ok(())
}
