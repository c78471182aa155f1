//! Shell completion generation.

use std::io;

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};

const BIN_NAME: &str = "laracrud";

pub fn execute(args: CompletionsArgs) -> crate::error::CliResult<()> {
    let mut out = io::stdout();
    match args.shell {
        Shell::Bash => write_script(shells::Bash, &mut out),
        Shell::Zsh => write_script(shells::Zsh, &mut out),
        Shell::Fish => write_script(shells::Fish, &mut out),
        Shell::PowerShell => write_script(shells::PowerShell, &mut out),
        Shell::Elvish => write_script(shells::Elvish, &mut out),
    }
    Ok(())
}

fn write_script(shell: impl Generator, out: &mut dyn io::Write) {
    generate(shell, &mut Cli::command(), BIN_NAME, out);
}
