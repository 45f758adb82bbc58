//! `completions` subcommand.

use std::io;

use clap::CommandFactory;
use clap_complete::{Shell as CompletionShell, generate};

use crate::cli::{Cli, Shell};

fn completion_shell(shell: Shell) -> CompletionShell {
  match shell {
    Shell::Bash => CompletionShell::Bash,
    Shell::Zsh => CompletionShell::Zsh,
    Shell::Fish => CompletionShell::Fish,
    Shell::Powershell => CompletionShell::PowerShell,
    Shell::Elvish => CompletionShell::Elvish,
  }
}

/// Write the completion script for `shell` to stdout.
pub(crate) fn handle_completions_command(shell: Shell) {
  let mut cmd = Cli::command();
  let bin_name = cmd.get_name().to_string();
  generate(completion_shell(shell), &mut cmd, bin_name, &mut io::stdout());
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bash_completions_mention_subcommands() {
    let mut cmd = Cli::command();
    let mut buffer = Vec::new();

    generate(completion_shell(Shell::Bash), &mut cmd, "rakuyu-feed", &mut buffer);

    let script = String::from_utf8(buffer).unwrap();
    assert!(script.contains("news"));
    assert!(script.contains("documents"));
    assert!(script.contains("--api-url"));
  }
}
