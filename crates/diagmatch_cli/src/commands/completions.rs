//! Completions command - prints a shell completion script to stdout.

use clap_complete::Shell;

/// Writes the completion script for `shell` to stdout.
pub fn run(shell: Shell) {
    let mut command = crate::cli_command();
    clap_complete::generate(shell, &mut command, "diagmatch", &mut std::io::stdout());
}
