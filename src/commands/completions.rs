//! Shell completions

use clap::CommandFactory;

use crate::error::{Result, config};

/// Write a completion script for `shell` to `out`
pub fn run(shell: &str, out: &mut dyn std::io::Write) -> Result<()> {
    let shell = match shell.to_lowercase().as_str() {
        "bash" => clap_complete::Shell::Bash,
        "elvish" => clap_complete::Shell::Elvish,
        "fish" => clap_complete::Shell::Fish,
        "powershell" | "pwsh" => clap_complete::Shell::PowerShell,
        "zsh" => clap_complete::Shell::Zsh,
        _ => return Err(config::unknown_shell(shell)),
    };

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "jtfiles", out);

    Ok(())
}
