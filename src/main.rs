//! jtfiles - FPGA core file list generator
//!
//! Resolves the YAML manifests describing a core, the modules it uses and the
//! JTFRAME framework into one sorted file list, written as a Quartus .qip file or
//! as a simulator file list.

use clap::Parser;

mod cli;
mod collector;
mod commands;
mod config;
mod emit;
mod error;
mod manifest;
mod origin;
mod path_utils;
mod resolver;
mod ui;

use cli::Cli;
use error::Result;

fn run(cli: &Cli) -> Result<()> {
    if let Some(shell) = &cli.completions {
        return commands::completions::run(shell, &mut std::io::stdout().lock());
    }

    let workdir = std::env::current_dir()?;
    let (roots, options) = config::from_cli(cli, workdir)?;
    commands::run::run(&roots, &options)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        ui::error(e);
        std::process::exit(1);
    }
}
