//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// jtfiles - FPGA core file list generator
///
/// Resolves the YAML manifests of a core, its modules and the framework into a
/// single sorted file list.
#[derive(Parser, Debug)]
#[command(
    name = "jtfiles",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Generate Quartus QIP and simulation file lists from core manifests",
    long_about = "jtfiles reads <CORES>/<core>/hdl/game.yaml and <JTFRAME>/hdl/jtframe.yaml, \
                  follows every nested manifest, module and local reference, and writes the \
                  resulting sorted file list as game.qip (Quartus) or game.f (simulation).",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  jtfiles --core gng\n    \
                  jtfiles --core gng -f sim --novhdl\n    \
                  jtfiles --core gng --rel -o -\n    \
                  jtfiles --completions bash"
)]
pub struct Cli {
    /// Core name
    #[arg(long, short = 'c', value_name = "NAME")]
    pub core: Option<String>,

    /// Output format
    #[arg(long = "format", short = 'f', value_enum, default_value_t = OutputFormat::Qip)]
    pub format: OutputFormat,

    /// Target platform (mist, mister, ...)
    #[arg(long, value_name = "NAME")]
    pub target: Option<String>,

    /// Output paths relative to the working directory
    #[arg(long)]
    pub rel: bool,

    /// Skip VHDL files in simulation lists
    #[arg(long)]
    pub novhdl: bool,

    /// Output file ('-' for standard output). Defaults to game.qip or game.f
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print every manifest as it is resolved
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Cores root directory
    #[arg(long, env = "CORES", value_name = "DIR", hide_env_values = true)]
    pub cores: Option<PathBuf>,

    /// JTFRAME root directory
    #[arg(long, env = "JTFRAME", value_name = "DIR", hide_env_values = true)]
    pub jtframe: Option<PathBuf>,

    /// Shared modules root directory
    #[arg(long, env = "MODULES", value_name = "DIR", hide_env_values = true)]
    pub modules: Option<PathBuf>,

    /// Project root directory
    #[arg(long, env = "JTROOT", value_name = "DIR", hide_env_values = true)]
    pub jtroot: Option<PathBuf>,

    /// Generate a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<String>,
}

/// Output file format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Quartus project include file
    Qip,
    /// Simulator file list
    Sim,
}

impl OutputFormat {
    /// File written when no `--output` is given
    pub fn default_file_name(self) -> &'static str {
        match self {
            OutputFormat::Qip => "game.qip",
            OutputFormat::Sim => "game.f",
        }
    }
}
