//! Run configuration
//!
//! Root directories come from the environment (through clap's `env` support) or
//! from explicit command line flags. Everything below this module receives the
//! roots as plain values and never reads the environment for them.

use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};
use crate::error::{Result, config};

/// Name of the manifest that describes a core, inside `<CORES>/<core>/hdl`
pub const GAME_MANIFEST: &str = "game.yaml";

/// Name of the framework manifest, inside `<JTFRAME>/hdl`
pub const FRAMEWORK_MANIFEST: &str = "jtframe.yaml";

/// Root directories every manifest path is derived from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roots {
    /// Core sources root (`CORES`)
    pub cores: PathBuf,

    /// Framework root (`JTFRAME`)
    pub jtframe: PathBuf,

    /// Shared modules root (`MODULES`)
    pub modules: PathBuf,

    /// Project root (`JTROOT`)
    pub project: PathBuf,
}

impl Roots {
    /// Manifest describing the given core
    pub fn core_manifest(&self, core: &str) -> PathBuf {
        self.cores.join(core).join("hdl").join(GAME_MANIFEST)
    }

    /// Manifest shared by every core
    pub fn framework_manifest(&self) -> PathBuf {
        self.jtframe.join("hdl").join(FRAMEWORK_MANIFEST)
    }
}

/// Options controlling a single resolve-and-emit run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub core: String,
    pub format: OutputFormat,
    pub target: Option<String>,
    pub relative: bool,
    pub skip_vhdl: bool,
    pub output: Option<PathBuf>,
    pub verbose: bool,
    /// Directory relative paths are computed against
    pub workdir: PathBuf,
}

impl RunOptions {
    /// Destination file, `None` meaning standard output
    pub fn destination(&self) -> Option<PathBuf> {
        match &self.output {
            Some(path) if path == Path::new("-") => None,
            Some(path) => Some(path.clone()),
            None => Some(self.workdir.join(self.format.default_file_name())),
        }
    }
}

/// Build roots and run options from parsed arguments
///
/// The core name is checked before the roots so that a missing `--core` is
/// reported even when the environment is empty.
pub fn from_cli(cli: &Cli, workdir: PathBuf) -> Result<(Roots, RunOptions)> {
    let core = cli
        .core
        .clone()
        .filter(|c| !c.is_empty())
        .ok_or(crate::error::JtfilesError::MissingCore)?;

    let cores = cli
        .cores
        .clone()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| config::missing_root("CORES"))?;

    let roots = Roots {
        cores,
        jtframe: cli.jtframe.clone().unwrap_or_default(),
        modules: cli.modules.clone().unwrap_or_default(),
        project: cli.jtroot.clone().unwrap_or_default(),
    };

    let options = RunOptions {
        core,
        format: cli.format,
        target: cli.target.clone(),
        relative: cli.rel,
        skip_vhdl: cli.novhdl,
        output: cli.output.clone(),
        verbose: cli.verbose,
        workdir,
    };

    Ok((roots, options))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::JtfilesError;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("jtfiles").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_core_manifest_path() {
        let roots = Roots {
            cores: PathBuf::from("/jt/cores"),
            ..Roots::default()
        };
        assert_eq!(
            roots.core_manifest("gng"),
            PathBuf::from("/jt/cores/gng/hdl/game.yaml")
        );
    }

    #[test]
    fn test_framework_manifest_path() {
        let roots = Roots {
            jtframe: PathBuf::from("/jt/modules/jtframe"),
            ..Roots::default()
        };
        assert_eq!(
            roots.framework_manifest(),
            PathBuf::from("/jt/modules/jtframe/hdl/jtframe.yaml")
        );
    }

    #[test]
    fn test_from_cli_missing_core() {
        let cli = parse(&["--cores", "/jt/cores"]);
        let err = from_cli(&cli, PathBuf::from("/work")).unwrap_err();
        assert!(matches!(err, JtfilesError::MissingCore));
    }

    #[test]
    fn test_from_cli_missing_cores_root() {
        let mut cli = parse(&["--core", "gng"]);
        cli.cores = None;
        let err = from_cli(&cli, PathBuf::from("/work")).unwrap_err();
        assert!(matches!(err, JtfilesError::MissingRoot { .. }));
    }

    #[test]
    fn test_from_cli_optional_roots_default_empty() {
        let mut cli = parse(&["--core", "gng", "--cores", "/jt/cores"]);
        cli.jtframe = None;
        cli.modules = None;
        cli.jtroot = None;
        let (roots, options) = from_cli(&cli, PathBuf::from("/work")).unwrap();
        assert_eq!(roots.cores, PathBuf::from("/jt/cores"));
        assert_eq!(roots.jtframe, PathBuf::new());
        assert_eq!(options.core, "gng");
        assert_eq!(options.format, OutputFormat::Qip);
    }

    #[test]
    fn test_destination_defaults_by_format() {
        let cli = parse(&["--core", "gng", "--cores", "/c", "-f", "sim"]);
        let (_, options) = from_cli(&cli, PathBuf::from("/work")).unwrap();
        assert_eq!(options.destination(), Some(PathBuf::from("/work/game.f")));
    }

    #[test]
    fn test_destination_stdout() {
        let cli = parse(&["--core", "gng", "--cores", "/c", "-o", "-"]);
        let (_, options) = from_cli(&cli, PathBuf::from("/work")).unwrap();
        assert_eq!(options.destination(), None);
    }
}
