//! Error types and handling for jtfiles
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`manifest`]: Manifest loading and resolution errors
//! - [`emit`]: Output classification errors
//! - [`config`]: Command line and environment errors
//! - [`fs`]: File system errors

pub mod config;
pub mod emit;
pub mod fs;
pub mod manifest;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for jtfiles operations
#[derive(Error, Diagnostic, Debug)]
pub enum JtfilesError {
    // Manifest errors
    #[error("Cannot open manifest {path}")]
    #[diagnostic(
        code(jtfiles::manifest::root_missing),
        help("The core has no manifest of its own; only framework files will be listed")
    )]
    RootManifestMissing { path: String },

    #[error("Cannot open referenced manifest {path}: {reason}")]
    #[diagnostic(
        code(jtfiles::manifest::referenced_missing),
        help("Check the file names listed under 'get', 'here' and 'modules'")
    )]
    ReferencedManifestMissing { path: String, reason: String },

    #[error("Cannot parse manifest {path}: {reason}")]
    #[diagnostic(code(jtfiles::manifest::decode_failed))]
    ManifestDecode { path: String, reason: String },

    // Emitter errors
    #[error("Unsupported file extension '{extension}' in file {path}")]
    #[diagnostic(
        code(jtfiles::emit::unsupported_extension),
        help("Supported extensions: .sv, .v, .vhd, .qip")
    )]
    UnsupportedExtension { extension: String, path: String },

    #[error("Cannot express {path} relative to {base}")]
    #[diagnostic(code(jtfiles::emit::path_resolution))]
    PathResolution { path: String, base: String },

    // Configuration errors
    #[error("Environment variable {variable} is not defined")]
    #[diagnostic(
        code(jtfiles::config::missing_root),
        help("Source the JTFRAME setprj.sh script or pass the root on the command line")
    )]
    MissingRoot { variable: String },

    #[error("You must specify the core name with argument --core")]
    #[diagnostic(code(jtfiles::config::missing_core))]
    MissingCore,

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(jtfiles::config::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(jtfiles::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(jtfiles::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for JtfilesError {
    fn from(err: std::io::Error) -> Self {
        JtfilesError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, JtfilesError>;
