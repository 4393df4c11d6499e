//! Output formats for the collected file list
//!
//! Each format implements [`Emitter`]. Entries are classified by extension with
//! [`SourceKind::classify`]; an extension neither format knows is an error.

pub mod qip;
pub mod sim;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cli::OutputFormat;
use crate::error::{Result, emit, fs};
use crate::manifest::MANIFEST_SUFFIX;

pub use qip::QipEmitter;
pub use sim::SimEmitter;

/// Kind of an entry in the collected list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    SystemVerilog,
    Vhdl,
    Verilog,
    /// Another Quartus include file
    Qip,
    /// A module manifest that was not found; stands in for the module's own list
    Manifest,
}

impl SourceKind {
    /// Classify a path by its extension
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::JtfilesError::UnsupportedExtension`] for any other
    /// extension, or for a path without one.
    pub fn classify(path: &str) -> Result<Self> {
        let extension = Path::new(path)
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        match extension.as_str() {
            ".sv" => Ok(SourceKind::SystemVerilog),
            ".vhd" => Ok(SourceKind::Vhdl),
            ".v" => Ok(SourceKind::Verilog),
            ".qip" => Ok(SourceKind::Qip),
            e if e == MANIFEST_SUFFIX => Ok(SourceKind::Manifest),
            _ => Err(emit::unsupported_extension(extension.clone(), path)),
        }
    }
}

/// Writes the collected list in one output format
pub trait Emitter {
    /// Write one line per emitted path, in input order
    ///
    /// # Errors
    ///
    /// Fails on the first unsupported extension or write error. Lines written
    /// before the failure stay in `out`.
    fn emit(&self, paths: &[String], out: &mut dyn Write) -> Result<()>;
}

/// Emitter matching the requested format
pub fn emitter_for(format: OutputFormat, relative: bool, skip_vhdl: bool) -> Box<dyn Emitter> {
    match format {
        OutputFormat::Qip => Box::new(QipEmitter { relative }),
        OutputFormat::Sim => Box::new(SimEmitter { skip_vhdl }),
    }
}

/// Emit `paths` to `destination`, or to stdout when it is `None`
///
/// The file is created before the first line is written; a failed run may leave
/// it partially written.
pub fn write_output(
    emitter: &dyn Emitter,
    paths: &[String],
    destination: Option<&Path>,
) -> Result<()> {
    match destination {
        Some(path) => {
            let file = File::create(path).map_err(|e| write_error(path, &e))?;
            let mut out = BufWriter::new(file);
            emitter.emit(paths, &mut out)?;
            out.flush().map_err(|e| write_error(path, &e))
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            emitter.emit(paths, &mut out)?;
            out.flush().map_err(Into::into)
        }
    }
}

fn write_error(path: &Path, err: &std::io::Error) -> crate::error::JtfilesError {
    fs::write_failed(path.display().to_string(), err.to_string())
}
