//! Simulator file list (game.f)

use std::io::Write;

use super::{Emitter, SourceKind};
use crate::error::Result;

/// One bare path per line
///
/// Simulators have no notion of nested projects, so .qip entries and unresolved
/// module manifests are left out.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimEmitter {
    /// Leave out VHDL files (for Verilog-only simulators)
    pub skip_vhdl: bool,
}

impl SimEmitter {
    fn includes(self, kind: SourceKind) -> bool {
        match kind {
            SourceKind::SystemVerilog | SourceKind::Verilog => true,
            SourceKind::Vhdl => !self.skip_vhdl,
            SourceKind::Qip | SourceKind::Manifest => false,
        }
    }
}

impl Emitter for SimEmitter {
    fn emit(&self, paths: &[String], out: &mut dyn Write) -> Result<()> {
        for path in paths {
            if self.includes(SourceKind::classify(path)?) {
                writeln!(out, "{path}")?;
            }
        }
        Ok(())
    }
}
