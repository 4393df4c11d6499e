//! Quartus project include file (game.qip)

use std::io::Write;

use super::{Emitter, SourceKind};
use crate::error::Result;

/// One `set_global_assignment` line per entry
///
/// In relative mode each path is wrapped so Quartus resolves it against the
/// directory of the .qip file itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct QipEmitter {
    pub relative: bool,
}

impl QipEmitter {
    fn tag(kind: SourceKind) -> &'static str {
        match kind {
            SourceKind::SystemVerilog => "SYSTEMVERILOG_FILE",
            SourceKind::Vhdl => "VHDL_FILE",
            SourceKind::Verilog => "VERILOG_FILE",
            SourceKind::Qip | SourceKind::Manifest => "QIP_FILE",
        }
    }
}

impl Emitter for QipEmitter {
    fn emit(&self, paths: &[String], out: &mut dyn Write) -> Result<()> {
        for path in paths {
            let tag = Self::tag(SourceKind::classify(path)?);
            if self.relative {
                writeln!(
                    out,
                    "set_global_assignment -name {tag} [file join $::quartus(qip_path) {path}]"
                )?;
            } else {
                writeln!(out, "set_global_assignment -name {tag} {path}")?;
            }
        }
        Ok(())
    }
}
