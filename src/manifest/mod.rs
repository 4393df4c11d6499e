//! Manifest documents (game.yaml, jtframe.yaml and friends)
//!
//! A manifest lists source files grouped by origin, named modules and files
//! relative to its own directory:
//!
//! ```yaml
//! game:
//!   - from: gng
//!     get: [ jtgng_game.v, jtgng_main.v ]
//! jtframe:
//!   - from: sdram
//!     get: [ jtframe_sdram_mux.v ]
//!     unless: NOSDRAM
//! modules:
//!   jt:
//!     - name: jt12
//!   other:
//!     - from: t80
//!       get: [ T80.vhd ]
//! here:
//!   - local.v
//! ```
//!
//! This module only loads and decodes. Following references is the resolver's job.

pub mod serialization;

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, manifest};
use crate::origin::Origin;
use serialization::{empty_as_none, null_as_default};

/// Suffix that marks an entry as a reference to another manifest
pub const MANIFEST_SUFFIX: &str = ".yaml";

/// Whether a listed name refers to another manifest rather than a source file
pub fn is_manifest(name: &str) -> bool {
    name.ends_with(MANIFEST_SUFFIX)
}

/// A group of files sharing one root directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileGroup {
    /// Key selecting the sub-root within the group's origin
    #[serde(default, deserialize_with = "null_as_default")]
    pub from: String,

    /// File names, relative to the group root
    #[serde(default, deserialize_with = "null_as_default")]
    pub get: Vec<String>,

    /// Skip the group when this environment variable is set
    #[serde(default, deserialize_with = "empty_as_none")]
    pub unless: Option<String>,
}

impl FileGroup {
    pub fn new(from: impl Into<String>, get: Vec<String>) -> Self {
        Self {
            from: from.into(),
            get,
            unless: None,
        }
    }
}

/// A named, reusable module
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModuleReference {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Skip the reference when this environment variable is set
    #[serde(default, deserialize_with = "empty_as_none")]
    pub unless: Option<String>,
}

/// The `modules` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Modules {
    #[serde(default, deserialize_with = "null_as_default")]
    pub jt: Vec<ModuleReference>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub other: Vec<FileGroup>,
}

/// One decoded manifest document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub game: Vec<FileGroup>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub jtframe: Vec<FileGroup>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub modules: Modules,

    /// Entries relative to the manifest's own directory
    #[serde(default, deserialize_with = "null_as_default")]
    pub here: Vec<String>,
}

impl Manifest {
    /// Decode a manifest from YAML text
    ///
    /// `path` is only used to label decode errors.
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self> {
        if is_blank(yaml) {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| manifest::decode_failed(path.display().to_string(), e.to_string()))
    }

    /// File groups of one origin category
    pub fn groups(&self, origin: Origin) -> &[FileGroup] {
        match origin {
            Origin::Game => &self.game,
            Origin::Framework => &self.jtframe,
            Origin::Module => &self.modules.other,
            Origin::Local => &[],
        }
    }
}

/// Read and decode the manifest at `path`
///
/// A file that cannot be read is reported as a missing referenced manifest; the
/// caller decides whether that is fatal.
pub fn load(path: &Path) -> Result<Manifest> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        manifest::referenced_missing(path.display().to_string(), e.to_string())
    })?;
    Manifest::from_yaml(&text, path)
}

/// A document holding nothing but whitespace, comments and separators
fn is_blank(yaml: &str) -> bool {
    yaml.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    })
}
