//! Recursive manifest resolution
//!
//! This module handles:
//! - Loading a manifest and merging its file groups into one [`Aggregate`]
//! - Inlining named modules that have a manifest of their own
//! - Following nested `.yaml` references listed under `get` and `here`
//! - Making sure no manifest is loaded twice, cycles included
//!
//! Resolution is depth-first. The order of groups in the aggregate is therefore
//! not meaningful; the collector sorts the final list.

pub mod aggregate;
pub mod gate;
pub mod state;

use std::path::{Path, PathBuf};

use crate::config::Roots;
use crate::error::{JtfilesError, Result, manifest as manifest_error};
use crate::manifest::{self, Manifest};
use crate::origin::{self, Origin};
use crate::path_utils;
use crate::ui;

pub use aggregate::Aggregate;
pub use gate::{EnvGate, ProcessEnv};
pub use state::ResolutionState;

/// Resolution context for one run
///
/// Owns the aggregate and the visited set; both survive across calls to
/// [`Resolver::resolve`] so the core and framework manifests end up in one result.
pub struct Resolver<'a, G: EnvGate = ProcessEnv> {
    roots: &'a Roots,
    gate: G,
    state: ResolutionState,
    aggregate: Aggregate,
    verbose: bool,
}

impl<'a, G: EnvGate> Resolver<'a, G> {
    pub fn new(roots: &'a Roots, gate: G) -> Self {
        Self {
            roots,
            gate,
            state: ResolutionState::new(),
            aggregate: Aggregate::new(),
            verbose: false,
        }
    }

    /// Trace every manifest and module decision to stderr
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Resolve the manifest at `path` and everything it references
    ///
    /// # Errors
    ///
    /// A manifest that cannot be read is only a warning while nothing has been
    /// loaded yet (a core without its own manifest). Afterwards it is
    /// [`JtfilesError::ReferencedManifestMissing`]. Decode failures are always
    /// returned.
    pub fn resolve(&mut self, path: &Path) -> Result<()> {
        if self.state.contains(path) {
            return Ok(());
        }

        let manifest = match manifest::load(path) {
            Ok(manifest) => manifest,
            Err(JtfilesError::ReferencedManifestMissing { .. }) if self.state.is_empty() => {
                ui::warn(manifest_error::root_missing(path.display().to_string()));
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        self.state.insert(path);
        self.trace(format_args!("loaded {}", path.display()));

        let pending = self.merge_groups(&manifest);
        self.resolve_modules(&manifest)?;
        for nested in pending {
            self.resolve(&nested)?;
        }
        self.resolve_here(&manifest, path)
    }

    pub fn aggregate(&self) -> &Aggregate {
        &self.aggregate
    }

    pub fn state(&self) -> &ResolutionState {
        &self.state
    }

    pub fn into_aggregate(self) -> Aggregate {
        self.aggregate
    }

    /// Merge the file groups of every origin, returning embedded manifest references
    fn merge_groups(&mut self, manifest: &Manifest) -> Vec<PathBuf> {
        let mut pending = Vec::new();

        for origin in Origin::GROUPED {
            for group in manifest.groups(origin) {
                if !self.gate.admits(group.unless.as_deref()) {
                    self.trace(format_args!(
                        "skipped {} group '{}' (unless {})",
                        origin.label(),
                        group.from,
                        group.unless.as_deref().unwrap_or_default()
                    ));
                    continue;
                }

                let mut files = Vec::with_capacity(group.get.len());
                for name in &group.get {
                    let name = name.trim();
                    if name.is_empty() {
                        continue;
                    }
                    if manifest::is_manifest(name) {
                        pending.push(origin.scan_root(self.roots, &group.from).join(name));
                    } else {
                        files.push(name.to_string());
                    }
                }
                self.aggregate.merge(origin, &group.from, files);
            }
        }

        pending
    }

    /// Inline named modules that have a manifest, keep the others for collection
    fn resolve_modules(&mut self, manifest: &Manifest) -> Result<()> {
        for module in &manifest.modules.jt {
            if !self.gate.admits(module.unless.as_deref()) {
                self.trace(format_args!("skipped module {}", module.name));
                continue;
            }

            let candidate = origin::module_manifest(self.roots, &module.name);
            if candidate.is_file() {
                self.trace(format_args!("inlining module {}", module.name));
                self.resolve(&candidate)?;
            } else {
                self.trace(format_args!("module {} has no manifest", module.name));
                self.aggregate.push_unresolved(module.clone());
            }
        }
        Ok(())
    }

    /// Local entries are relative to the manifest that lists them
    fn resolve_here(&mut self, manifest: &Manifest, path: &Path) -> Result<()> {
        let dir = path.parent().unwrap_or_else(|| Path::new(""));

        for entry in &manifest.here {
            let full = path_utils::clean(&dir.join(entry));
            if manifest::is_manifest(entry) {
                self.resolve(&full)?;
            } else {
                self.trace(format_args!("{} entry {}", Origin::Local.label(), full.display()));
                self.aggregate.push_local(full);
            }
        }
        Ok(())
    }

    fn trace(&self, message: std::fmt::Arguments<'_>) {
        if self.verbose {
            ui::trace(message);
        }
    }
}
