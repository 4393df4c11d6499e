//! Set of manifests already loaded during a run

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use normpath::PathExt;

use crate::path_utils;

/// Manifests visited so far, keyed by normalized absolute path
///
/// Only grows. A path that was inserted is never loaded again.
#[derive(Debug, Default, Clone)]
pub struct ResolutionState {
    visited: HashSet<PathBuf>,
}

impl ResolutionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.visited.contains(&visit_key(path))
    }

    /// Record `path`; returns `false` if it was already present
    pub fn insert(&mut self, path: &Path) -> bool {
        self.visited.insert(visit_key(path))
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }
}

/// Normalize through the file system when the file exists, lexically otherwise
fn visit_key(path: &Path) -> PathBuf {
    path.normalize()
        .map(|norm| norm.as_path().to_path_buf())
        .unwrap_or_else(|_| path_utils::clean(path))
}
