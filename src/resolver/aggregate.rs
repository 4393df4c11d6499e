//! The accumulated result of resolving a manifest tree

use std::path::PathBuf;

use crate::manifest::{FileGroup, ModuleReference};
use crate::origin::Origin;

/// Everything gathered from every manifest visited so far
///
/// Within one origin there is at most one group per `from` key. Files for a key
/// seen again are appended to the existing group in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    game: Vec<FileGroup>,
    framework: Vec<FileGroup>,
    modules: Vec<FileGroup>,
    unresolved: Vec<ModuleReference>,
    here: Vec<PathBuf>,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `files` into the group `key` of `origin`
    ///
    /// An empty file list leaves the aggregate untouched. Local entries have no
    /// groups and go through [`Aggregate::push_local`] instead.
    pub fn merge(&mut self, origin: Origin, key: &str, files: Vec<String>) {
        if files.is_empty() {
            return;
        }
        let Some(groups) = self.groups_mut(origin) else {
            return;
        };
        match groups.iter_mut().find(|g| g.from == key) {
            Some(group) => group.get.extend(files),
            None => groups.push(FileGroup::new(key, files)),
        }
    }

    /// Keep a module reference whose manifest was not found
    pub fn push_unresolved(&mut self, module: ModuleReference) {
        self.unresolved.push(module);
    }

    /// Keep a local entry, already joined with its manifest's directory
    pub fn push_local(&mut self, path: PathBuf) {
        self.here.push(path);
    }

    pub fn groups(&self, origin: Origin) -> &[FileGroup] {
        match origin {
            Origin::Game => &self.game,
            Origin::Framework => &self.framework,
            Origin::Module => &self.modules,
            Origin::Local => &[],
        }
    }

    pub fn unresolved(&self) -> &[ModuleReference] {
        &self.unresolved
    }

    pub fn locals(&self) -> &[PathBuf] {
        &self.here
    }

    pub fn is_empty(&self) -> bool {
        self.game.is_empty()
            && self.framework.is_empty()
            && self.modules.is_empty()
            && self.unresolved.is_empty()
            && self.here.is_empty()
    }

    fn groups_mut(&mut self, origin: Origin) -> Option<&mut Vec<FileGroup>> {
        match origin {
            Origin::Game => Some(&mut self.game),
            Origin::Framework => Some(&mut self.framework),
            Origin::Module => Some(&mut self.modules),
            Origin::Local => None,
        }
    }
}
