//! Origin categories and the root directories they resolve to
//!
//! Every file group in a manifest belongs to one origin. The origin decides which
//! root directory the group's `from` key is joined with. Two tables exist:
//!
//! - the *scan* table, used while reading a manifest to place embedded `.yaml`
//!   references listed under `get`
//! - the *flatten* table, used by the collector to turn the aggregate into paths

use std::path::PathBuf;

use crate::config::Roots;

/// Origin category of a file group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Core specific sources under `CORES`
    Game,
    /// Framework sources under `JTFRAME/hdl`
    Framework,
    /// Shared module sources under `MODULES`
    Module,
    /// Bare entries relative to the project root
    Local,
}

impl Origin {
    /// Categories that carry file groups in a manifest, in processing order
    pub const GROUPED: [Origin; 3] = [Origin::Game, Origin::Framework, Origin::Module];

    /// Directory the files of group `key` live in
    pub fn group_root(self, roots: &Roots, key: &str) -> PathBuf {
        match self {
            Origin::Game => game_root(roots, key),
            Origin::Framework => framework_root(roots, key),
            Origin::Module => roots.modules.join(key),
            Origin::Local => roots.project.clone(),
        }
    }

    /// Directory an embedded `.yaml` reference of group `key` is joined with
    ///
    /// Module references name their own subdirectory, so they hang from the
    /// modules root rather than from the group key.
    pub fn scan_root(self, roots: &Roots, key: &str) -> PathBuf {
        match self {
            Origin::Game => game_root(roots, key),
            Origin::Framework => framework_root(roots, key),
            Origin::Module => roots.modules.clone(),
            Origin::Local => roots.project.clone(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Origin::Game => "game",
            Origin::Framework => "jtframe",
            Origin::Module => "modules",
            Origin::Local => "here",
        }
    }
}

fn game_root(roots: &Roots, key: &str) -> PathBuf {
    roots.cores.join(key).join("hdl")
}

fn framework_root(roots: &Roots, key: &str) -> PathBuf {
    roots.jtframe.join("hdl").join(key)
}

/// Manifest a named module would be described by: `<MODULES>/<name>/hdl/<name>.yaml`
pub fn module_manifest(roots: &Roots, name: &str) -> PathBuf {
    roots
        .modules
        .join(name)
        .join("hdl")
        .join(format!("{name}{}", crate::manifest::MANIFEST_SUFFIX))
}

/// Path written for a module whose manifest could not be found
///
/// The name is case-folded here only; lookups use the name as written.
pub fn synthesized_module_path(roots: &Roots, name: &str) -> PathBuf {
    module_manifest(roots, &name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roots() -> Roots {
        Roots {
            cores: PathBuf::from("/jt/cores"),
            jtframe: PathBuf::from("/jt/jtframe"),
            modules: PathBuf::from("/jt/modules"),
            project: PathBuf::from("/jt"),
        }
    }

    #[test]
    fn test_group_roots() {
        let roots = roots();
        assert_eq!(
            Origin::Game.group_root(&roots, "gng"),
            PathBuf::from("/jt/cores/gng/hdl")
        );
        assert_eq!(
            Origin::Framework.group_root(&roots, "sdram"),
            PathBuf::from("/jt/jtframe/hdl/sdram")
        );
        assert_eq!(
            Origin::Module.group_root(&roots, "jt12"),
            PathBuf::from("/jt/modules/jt12")
        );
        assert_eq!(
            Origin::Local.group_root(&roots, "ignored"),
            PathBuf::from("/jt")
        );
    }

    #[test]
    fn test_scan_roots() {
        let roots = roots();
        assert_eq!(
            Origin::Game.scan_root(&roots, "gng"),
            PathBuf::from("/jt/cores/gng/hdl")
        );
        assert_eq!(
            Origin::Framework.scan_root(&roots, "sound"),
            PathBuf::from("/jt/jtframe/hdl/sound")
        );
        assert_eq!(
            Origin::Module.scan_root(&roots, "jt12"),
            PathBuf::from("/jt/modules")
        );
    }

    #[test]
    fn test_module_manifest_keeps_case() {
        assert_eq!(
            module_manifest(&roots(), "JT51"),
            PathBuf::from("/jt/modules/JT51/hdl/JT51.yaml")
        );
    }

    #[test]
    fn test_synthesized_module_path_is_lowercase() {
        assert_eq!(
            synthesized_module_path(&roots(), "JT51"),
            PathBuf::from("/jt/modules/jt51/hdl/jt51.yaml")
        );
    }
}
