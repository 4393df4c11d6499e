//! Flatten an aggregate into the final file list

use std::path::{Path, PathBuf};

use crate::config::Roots;
use crate::error::{Result, emit};
use crate::origin::{self, Origin};
use crate::path_utils;
use crate::resolver::Aggregate;

/// Turn the aggregate into a sorted list of unique paths
///
/// With `relative_to`, every path is expressed relative to that directory;
/// otherwise paths are lexically cleaned.
///
/// # Errors
///
/// Returns [`crate::error::JtfilesError::PathResolution`] when a path cannot be
/// made relative to `relative_to`.
pub fn collect(
    aggregate: &Aggregate,
    roots: &Roots,
    relative_to: Option<&Path>,
) -> Result<Vec<String>> {
    let mut all = Vec::new();

    for origin in Origin::GROUPED {
        for group in aggregate.groups(origin) {
            let root = origin.group_root(roots, &group.from);
            for name in group.get.iter().filter(|name| !name.is_empty()) {
                all.push(render(&root.join(name), relative_to)?);
            }
        }
    }

    for module in aggregate.unresolved() {
        if module.name.is_empty() {
            continue;
        }
        let path = origin::synthesized_module_path(roots, &module.name);
        all.push(render(&path, relative_to)?);
    }

    for local in aggregate.locals() {
        all.push(render(local, relative_to)?);
    }

    Ok(sort_unique(all))
}

/// Sort lexicographically and drop repeated entries
pub fn sort_unique(mut paths: Vec<String>) -> Vec<String> {
    paths.sort();
    paths.dedup();
    paths
}

fn render(path: &Path, relative_to: Option<&Path>) -> Result<String> {
    let path: PathBuf = match relative_to {
        Some(base) => path_utils::relative_to(path, base).ok_or_else(|| {
            emit::path_resolution(path.display().to_string(), base.display().to_string())
        })?,
        None => path_utils::clean(path),
    };
    Ok(path_utils::to_forward_slashes(&path))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::JtfilesError;
    use crate::manifest::ModuleReference;

    fn roots() -> Roots {
        Roots {
            cores: PathBuf::from("/jt/cores"),
            jtframe: PathBuf::from("/jt/modules/jtframe"),
            modules: PathBuf::from("/jt/modules"),
            project: PathBuf::from("/jt"),
        }
    }

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_aggregate_collects_nothing() {
        assert!(collect(&Aggregate::new(), &roots(), None).unwrap().is_empty());
    }

    #[test]
    fn test_collect_all_origins_sorted() {
        let mut aggregate = Aggregate::new();
        aggregate.merge(Origin::Game, "gng", files(&["jtgng_game.v", "jtgng_main.v"]));
        aggregate.merge(Origin::Framework, "sdram", files(&["jtframe_sdram.v"]));
        aggregate.merge(Origin::Module, "t80", files(&["T80.vhd"]));
        aggregate.push_unresolved(ModuleReference {
            name: "JT51".to_string(),
            unless: None,
        });
        aggregate.push_local(PathBuf::from("/jt/cores/gng/hdl/local.v"));

        let all = collect(&aggregate, &roots(), None).unwrap();
        assert_eq!(
            all,
            files(&[
                "/jt/cores/gng/hdl/jtgng_game.v",
                "/jt/cores/gng/hdl/jtgng_main.v",
                "/jt/cores/gng/hdl/local.v",
                "/jt/modules/jt51/hdl/jt51.yaml",
                "/jt/modules/jtframe/hdl/sdram/jtframe_sdram.v",
                "/jt/modules/t80/T80.vhd",
            ])
        );
    }

    #[test]
    fn test_duplicates_are_removed() {
        let mut aggregate = Aggregate::new();
        aggregate.merge(Origin::Game, "gng", files(&["b.v", "a.v", "b.v"]));
        aggregate.merge(Origin::Game, "gng", files(&["./a.v"]));

        let all = collect(&aggregate, &roots(), None).unwrap();
        assert_eq!(
            all,
            files(&["/jt/cores/gng/hdl/a.v", "/jt/cores/gng/hdl/b.v"])
        );
    }

    #[test]
    fn test_empty_names_are_skipped() {
        let mut aggregate = Aggregate::new();
        aggregate.merge(Origin::Game, "gng", files(&["", "a.v"]));
        aggregate.push_unresolved(ModuleReference::default());

        let all = collect(&aggregate, &roots(), None).unwrap();
        assert_eq!(all, files(&["/jt/cores/gng/hdl/a.v"]));
    }

    #[test]
    fn test_relative_paths() {
        let mut aggregate = Aggregate::new();
        aggregate.merge(Origin::Game, "gng", files(&["a.v"]));
        aggregate.merge(Origin::Framework, "sdram", files(&["s.v"]));

        let all = collect(&aggregate, &roots(), Some(Path::new("/jt/cores/gng/ver"))).unwrap();
        assert_eq!(
            all,
            files(&["../../../modules/jtframe/hdl/sdram/s.v", "../hdl/a.v"])
        );
    }

    #[test]
    fn test_relative_path_failure() {
        let mut aggregate = Aggregate::new();
        aggregate.push_local(PathBuf::from("rel/local.v"));

        let err = collect(&aggregate, &roots(), Some(Path::new("/work"))).unwrap_err();
        assert!(matches!(err, JtfilesError::PathResolution { .. }));
    }

    #[test]
    fn test_sort_unique_is_idempotent_and_order_independent() {
        let input = files(&["c.v", "a.sv", "b.vhd", "a.sv", "c.v"]);
        let mut reversed = input.clone();
        reversed.reverse();

        let once = sort_unique(input);
        assert_eq!(once, files(&["a.sv", "b.vhd", "c.v"]));
        assert_eq!(sort_unique(once.clone()), once);
        assert_eq!(sort_unique(reversed), once);
    }
}
