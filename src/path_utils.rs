//! Lexical path utilities for jtfiles
//!
//! Manifest paths are built by joining root directories with names read from YAML.
//! None of the helpers here touch the file system: source files listed in a manifest
//! are not required to exist.

use std::path::{Component, Path, PathBuf};

/// Convert a path to a string with forward slashes
///
/// Quartus and the simulators read forward slashes on every platform.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Lexically clean a path
///
/// Removes `.` components and folds `name/..` pairs. A `..` directly under the root
/// is dropped. An empty result becomes `.`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clean(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(clean(Path::new("../x/..")), PathBuf::from(".."));
/// ```
pub fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Express `target` relative to `base`
///
/// Both paths are cleaned first. Returns `None` when one path is absolute and the
/// other is not, or when `base` climbs above a point that cannot be named from
/// `target` (a leftover `..` in `base`).
pub fn relative_to(target: &Path, base: &Path) -> Option<PathBuf> {
    let target = clean(target);
    let base = clean(base);

    if target.has_root() != base.has_root() {
        return None;
    }

    let target_parts: Vec<Component> = target
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();
    let base_parts: Vec<Component> = base
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();

    let common = target_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for part in &base_parts[common..] {
        if *part == Component::ParentDir {
            return None;
        }
        relative.push("..");
    }
    for part in &target_parts[common..] {
        relative.push(part.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Some(relative)
}
