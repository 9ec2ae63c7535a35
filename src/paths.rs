//! Single-asset URI normalization between absolute and project-relative form.
//!
//! These are the substitution primitives [`crate::tree`] applies across whole
//! trees. They are pure string/path arithmetic: no filesystem access, no
//! canonicalization, no symlink resolution. Kind gating (URL URIs are never
//! path-interpreted) happens at the tree layer, not here.

use crate::asset::Asset;
use std::path::{Component, Path, PathBuf};

/// Resolve `asset.uri` against the project root, producing an absolute URI.
///
/// Already-absolute URIs come back unchanged, which makes re-converting an
/// absolute tree a no-op. Returns `None` when the asset carries no URI.
pub fn absolute_uri(project_root: &Path, asset: &Asset) -> Option<String> {
    let uri = asset.uri_str()?;
    if Path::new(uri).is_absolute() {
        return Some(uri.to_string());
    }
    let root = dunce::simplified(project_root);
    let resolved = fold_components(&root.join(uri));
    Some(resolved.to_string_lossy().into_owned())
}

/// Path of `asset.uri` relative to the project root, in canonical
/// forward-slash form, identical across operating systems.
///
/// Returns `None` when the asset carries no URI or the URI is not absolute;
/// the latter guards against converting an already-relative tree a second
/// time.
pub fn relative_uri(project_root: &Path, asset: &Asset) -> Option<String> {
    let uri = asset.uri_str()?;
    if !Path::new(uri).is_absolute() {
        return None;
    }
    let root = fold_components(dunce::simplified(project_root));
    let target = fold_components(dunce::simplified(Path::new(uri)));
    Some(relative_components(&root, &target))
}

/// Rewrite backslash separators to the canonical forward-slash form.
pub fn normalize_separators(uri: &str) -> String {
    uri.replace('\\', "/")
}

/// Final path segment of a URI, accepting both separator styles.
///
/// Returns `None` for an empty URI. A URI ending in a separator yields an
/// empty segment, which callers treat as "no usable name". This is string
/// splitting on purpose: it must also apply to URIs that are not paths of
/// the running platform.
pub fn uri_file_name(uri: &str) -> Option<&str> {
    if uri.is_empty() {
        return None;
    }
    uri.rsplit(['/', '\\']).next()
}

/// Fold `.` and `..` components without touching the filesystem.
fn fold_components(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // Cannot step above the root; a leading `..` on a relative
                // path is kept.
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.into_iter().collect()
}

/// Component walk from `root` to `target`: shared prefix dropped, one `..`
/// per unshared root segment, then the remaining target segments, joined
/// with forward slashes regardless of platform.
fn relative_components(root: &Path, target: &Path) -> String {
    let mut from = root.components().peekable();
    let mut to = target.components().peekable();
    while let (Some(a), Some(b)) = (from.peek(), to.peek()) {
        if a != b {
            break;
        }
        from.next();
        to.next();
    }

    let mut segments: Vec<String> = Vec::new();
    for component in from {
        match component {
            Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
            _ => segments.push("..".to_string()),
        }
    }
    for component in to {
        match component {
            Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
            Component::ParentDir => segments.push("..".to_string()),
            Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
        }
    }
    segments.join("/")
}
