//! Rewriting every eligible URI in a tree between absolute and relative form.
//!
//! Trees hold either all-absolute or all-relative URIs at any point in time;
//! these converters move a whole snapshot between the two states in one pass.
//! The tree variants return an independent deep copy and never touch their
//! input. The flat-list variant mutates in place and skips children, for
//! callers holding a list of root-level assets rather than a nested tree.

use crate::asset::Asset;
use crate::paths;
use crate::tree::MAX_TREE_DEPTH;
use std::path::Path;
use tracing::{debug, warn};

/// Direction of a URI rewrite, applied per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathConversion {
    /// Resolve project-relative URIs against the project root.
    ToAbsolute,
    /// Re-root absolute URIs as project-relative, canonical forward-slash form.
    ToRelative,
}

impl PathConversion {
    /// Converted URI for one asset, or `None` when the asset has no URI or a
    /// relative rewrite meets a URI that is already relative. Callers keep
    /// the existing URI on `None`.
    fn apply(self, project_root: &Path, asset: &Asset) -> Option<String> {
        match self {
            PathConversion::ToAbsolute => paths::absolute_uri(project_root, asset),
            PathConversion::ToRelative => paths::relative_uri(project_root, asset),
        }
    }
}

/// Deep copy of `asset` with every path-like node's URI rewritten.
///
/// URL nodes pass through unchanged, subtree included, since their URIs are
/// opaque identifiers rather than paths. The input is never mutated, so
/// converting repeatedly in either direction is safe.
pub fn convert_tree(project_root: &Path, asset: &Asset, conversion: PathConversion) -> Asset {
    convert_node(project_root, asset, conversion, 1)
}

/// [`convert_tree`] over a list of independent root assets.
pub fn convert_trees(
    project_root: &Path,
    assets: &[Asset],
    conversion: PathConversion,
) -> Vec<Asset> {
    debug!(
        roots = assets.len(),
        conversion = ?conversion,
        "Converting asset trees"
    );
    assets
        .iter()
        .map(|asset| convert_tree(project_root, asset, conversion))
        .collect()
}

/// Rewrite the URIs of a flat asset list in place.
///
/// Top-level elements only: children are deliberately not visited, and
/// nothing is copied. This exists for contexts holding a list of root-level
/// assets rather than a nested tree; use [`convert_trees`] when subtrees
/// must be converted too.
pub fn convert_assets_in_place(
    project_root: &Path,
    assets: &mut [Asset],
    conversion: PathConversion,
) {
    for asset in assets.iter_mut() {
        if !asset.kind.is_path_like() {
            continue;
        }
        if let Some(uri) = conversion.apply(project_root, asset) {
            asset.uri = Some(uri);
        }
    }
}

fn convert_node(
    project_root: &Path,
    asset: &Asset,
    conversion: PathConversion,
    depth: usize,
) -> Asset {
    if !asset.kind.is_path_like() {
        return asset.clone();
    }

    let mut converted = asset.clone_childless();
    if let Some(uri) = conversion.apply(project_root, asset) {
        converted.uri = Some(uri);
    }
    converted.children = match asset.children.as_ref() {
        None => None,
        Some(children) if depth >= MAX_TREE_DEPTH => {
            warn!(
                depth,
                uri = asset.uri_str().unwrap_or_default(),
                "Depth bound reached, keeping subtree unconverted"
            );
            Some(children.clone())
        }
        Some(children) => Some(
            children
                .iter()
                .map(|child| convert_node(project_root, child, conversion, depth + 1))
                .collect(),
        ),
    };
    converted
}
