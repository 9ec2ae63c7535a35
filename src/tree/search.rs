//! Exact-URI lookup and predicate collection over tree snapshots.
//!
//! Also hosts the ancestor walk between two URIs, which is pure string
//! arithmetic: it enumerates the paths lying between a leaf URI and a root
//! URI whether or not nodes for them exist in any tree.

use crate::asset::Asset;
use crate::tree::MAX_TREE_DEPTH;
use tracing::warn;

/// Direct child whose URI matches exactly, searching one level only.
pub fn find_child_by_uri<'a>(asset: &'a Asset, uri: &str) -> Option<&'a Asset> {
    asset
        .child_assets()
        .iter()
        .find(|child| child.uri_str() == Some(uri))
}

/// First node in the subtree whose URI matches exactly, in depth-first
/// pre-order. The root counts as its own descendant and is checked first.
pub fn find_descendant_by_uri<'a>(asset: &'a Asset, uri: &str) -> Option<&'a Asset> {
    find_descendant_at(asset, uri, 1)
}

fn find_descendant_at<'a>(asset: &'a Asset, uri: &str, depth: usize) -> Option<&'a Asset> {
    if asset.uri_str() == Some(uri) {
        return Some(asset);
    }
    if depth >= MAX_TREE_DEPTH {
        warn!(depth, uri, "Depth bound reached, abandoning search branch");
        return None;
    }
    asset
        .child_assets()
        .iter()
        .find_map(|child| find_descendant_at(child, uri, depth + 1))
}

/// URIs of every ancestor lying strictly between `asset_uri` and
/// `root_uri`, innermost first.
///
/// Walks `asset_uri` upward one separator segment at a time, accepting both
/// separator styles, until the root is reached or no separator remains.
/// Neither endpoint is included. Empty when either argument is empty or
/// `root_uri` is not a prefix of `asset_uri` at position zero. The walk is
/// text-only and independent of whether any tree contains these nodes.
pub fn ancestor_uris_between(asset_uri: &str, root_uri: &str) -> Vec<String> {
    if asset_uri.is_empty() || root_uri.is_empty() || !asset_uri.starts_with(root_uri) {
        return Vec::new();
    }

    let mut ancestors = Vec::new();
    let mut current = asset_uri;
    while let Some(cut) = current.rfind(['/', '\\']) {
        let parent = &current[..cut];
        if parent == root_uri || parent.is_empty() {
            break;
        }
        ancestors.push(parent.to_string());
        current = parent;
    }
    ancestors
}

/// Every node whose attributes flag it as an entry point, in depth-first
/// pre-order: a flagged node appears before any flagged descendant, and
/// siblings appear left to right.
pub fn entry_point_assets(asset: &Asset) -> Vec<&Asset> {
    let mut found = Vec::new();
    collect_entry_points(asset, &mut found);
    found
}

/// Append the subtree's entry points to an existing accumulator, for
/// callers gathering across several roots into one list.
pub fn collect_entry_points<'a>(asset: &'a Asset, found: &mut Vec<&'a Asset>) {
    collect_entry_points_at(asset, 1, found);
}

fn collect_entry_points_at<'a>(asset: &'a Asset, depth: usize, found: &mut Vec<&'a Asset>) {
    if asset.is_entry_point() {
        found.push(asset);
    }
    if depth >= MAX_TREE_DEPTH {
        warn!(
            depth,
            uri = asset.uri_str().unwrap_or_default(),
            "Depth bound reached, entry point scan stops descending"
        );
        return;
    }
    for child in asset.child_assets() {
        collect_entry_points_at(child, depth + 1, found);
    }
}
