//! Top-down pruning of tree snapshots.
//!
//! Dropping a node drops its whole subtree; surviving nodes are copied with
//! their surviving children in original order, and the input is never
//! mutated. Nodes are kept until something positively excludes them.

use crate::asset::Asset;
use crate::metadata::{asset_handler_metadata, FILE_HANDLER_ID};
use crate::tree::MAX_TREE_DEPTH;
use tracing::{debug, trace, warn};

/// Copy of the tree without the nodes the file handler marked excluded.
///
/// A node is dropped, subtree and all, when its file handler metadata entry
/// carries `include = false`. A node with no entry for that handler is kept:
/// absence means "not classified yet", and unclassified assets stay visible.
/// Returns `None` when the root itself is excluded.
pub fn filter_included_file_assets(asset: &Asset) -> Option<Asset> {
    debug!(
        root = asset.uri_str().unwrap_or_default(),
        "Filtering tree by file handler inclusion"
    );
    filter_tree(asset, 1, &|asset| {
        asset_handler_metadata(asset, FILE_HANDLER_ID)
            .map(|entry| entry.include)
            .unwrap_or(true)
    })
}

/// Copy of the tree without archived subtrees.
pub fn filter_unarchived_assets(asset: &Asset) -> Option<Asset> {
    debug!(
        root = asset.uri_str().unwrap_or_default(),
        "Filtering tree by archived flag"
    );
    filter_tree(asset, 1, &|asset| !asset.is_archived())
}

fn filter_tree<F>(asset: &Asset, depth: usize, keep: &F) -> Option<Asset>
where
    F: Fn(&Asset) -> bool,
{
    if !keep(asset) {
        trace!(
            uri = asset.uri_str().unwrap_or_default(),
            "Pruning asset subtree"
        );
        return None;
    }

    let mut kept = asset.clone_childless();
    kept.children = match asset.children.as_ref() {
        None => None,
        Some(children) if depth >= MAX_TREE_DEPTH => {
            warn!(
                depth,
                uri = asset.uri_str().unwrap_or_default(),
                "Depth bound reached, keeping subtree unfiltered"
            );
            Some(children.clone())
        }
        Some(children) => Some(
            children
                .iter()
                .filter_map(|child| filter_tree(child, depth + 1, keep))
                .collect(),
        ),
    };
    Some(kept)
}
