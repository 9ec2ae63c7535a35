//! Per-snapshot counts for status reporting.

use crate::asset::{Asset, AssetKind};
use crate::tree::MAX_TREE_DEPTH;
use serde::Serialize;
use tracing::warn;

/// Counts gathered in one pass over a tree snapshot.
///
/// Serialized into workspace status output; never deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeSummary {
    pub files: usize,
    pub directories: usize,
    pub folders: usize,
    pub external: usize,
    pub notes: usize,
    pub entry_points: usize,
    /// Deepest level seen, counting the root as 1.
    pub max_depth: usize,
}

impl TreeSummary {
    /// Assets of any kind counted by the pass.
    pub fn total_assets(&self) -> usize {
        self.files + self.directories + self.folders + self.external
    }
}

/// Tally kinds, notes, entry points, and depth across the subtree.
pub fn summarize_tree(asset: &Asset) -> TreeSummary {
    let mut summary = TreeSummary::default();
    tally(asset, 1, &mut summary);
    summary
}

fn tally(asset: &Asset, depth: usize, summary: &mut TreeSummary) {
    match asset.kind {
        AssetKind::File => summary.files += 1,
        AssetKind::Directory => summary.directories += 1,
        AssetKind::Folder => summary.folders += 1,
        AssetKind::Url => summary.external += 1,
    }
    summary.notes += asset.notes.as_ref().map(Vec::len).unwrap_or(0);
    if asset.is_entry_point() {
        summary.entry_points += 1;
    }
    if depth > summary.max_depth {
        summary.max_depth = depth;
    }
    if depth >= MAX_TREE_DEPTH {
        warn!(
            depth,
            uri = asset.uri_str().unwrap_or_default(),
            "Depth bound reached, summary stops descending"
        );
        return;
    }
    for child in asset.child_assets() {
        tally(child, depth + 1, summary);
    }
}
