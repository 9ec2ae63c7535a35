//! Flattening every note in a tree into one ordered list.

use crate::asset::{Asset, TaggedNote};
use crate::tree::MAX_TREE_DEPTH;
use tracing::warn;

/// All notes in the subtree, in pre-order: a node's own notes in list
/// order, then each child's notes in child order.
///
/// Each note is tagged with its owning asset's URI, since the flat list no
/// longer encodes tree position. Owners without a URI tag their notes with
/// an empty string.
pub fn all_notes(asset: &Asset) -> Vec<TaggedNote> {
    let mut notes = Vec::new();
    collect_notes(asset, 1, &mut notes);
    notes
}

fn collect_notes(asset: &Asset, depth: usize, found: &mut Vec<TaggedNote>) {
    if let Some(own) = asset.notes.as_ref() {
        let owner = asset.uri_str().unwrap_or_default();
        found.extend(own.iter().map(|note| TaggedNote {
            asset_uri: owner.to_string(),
            note: note.clone(),
        }));
    }
    if depth >= MAX_TREE_DEPTH {
        warn!(
            depth,
            uri = asset.uri_str().unwrap_or_default(),
            "Depth bound reached, note scan stops descending"
        );
        return;
    }
    for child in asset.child_assets() {
        collect_notes(child, depth + 1, found);
    }
}
