//! Lookup of per-handler metadata entries attached to assets.
//!
//! Handlers in the processing pipeline record their results as
//! [`HandlerMetadata`] entries on each asset they touched. This module is the
//! one place that resolves an entry by handler id, so the matching rules
//! (exact id, first hit wins) stay uniform across the crate.

use crate::asset::{Asset, HandlerMetadata};

/// Id under which the file handler records its per-asset decisions,
/// including the inclusion flag the tree filter honors.
pub const FILE_HANDLER_ID: &str = "file-handler";

/// Entry for `handler_id` in a metadata list, or `None` when the id is
/// blank or no entry matches. Ids compare exactly; the first match wins.
pub fn handler_metadata<'a>(
    handler_id: &str,
    entries: &'a [HandlerMetadata],
) -> Option<&'a HandlerMetadata> {
    if handler_id.trim().is_empty() {
        return None;
    }
    entries.iter().find(|entry| entry.id == handler_id)
}

/// Entry for `handler_id` on an asset, reading through an absent metadata
/// list as if it were empty.
pub fn asset_handler_metadata<'a>(asset: &'a Asset, handler_id: &str) -> Option<&'a HandlerMetadata> {
    handler_metadata(handler_id, asset.metadata.as_deref().unwrap_or_default())
}
