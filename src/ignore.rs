//! Deny-list gate deciding which crawled names enter the asset tree.
//!
//! The list is fixed at compile time and matched against the final URI
//! segment only, so `/work/.git` is excluded while `/work/git-notes.md` is
//! not. No glob or regex semantics; exact names keep the check cheap enough
//! to sit in the crawler's hot loop.

use crate::paths::uri_file_name;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Names excluded from every tree, matched case-sensitively.
const IGNORED_NAMES: &[&str] = &[
    // Version control internals
    ".git",
    ".svn",
    ".hg",
    // Desktop metadata droppings
    ".DS_Store",
    "Thumbs.db",
    "desktop.ini",
    // Editor state
    ".idea",
    ".vscode",
    // Interpreter caches
    "__pycache__",
    ".ipynb_checkpoints",
    // Workspace bookkeeping the tree must never re-ingest
    "labbook.json",
    "labbook.log",
    ".labbook",
    // Placeholder files that keep empty directories in version control
    ".gitkeep",
    ".keep",
];

/// The deny-list as a set, for collaborators that render or document it.
pub fn ignored_names() -> &'static HashSet<&'static str> {
    static NAMES: OnceLock<HashSet<&'static str>> = OnceLock::new();
    NAMES.get_or_init(|| IGNORED_NAMES.iter().copied().collect())
}

/// Whether a URI names something the tree should keep.
///
/// Returns `false` for an empty URI or a URI whose final segment is blank
/// after trimming, since neither can name a real asset. Everything not on
/// the deny-list is included; unknown names are never rejected.
pub fn include_asset(uri: &str) -> bool {
    let Some(segment) = uri_file_name(uri) else {
        return false;
    };
    let name = segment.trim();
    if name.is_empty() {
        return false;
    }
    !ignored_names().contains(name)
}
