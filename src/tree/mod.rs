//! Whole-tree algorithms over asset snapshots.
//!
//! Conversion and filtering produce new trees the caller owns; search,
//! note aggregation, and summarization are read-only queries. None of these
//! operations mutate their input except the explicitly in-place flat-list
//! conversion, and none hold state between calls.

pub mod convert;
pub mod filter;
pub mod notes;
pub mod search;
pub mod summary;

pub use convert::{convert_assets_in_place, convert_tree, convert_trees, PathConversion};
pub use filter::{filter_included_file_assets, filter_unarchived_assets};
pub use notes::all_notes;
pub use search::{
    ancestor_uris_between, collect_entry_points, entry_point_assets, find_child_by_uri,
    find_descendant_by_uri,
};
pub use summary::{summarize_tree, TreeSummary};

/// Bound on recursion depth for every tree traversal in this module.
///
/// Crawler bugs (symlink cycles re-materialized as nodes) can produce trees
/// deep enough to overflow the stack. Past this depth traversals stop
/// descending and degrade per operation: converters keep the remaining
/// subtree unconverted, filters keep it unfiltered, queries stop reporting
/// from it. Each records a warning when the bound is hit.
pub const MAX_TREE_DEPTH: usize = 128;
