//! Crate error types.
//!
//! The algorithm layer is deliberately no-throw: tree operations answer
//! absent or malformed input with `None`, an empty collection, or the input
//! unchanged. The only typed failure sits at the model boundary, where kind
//! strings from the handler pipeline are parsed.

use thiserror::Error;

/// A kind string from the handler pipeline named none of the known asset
/// kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown asset kind {value:?} (expected file, directory, folder, or url)")]
pub struct ParseAssetKindError {
    /// The rejected input.
    pub value: String,
}
