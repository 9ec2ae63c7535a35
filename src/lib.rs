//! Labbook: Asset Tree Core
//!
//! In-memory model and algorithms for the asset tree of a Labbook research
//! workspace: URI normalization between absolute and project-relative form,
//! deny-list gating, handler-driven inclusion pruning, search, and note
//! aggregation. The tree itself is produced by the crawler and handler
//! pipeline; this crate only transforms and queries the snapshots it is
//! handed, returning fresh copies the caller owns.

pub mod asset;
pub mod error;
pub mod ignore;
pub mod metadata;
pub mod naming;
pub mod paths;
pub mod tree;
