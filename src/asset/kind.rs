//! Asset kind tags and the predicates keyed on them.

use crate::error::ParseAssetKindError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind tag of one node in the asset tree.
///
/// `Folder` is the synthetic container kind used for groupings such as
/// "External Resources"; `Directory` is a real filesystem directory. Adding
/// a kind forces every match below to be revisited, which is the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    File,
    Directory,
    Folder,
    Url,
}

impl AssetKind {
    /// Whether path conversion applies to this kind.
    ///
    /// URL assets carry opaque resource identifiers; their `uri` is never
    /// interpreted as a filesystem path.
    pub fn is_path_like(self) -> bool {
        match self {
            AssetKind::File | AssetKind::Directory | AssetKind::Folder => true,
            AssetKind::Url => false,
        }
    }

    /// Whether this kind refers to a resource outside the project tree.
    pub fn is_external(self) -> bool {
        match self {
            AssetKind::Url => true,
            AssetKind::File | AssetKind::Directory | AssetKind::Folder => false,
        }
    }

    /// Whether this kind normally carries children.
    pub fn is_container(self) -> bool {
        match self {
            AssetKind::Directory | AssetKind::Folder => true,
            AssetKind::File | AssetKind::Url => false,
        }
    }

    /// Canonical lowercase name used by the handler pipeline.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::File => "file",
            AssetKind::Directory => "directory",
            AssetKind::Folder => "folder",
            AssetKind::Url => "url",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetKind {
    type Err = ParseAssetKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(AssetKind::File),
            "directory" => Ok(AssetKind::Directory),
            "folder" => Ok(AssetKind::Folder),
            "url" => Ok(AssetKind::Url),
            other => Err(ParseAssetKindError {
                value: other.to_string(),
            }),
        }
    }
}
