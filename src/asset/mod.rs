//! Asset tree model.
//!
//! One `Asset` per file, directory, synthetic folder, or external resource
//! of a research project. Trees are produced and populated by the
//! crawler/handler pipeline; this crate never creates or persists them, it
//! only builds transformed copies and answers queries. The serde contract
//! mirrors what the pipeline hands over, including handler-specific fields
//! this core does not interpret.

mod kind;

pub use kind::AssetKind;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Flag attributes attached to an asset by the crawler or the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetAttributes {
    /// Asset is archived and hidden from the default view.
    #[serde(default)]
    pub archived: bool,
    /// Asset is a primary starting point of the project.
    #[serde(default, rename = "entrypoint")]
    pub entry_point: bool,
    /// Flags this core does not interpret, preserved across copies.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One handler's contribution to an asset's metadata list.
///
/// `id` identifies the producing handler; the model expects at most one
/// entry per handler per asset, and lookups take the first on violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerMetadata {
    /// Identifier of the producing handler.
    pub id: String,
    /// Whether the handler wants the asset shown. A handler that never
    /// writes the flag keeps the asset visible.
    #[serde(default = "default_include")]
    pub include: bool,
    /// Handler-specific fields, opaque to this core.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

fn default_include() -> bool {
    true
}

/// One research note attached to an asset.
///
/// Opaque to this core beyond a stable identity and its position in the
/// owning asset's note list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Stable note identifier.
    pub id: String,
    /// Note payload (title, body, timestamps, ...), uninterpreted.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

/// A note lifted out of the tree, tagged with the URI of the asset that
/// owned it so the flattened record keeps its origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedNote {
    /// URI of the owning asset; empty when that asset carried none.
    pub asset_uri: String,
    pub note: Note,
}

/// One node in the project's file/folder/external-resource tree.
///
/// A tree snapshot keeps its URIs consistently absolute or consistently
/// relative; the operations in [`crate::tree`] move whole trees between the
/// two states by producing fresh copies, never by mutating a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Filesystem path for file/directory/folder kinds, opaque resource
    /// identifier for URL kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Kind tag; named `type` on the wire.
    #[serde(rename = "type")]
    pub kind: AssetKind,
    /// Display label, primarily meaningful for URL assets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AssetAttributes>,
    /// Handler results attached by the pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<HandlerMetadata>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Note>>,
    /// Child assets in display order. Absent and empty are distinct states;
    /// both are preserved exactly by every filter and conversion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Asset>>,
}

impl Asset {
    /// Bare asset of the given kind, everything else unset.
    pub fn new(kind: AssetKind, uri: impl Into<String>) -> Self {
        Asset {
            uri: Some(uri.into()),
            kind,
            name: None,
            attributes: None,
            metadata: None,
            notes: None,
            children: None,
        }
    }

    /// URI as a borrowed string, when present.
    pub fn uri_str(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Children as a slice; absent children read as empty.
    pub fn child_assets(&self) -> &[Asset] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Whether the attributes flag this asset as an entry point.
    pub fn is_entry_point(&self) -> bool {
        self.attributes
            .as_ref()
            .map(|attributes| attributes.entry_point)
            .unwrap_or(false)
    }

    /// Whether the attributes flag this asset as archived.
    pub fn is_archived(&self) -> bool {
        self.attributes
            .as_ref()
            .map(|attributes| attributes.archived)
            .unwrap_or(false)
    }

    /// Copy of this asset with `children` left out.
    ///
    /// The structural-clone primitive the tree operations build their copies
    /// from. It enumerates every field of the model, so a new field cannot be
    /// dropped silently the way a clone through a serialization format would
    /// drop what the format cannot represent.
    pub(crate) fn clone_childless(&self) -> Asset {
        Asset {
            uri: self.uri.clone(),
            kind: self.kind,
            name: self.name.clone(),
            attributes: self.attributes.clone(),
            metadata: self.metadata.clone(),
            notes: self.notes.clone(),
            children: None,
        }
    }
}
