//! Display names, extensions, and tree labels derived from asset URIs.
//!
//! Everything here is segment arithmetic on the URI string. URL URIs are
//! never parsed as filesystem paths, so the splitting accepts both
//! separator styles and nothing ever touches [`std::path`].

use crate::asset::{Asset, AssetKind};
use crate::paths::uri_file_name;

/// Anything a URI can be read from: a raw string or an asset object.
///
/// Lets the name and extension helpers accept either without the caller
/// unwrapping the asset's optional URI first.
pub trait UriSource {
    /// URI this value names, when it has one.
    fn source_uri(&self) -> Option<&str>;
}

impl UriSource for str {
    fn source_uri(&self) -> Option<&str> {
        Some(self)
    }
}

impl UriSource for String {
    fn source_uri(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl UriSource for Asset {
    fn source_uri(&self) -> Option<&str> {
        self.uri_str()
    }
}

/// Final URI segment as a display name, or an empty string when the source
/// has no URI.
pub fn asset_name<S>(source: &S) -> String
where
    S: UriSource + ?Sized,
{
    let Some(uri) = source.source_uri() else {
        return String::new();
    };
    uri_file_name(uri).unwrap_or_default().to_string()
}

/// Extension of the final URI segment, without the dot.
///
/// Empty when there is no segment, the segment has no dot, or the dot is
/// the leading character: dotfiles such as `.gitignore` are treated as
/// extensionless names, not as extensions.
pub fn asset_extension<S>(source: &S) -> String
where
    S: UriSource + ?Sized,
{
    let Some(uri) = source.source_uri() else {
        return String::new();
    };
    let Some(segment) = uri_file_name(uri) else {
        return String::new();
    };
    match segment.rfind('.') {
        None | Some(0) => String::new(),
        Some(pos) => segment[pos + 1..].to_string(),
    }
}

/// Label shown for an asset in tree views.
///
/// URL assets display their name with the URI in parentheses, falling back
/// to the bare URI when the name is absent or blank. Path-like assets
/// display their final URI segment.
pub fn tree_label(asset: &Asset) -> String {
    match asset.kind {
        AssetKind::Url => {
            let uri = asset.uri_str().unwrap_or_default();
            match asset.name.as_deref().map(str::trim) {
                Some(name) if !name.is_empty() => format!("{} ({})", name, uri),
                _ => uri.to_string(),
            }
        }
        AssetKind::File | AssetKind::Directory | AssetKind::Folder => asset_name(asset),
    }
}
