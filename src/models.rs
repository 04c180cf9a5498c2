//! Records describing CMS image content as it arrives over the wire.

use serde::{Deserialize, Serialize};

/// An image field as authored in the CMS, wrapping an optional asset pointer.
///
/// Content documents frequently omit the asset entirely (draft documents,
/// optional hero images), so every field is optional and resolution degrades
/// to a placeholder instead of failing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ImageSource {
    /// Pointer to the stored binary asset, absent when no image was chosen.
    pub asset: Option<AssetPointer>,
    /// Alternative text authored alongside the image.
    pub alt: Option<String>,
}

/// Pointer to a stored asset, in either of the two shapes the CMS emits.
///
/// Documents fetched through a reference-expanding query carry the asset
/// document itself (`_id`), while plain documents carry a reference string
/// (`_ref`). Both encode the same `id`, `dimensions` and `extension` fields.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AssetPointer {
    /// Reference string shaped `kind-id-dimensions-extension`.
    #[serde(rename = "_ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Asset document identifier shaped `image-id-dimensions-extension`.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl AssetPointer {
    /// Construct a pointer carrying a `_ref`-style reference string.
    pub fn from_reference(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            id: None,
        }
    }

    /// Construct a pointer carrying an `_id`-style asset identifier.
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            reference: None,
            id: Some(id.into()),
        }
    }
}

impl ImageSource {
    /// Convenience constructor wrapping an asset pointer.
    pub fn new(asset: AssetPointer) -> Self {
        Self {
            asset: Some(asset),
            alt: None,
        }
    }
}

/// Display-size parameters appended to a resolved URL as a query string.
///
/// Only the keys actually supplied appear in the query, in the fixed order
/// `w`, `h`, `q`, `fit`. Unknown keys in the source JSON are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageTransform {
    /// Requested display width in pixels (`w=` parameter).
    pub width: Option<u32>,
    /// Requested display height in pixels (`h=` parameter).
    pub height: Option<u32>,
    /// Compression quality (`q=` parameter).
    pub quality: Option<u32>,
    /// CDN fit mode such as `crop` or `max` (`fit=` parameter).
    pub fit: Option<String>,
}

impl ImageTransform {
    /// Returns `true` when no parameter was supplied.
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none() && self.quality.is_none() && self.fit.is_none()
    }
}
