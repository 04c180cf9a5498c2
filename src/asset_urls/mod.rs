//! Helpers for resolving CMS asset references into fetchable CDN image URLs.
//!
//! This module intentionally splits the responsibilities into focused submodules so that
//! reference classification, single-asset URL construction, and gallery resolution can be
//! tested independently. The same code is shared by every page that renders a CMS image,
//! replacing the per-page reimplementations the site previously carried.

mod gallery;
mod reference;
mod resolve;

pub use gallery::{GALLERY_FALLBACK_LEN, resolve_gallery_urls};
pub use reference::ParsedAssetReference;
pub use resolve::{PLACEHOLDER_IMAGE_PATH, resolve_image_url};
