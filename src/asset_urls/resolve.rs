use crate::asset_urls::reference::ParsedAssetReference;
use crate::config::ResolverConfig;
use crate::models::{AssetPointer, ImageSource, ImageTransform};

/// Bundled placeholder rendered whenever a reference cannot be resolved.
///
/// The path must exist in the deployed site's static asset bundle; the
/// resolver assumes but does not verify its existence.
pub const PLACEHOLDER_IMAGE_PATH: &str = "/images/placeholder.jpg";

const CDN_BASE: &str = "https://cdn.sanity.io/images";

/// Resolve a CMS image source into a fetchable CDN URL.
///
/// Absent sources, absent asset pointers and malformed reference strings all
/// degrade to [`PLACEHOLDER_IMAGE_PATH`]; this function never fails, so a
/// broken reference renders as a visible placeholder instead of breaking the
/// page. When both pointer shapes are present the `_ref` string wins.
pub fn resolve_image_url(
    config: &ResolverConfig,
    source: Option<&ImageSource>,
    transform: Option<&ImageTransform>,
) -> String {
    let Some(asset) = source.and_then(|source| source.asset.as_ref()) else {
        return PLACEHOLDER_IMAGE_PATH.to_string();
    };

    match classify_pointer(asset) {
        Some(parsed) => build_cdn_url(config, &parsed, transform),
        None => PLACEHOLDER_IMAGE_PATH.to_string(),
    }
}

fn classify_pointer(asset: &AssetPointer) -> Option<ParsedAssetReference> {
    if let Some(reference) = asset.reference.as_deref() {
        return ParsedAssetReference::from_reference(reference);
    }
    asset
        .id
        .as_deref()
        .and_then(ParsedAssetReference::from_id)
}

fn build_cdn_url(
    config: &ResolverConfig,
    parsed: &ParsedAssetReference,
    transform: Option<&ImageTransform>,
) -> String {
    let mut url = format!(
        "{}/{}/{}/{}-{}.{}",
        CDN_BASE,
        config.project_id,
        config.dataset,
        parsed.id,
        parsed.dimensions,
        parsed.canonical_extension(),
    );

    if let Some(query) = transform.and_then(render_query) {
        url.push('?');
        url.push_str(&query);
    }

    url
}

/// Render the supplied parameters as a stable-order query string, or `None`
/// when no parameter was set.
fn render_query(transform: &ImageTransform) -> Option<String> {
    if transform.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    if let Some(width) = transform.width {
        parts.push(format!("w={width}"));
    }
    if let Some(height) = transform.height {
        parts.push(format!("h={height}"));
    }
    if let Some(quality) = transform.quality {
        parts.push(format!("q={quality}"));
    }
    if let Some(fit) = &transform.fit {
        parts.push(format!("fit={fit}"));
    }

    Some(parts.join("&"))
}
