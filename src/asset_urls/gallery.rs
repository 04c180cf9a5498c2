use crate::asset_urls::resolve::{PLACEHOLDER_IMAGE_PATH, resolve_image_url};
use crate::config::ResolverConfig;
use crate::models::{ImageSource, ImageTransform};

/// Number of placeholder entries returned for an absent or empty gallery.
///
/// Gallery layouts on the site are built around three slots, so the fallback
/// keeps that length rather than returning an empty sequence.
pub const GALLERY_FALLBACK_LEN: usize = 3;

/// Resolve a sequence of CMS image sources into CDN URLs, order preserved.
///
/// Each element goes through [`resolve_image_url`], so individual broken
/// references degrade to placeholders without affecting their neighbours.
/// An absent or empty input yields [`GALLERY_FALLBACK_LEN`] placeholder
/// entries.
pub fn resolve_gallery_urls(
    config: &ResolverConfig,
    sources: Option<&[ImageSource]>,
    transform: Option<&ImageTransform>,
) -> Vec<String> {
    match sources {
        Some(sources) if !sources.is_empty() => sources
            .iter()
            .map(|source| resolve_image_url(config, Some(source), transform))
            .collect(),
        _ => vec![PLACEHOLDER_IMAGE_PATH.to_string(); GALLERY_FALLBACK_LEN],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetPointer;

    fn config() -> ResolverConfig {
        ResolverConfig {
            project_id: "p123".into(),
            dataset: "production".into(),
        }
    }

    #[test]
    fn absent_and_empty_inputs_yield_three_placeholders() {
        let empty: Vec<ImageSource> = Vec::new();
        for sources in [None, Some(empty.as_slice())] {
            let urls = resolve_gallery_urls(&config(), sources, None);
            assert_eq!(urls.len(), GALLERY_FALLBACK_LEN);
            assert!(urls.iter().all(|url| url == PLACEHOLDER_IMAGE_PATH));
        }
    }

    #[test]
    fn maps_each_source_in_order() {
        let sources = vec![
            ImageSource::new(AssetPointer::from_reference("image-first-100x100-png")),
            ImageSource::new(AssetPointer::from_reference("image-second-200x200-jpg")),
        ];

        let urls = resolve_gallery_urls(&config(), Some(&sources), None);
        assert_eq!(urls, vec![
            "https://cdn.sanity.io/images/p123/production/first-100x100.png".to_string(),
            "https://cdn.sanity.io/images/p123/production/second-200x200.jpeg".to_string(),
        ]);
    }

    #[test]
    fn broken_entries_degrade_individually() {
        let sources = vec![
            ImageSource::default(),
            ImageSource::new(AssetPointer::from_reference("image-ok-100x100-png")),
        ];

        let urls = resolve_gallery_urls(&config(), Some(&sources), None);
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0], PLACEHOLDER_IMAGE_PATH);
        assert!(urls[1].ends_with("ok-100x100.png"));
    }

    #[test]
    fn applies_the_transform_to_every_entry() {
        let sources = vec![
            ImageSource::new(AssetPointer::from_reference("image-a-100x100-png")),
            ImageSource::new(AssetPointer::from_reference("image-b-200x200-png")),
        ];
        let transform = ImageTransform {
            width: Some(640),
            ..Default::default()
        };

        let urls = resolve_gallery_urls(&config(), Some(&sources), Some(&transform));
        assert!(urls.iter().all(|url| url.ends_with("?w=640")));
    }
}
