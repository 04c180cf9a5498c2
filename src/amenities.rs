//! Emoji lookup for package amenity labels.
//!
//! Package listings render each amenity with a small emoji marker. The
//! mapping was previously copied into every listing component; this module is
//! the single shared table.

use std::collections::BTreeMap;

/// Marker used for amenities without a dedicated emoji.
pub const DEFAULT_AMENITY_EMOJI: &str = "✨";

fn amenity_table() -> &'static BTreeMap<&'static str, &'static str> {
    use std::sync::OnceLock;

    static TABLE: OnceLock<BTreeMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        BTreeMap::from([
            ("air conditioning", "❄️"),
            ("airport transfer", "🚐"),
            ("bar", "🍸"),
            ("beach access", "🏖️"),
            ("breakfast", "🥐"),
            ("city tour", "🏛️"),
            ("guided tours", "🗺️"),
            ("gym", "🏋️"),
            ("hiking", "🥾"),
            ("kids club", "🧸"),
            ("parking", "🅿️"),
            ("pool", "🏊"),
            ("restaurant", "🍽️"),
            ("room service", "🛎️"),
            ("safari", "🦁"),
            ("snorkeling", "🤿"),
            ("spa", "💆"),
            ("wifi", "📶"),
        ])
    })
}

/// Look up the emoji for an amenity label.
///
/// Matching ignores case and surrounding whitespace; unknown labels map to
/// [`DEFAULT_AMENITY_EMOJI`] so listings always render a marker.
pub fn amenity_emoji(label: &str) -> &'static str {
    let normalised = label.trim().to_lowercase();
    amenity_table()
        .get(normalised.as_str())
        .copied()
        .unwrap_or(DEFAULT_AMENITY_EMOJI)
}
