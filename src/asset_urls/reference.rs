use regex::Regex;

fn dimensions_pattern() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+x\d+$").expect("invalid dimensions regex"))
}

fn extension_pattern() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9]+$").expect("invalid extension regex"))
}

/// The `id`, `dimensions` and `extension` fields extracted from a well-formed
/// asset reference.
///
/// Classification is an explicit step: a reference either parses into this
/// struct or it does not, and callers fall back to the placeholder on `None`
/// rather than catching errors mid-construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAssetReference {
    /// Opaque identifier segment of the reference.
    pub id: String,
    /// Encoded `<width>x<height>` token.
    pub dimensions: String,
    /// Original file extension, lowercase.
    pub extension: String,
}

impl ParsedAssetReference {
    /// Parse a `_ref`-style reference string shaped `kind-id-dimensions-extension`.
    ///
    /// Returns `None` for any other shape: wrong segment count, empty
    /// segments, or a dimensions/extension token that does not look like one.
    pub fn from_reference(value: &str) -> Option<Self> {
        let segments: Vec<&str> = value.split('-').collect();
        match segments.as_slice() {
            [kind, id, dimensions, extension] if !kind.is_empty() => {
                Self::from_segments(id, dimensions, extension)
            }
            _ => None,
        }
    }

    /// Parse an `_id`-style identifier shaped `image-id-dimensions-extension`.
    ///
    /// The literal `image-` prefix is stripped before the same splitting
    /// logic applies, so equivalent triples resolve identically to their
    /// `_ref`-shaped counterparts.
    pub fn from_id(value: &str) -> Option<Self> {
        let remainder = value.strip_prefix("image-")?;
        let segments: Vec<&str> = remainder.split('-').collect();
        match segments.as_slice() {
            [id, dimensions, extension] => Self::from_segments(id, dimensions, extension),
            _ => None,
        }
    }

    fn from_segments(id: &str, dimensions: &str, extension: &str) -> Option<Self> {
        if id.is_empty()
            || !dimensions_pattern().is_match(dimensions)
            || !extension_pattern().is_match(extension)
        {
            return None;
        }

        Some(Self {
            id: id.to_string(),
            dimensions: dimensions.to_string(),
            extension: extension.to_string(),
        })
    }

    /// Extension as served by the CDN: `jpg` is rewritten to `jpeg`, every
    /// other extension passes through unchanged.
    pub fn canonical_extension(&self) -> &str {
        if self.extension == "jpg" {
            "jpeg"
        } else {
            &self.extension
        }
    }
}
