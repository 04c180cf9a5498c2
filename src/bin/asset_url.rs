//! Debug helper that resolves a raw asset reference into a CDN URL.

use anyhow::Result;
use clap::Parser;

use sanity_asset_urls::models::{AssetPointer, ImageSource, ImageTransform};
use sanity_asset_urls::{ResolverConfig, resolve_image_url};

/// Resolve a CMS asset reference into a fetchable CDN image URL.
///
/// Project and dataset are taken from `SANITY_PROJECT_ID` and
/// `SANITY_DATASET`, with the crate defaults when unset.
#[derive(Debug, Parser)]
#[command(name = "asset-url", version)]
struct Cli {
    /// Reference string, e.g. `image-abc123-800x600-jpg`.
    reference: String,

    /// Treat the reference as an `_id`-style identifier instead of `_ref`.
    #[arg(long)]
    id: bool,

    /// Requested display width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Requested display height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Compression quality.
    #[arg(long)]
    quality: Option<u32>,

    /// CDN fit mode such as `crop` or `max`.
    #[arg(long)]
    fit: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ResolverConfig::from_env();

    let pointer = if cli.id {
        AssetPointer::from_id(cli.reference)
    } else {
        AssetPointer::from_reference(cli.reference)
    };
    let source = ImageSource::new(pointer);
    let transform = ImageTransform {
        width: cli.width,
        height: cli.height,
        quality: cli.quality,
        fit: cli.fit,
    };

    println!("{}", resolve_image_url(&config, Some(&source), Some(&transform)));
    Ok(())
}
