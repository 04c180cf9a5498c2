#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod amenities;
pub mod asset_urls;
pub mod config;
pub mod models;
pub mod submissions;

pub use asset_urls::{PLACEHOLDER_IMAGE_PATH, resolve_gallery_urls, resolve_image_url};
pub use config::ResolverConfig;
pub use models::{AssetPointer, ImageSource, ImageTransform};
