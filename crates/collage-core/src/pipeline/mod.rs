//! Collage pipeline components.
//!
//! - **discovery**: Find image files in the input folder
//! - **validate**: Pre-decode checks (size, magic bytes)
//! - **decode**: Load and decode images
//! - **orientation**: Rotate images upright from EXIF metadata
//! - **corners**: Rounded-corner alpha masks
//! - **preprocess**: Resize to row height and round the corners
//! - **processor**: Orchestrates the full pipeline

pub mod corners;
pub mod decode;
pub mod discovery;
pub mod orientation;
pub mod preprocess;
pub mod processor;
pub mod validate;

// Re-exports for convenient access
pub use decode::{DecodedImage, ImageDecoder};
pub use discovery::{DiscoveredFile, FileDiscovery};
pub use orientation::Orientation;
pub use preprocess::ImagePreprocessor;
pub use processor::{BuildOptions, CollageBuilder};
pub use validate::Validator;
