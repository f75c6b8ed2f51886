//! Collage Core - arrange a folder of photos into one row-packed image.
//!
//! Images are rotated upright from their EXIF orientation, scaled to a common
//! row height, given rounded corners, packed greedily into rows no wider than
//! the collage, and painted centred on a black canvas whose height follows
//! from the number of rows.
//!
//! # Architecture
//!
//! ```text
//! Folder → Discover → Decode → Orient → Preprocess → Pack → Compose → JPEG
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use collage_core::{BuildOptions, CollageBuilder, Config};
//!
//! fn main() -> collage_core::Result<()> {
//!     let config = Config::load()?;
//!     let builder = CollageBuilder::new(&config);
//!
//!     let summary = builder.build("./photos".as_ref(), &BuildOptions::default())?;
//!     println!("Total images used in collage: {}", summary.images_used);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod output;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{CollageError, ConfigError, PipelineError, PipelineResult, Result};
pub use layout::{Composition, Compositor, LayoutPlan};
pub use output::CollageWriter;
pub use pipeline::{BuildOptions, CollageBuilder, ImagePreprocessor, Orientation};
pub use types::{CollageSummary, EmptyRun, Row, RowPlacement, Tile};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
