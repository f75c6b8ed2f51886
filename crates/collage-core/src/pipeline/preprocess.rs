//! Turns an upright image into a collage tile: proportional resize to the
//! row height, then rounded corners.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use crate::config::{CollageConfig, LimitsConfig};
use crate::error::{PipelineError, PipelineResult};
use crate::types::Tile;

use super::corners::{apply_mask, rounded_mask};

/// Width of an image scaled to `row_height`, keeping its aspect ratio.
///
/// Never returns 0, so the resampler always has something to produce.
pub fn scaled_width(width: u32, height: u32, row_height: u32) -> u32 {
    let scaled = f64::from(row_height) * f64::from(width) / f64::from(height.max(1));
    scaled.round().max(1.0) as u32
}

/// Resizes images to the row height and rounds their corners.
pub struct ImagePreprocessor {
    config: CollageConfig,
    max_tile_pixels: u64,
}

impl ImagePreprocessor {
    /// Create a preprocessor for the given collage geometry, with the default
    /// tile size limit.
    pub fn new(config: CollageConfig) -> Self {
        Self {
            config,
            max_tile_pixels: LimitsConfig::default().max_tile_pixels,
        }
    }

    /// Cap the pixel count of a single resized tile.
    pub fn with_max_tile_pixels(mut self, max_tile_pixels: u64) -> Self {
        self.max_tile_pixels = max_tile_pixels;
        self
    }

    /// Build a tile `row_height` pixels tall from `image`.
    ///
    /// `image` is expected to be orientation-corrected already and is left
    /// untouched. `row_height` is not checked against `min_dimension` here;
    /// `LayoutPlan::validate` does that before any image is resized.
    ///
    /// Very wide panoramas at a tall row height would need a buffer larger
    /// than `max_tile_pixels`; those are rejected with a layout error.
    pub fn preprocess(&self, image: &DynamicImage, row_height: u32) -> PipelineResult<Tile> {
        let (width, height) = image.dimensions();
        let new_width = scaled_width(width, height, row_height);

        let pixels = u64::from(new_width) * u64::from(row_height);
        if pixels > self.max_tile_pixels {
            return Err(PipelineError::Layout(format!(
                "{width}x{height} image scales to a {new_width}x{row_height} tile \
                 ({pixels} pixels > {})",
                self.max_tile_pixels
            )));
        }

        let resized = image.resize_exact(new_width, row_height, FilterType::Lanczos3);
        let mut rgba = resized.into_rgba8();

        let mask = rounded_mask(new_width, row_height, self.config.corner_radius);
        apply_mask(&mut rgba, &mask);

        tracing::trace!(
            "Tile {}x{} -> {}x{}",
            width,
            height,
            new_width,
            row_height
        );
        Ok(Tile { image: rgba })
    }
}
