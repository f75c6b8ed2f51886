//! Writing the finished collage and its summary.

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage, RgbaImage};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::config::OutputConfig;
use crate::error::PipelineError;

/// Encodes the canvas as JPEG.
pub struct CollageWriter {
    quality: u8,
}

impl CollageWriter {
    /// Create a writer with the configured JPEG quality.
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            quality: config.jpeg_quality,
        }
    }

    /// Drop the canvas alpha channel. The background is opaque, so nothing
    /// visible is lost.
    pub fn flatten(canvas: RgbaImage) -> RgbImage {
        DynamicImage::ImageRgba8(canvas).into_rgb8()
    }

    /// Encode `canvas` as JPEG into any writer.
    pub fn encode<W: Write>(&self, canvas: RgbaImage, writer: W) -> image::ImageResult<()> {
        let rgb = Self::flatten(canvas);
        let mut encoder = JpegEncoder::new_with_quality(writer, self.quality);
        encoder.encode_image(&rgb)
    }

    /// Save `canvas` to `path`, creating the parent directory if needed.
    pub fn save(&self, canvas: RgbaImage, path: &Path) -> Result<(), PipelineError> {
        let encode_err = |message: String| PipelineError::Encode {
            path: path.to_path_buf(),
            message,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| encode_err(e.to_string()))?;
        }

        let file = File::create(path).map_err(|e| encode_err(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        self.encode(canvas, &mut writer)
            .map_err(|e| encode_err(e.to_string()))?;
        writer.flush().map_err(|e| encode_err(e.to_string()))?;

        tracing::debug!("Collage written to {:?}", path);
        Ok(())
    }
}

/// Serialize `item` as JSON followed by a newline.
pub fn write_json<T: Serialize, W: Write>(mut writer: W, item: &T, pretty: bool) -> io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, item).map_err(io::Error::other)?;
    } else {
        serde_json::to_writer(&mut writer, item).map_err(io::Error::other)?;
    }
    writeln!(writer)
}
