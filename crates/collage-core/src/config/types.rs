//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Collage geometry.
///
/// Handed to the preprocessor and the compositor at construction and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollageConfig {
    /// Output width in pixels
    pub width: u32,

    /// Requested height in pixels. Advisory: the real height follows from
    /// the number of rows.
    pub height: u32,

    /// Space between images and around the border
    pub padding: u32,

    /// Radius of the rounded tile corners
    pub corner_radius: u32,

    /// Smallest row height the layout accepts
    pub min_dimension: u32,

    /// Approximate tile width used to estimate the column count
    pub column_width_hint: u32,
}

impl Default for CollageConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            padding: 5,
            corner_radius: 20,
            min_dimension: 10,
            column_width_hint: 150,
        }
    }
}

/// Input discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Accepted file extensions
    pub supported_formats: Vec<String>,

    /// Match extensions exactly instead of ignoring case
    pub case_sensitive: bool,

    /// Descend into subdirectories
    pub recursive: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            supported_formats: vec![
                "jpg".to_string(),
                "jpeg".to_string(),
                "png".to_string(),
                "bmp".to_string(),
            ],
            case_sensitive: false,
            recursive: false,
        }
    }
}

/// Resource limits to protect against problematic inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum file size in megabytes
    pub max_file_size_mb: u64,

    /// Maximum image dimension (width or height)
    pub max_image_dimension: u32,

    /// Maximum pixel count of one resized tile
    pub max_tile_pixels: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 100,
            max_image_dimension: 20000,
            max_tile_pixels: 100_000_000,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the collage is written (`~` is expanded)
    pub path: PathBuf,

    /// JPEG quality, 1-100
    pub jpeg_quality: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("collage.jpg"),
            jpeg_quality: 90,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
