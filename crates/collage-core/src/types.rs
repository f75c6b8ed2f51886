//! Core data types shared by the pipeline stages.

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A resized, corner-rounded image ready to be placed in a row.
///
/// Every tile in one collage run has the same height (the row height).
#[derive(Debug, Clone)]
pub struct Tile {
    /// Pixels with the rounded-corner mask in the alpha channel
    pub image: RgbaImage,
}

impl Tile {
    /// Width of the tile in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height of the tile in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// An ordered group of tiles painted on one line of the canvas.
#[derive(Debug, Clone)]
pub struct Row<T> {
    /// Members in input order
    pub items: Vec<T>,

    /// Sum of member widths plus one padding unit per member
    pub width: u32,
}

impl<T> Default for Row<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            width: 0,
        }
    }
}

impl<T> Row<T> {
    /// Number of members in the row.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the row has no members.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Where a row ended up on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowPlacement {
    /// Number of tiles in the row
    pub tiles: usize,

    /// Accumulated row width including padding
    pub width: u32,

    /// Left edge of the first tile (negative for a single oversized tile)
    pub x: i64,

    /// Top edge of the row
    pub y: u32,
}

/// Summary of one finished collage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollageSummary {
    /// File the collage was written to
    pub output_path: PathBuf,

    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels (derived from the row count)
    pub height: u32,

    /// Height the caller asked for
    pub requested_height: u32,

    /// Height of every row
    pub row_height: u32,

    /// Row layout, top to bottom
    pub rows: Vec<RowPlacement>,

    /// Number of images painted onto the canvas
    pub images_used: usize,

    /// Files that were discovered but could not be loaded
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped: Vec<PathBuf>,
}

/// Reported in place of a summary when no collage was written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmptyRun {
    pub warning: String,

    /// Always 0; lets callers read `images_used` from either report
    pub images_used: usize,
}

impl EmptyRun {
    pub fn new(warning: impl Into<String>) -> Self {
        Self {
            warning: warning.into(),
            images_used: 0,
        }
    }
}
