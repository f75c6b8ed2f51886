//! Paints packed rows onto the collage canvas.

use image::{Rgba, RgbaImage};

use crate::config::CollageConfig;
use crate::types::{Row, RowPlacement, Tile};

use super::{canvas_height, pack_rows};

/// Opaque black, shown through the rounded corners and the padding.
const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Result of composing one collage.
#[derive(Debug)]
pub struct Composition {
    /// The painted canvas, `collage_width × canvas_height`
    pub canvas: RgbaImage,

    /// Height shared by every row
    pub row_height: u32,

    /// Where each row was painted, top to bottom
    pub rows: Vec<RowPlacement>,

    /// Number of tiles painted
    pub placed: usize,
}

/// Packs tiles into rows and paints them, centred, on a black canvas.
pub struct Compositor {
    config: CollageConfig,
}

impl Compositor {
    /// Create a compositor for the given collage geometry.
    pub fn new(config: CollageConfig) -> Self {
        Self { config }
    }

    /// Pack `tiles` (all `row_height` tall) into rows and paint them.
    ///
    /// An empty `tiles` yields a canvas that is only `padding` tall.
    pub fn compose(&self, tiles: Vec<Tile>, row_height: u32) -> Composition {
        let width = self.config.width;
        let padding = self.config.padding;

        let rows = pack_rows(tiles, width, padding, Tile::width);
        let height = canvas_height(row_height, padding, rows.len());
        tracing::debug!(
            "Composing {} row(s) onto {}x{} canvas (row height {})",
            rows.len(),
            width,
            height,
            row_height
        );

        let mut canvas = RgbaImage::from_pixel(width, height, BACKGROUND);
        let mut placements = Vec::with_capacity(rows.len());
        let mut placed = 0;
        let mut y = padding;

        for row in rows {
            let placement = self.paint_row(&mut canvas, row, y);
            placed += placement.tiles;
            placements.push(placement);
            y = y.saturating_add(row_height + padding);
        }

        Composition {
            canvas,
            row_height,
            rows: placements,
            placed,
        }
    }

    /// Paint one row with its left edge chosen so the row is centred.
    fn paint_row(&self, canvas: &mut RgbaImage, row: Row<Tile>, y: u32) -> RowPlacement {
        let x0 = (i64::from(self.config.width) - i64::from(row.width)).div_euclid(2);
        let tiles = row.len();

        let mut x = x0;
        for tile in &row.items {
            paint_tile(canvas, &tile.image, x, i64::from(y));
            x += i64::from(tile.width()) + i64::from(self.config.padding);
        }

        RowPlacement {
            tiles,
            width: row.width,
            x: x0,
            y,
        }
    }
}

/// Alpha-blend `tile` onto `canvas` at `(x, y)`, clipping whatever falls
/// outside the canvas.
fn paint_tile(canvas: &mut RgbaImage, tile: &RgbaImage, x: i64, y: i64) {
    let (canvas_w, canvas_h) = (i64::from(canvas.width()), i64::from(canvas.height()));
    let x_start = (-x).clamp(0, i64::from(tile.width()));
    let y_start = (-y).clamp(0, i64::from(tile.height()));
    let x_end = (canvas_w - x).clamp(x_start, i64::from(tile.width()));
    let y_end = (canvas_h - y).clamp(y_start, i64::from(tile.height()));

    for ty in y_start..y_end {
        for tx in x_start..x_end {
            let src = tile.get_pixel(tx as u32, ty as u32);
            let dst = canvas.get_pixel_mut((x + tx) as u32, (y + ty) as u32);
            blend_pixel(dst, src);
        }
    }
}

fn blend_pixel(base: &mut Rgba<u8>, overlay: &Rgba<u8>) {
    match overlay[3] {
        0 => {}
        255 => *base = *overlay,
        a => {
            let alpha = f32::from(a) / 255.0;
            let inv_alpha = 1.0 - alpha;
            for idx in 0..3 {
                base[idx] = (f32::from(overlay[idx]) * alpha + f32::from(base[idx]) * inv_alpha)
                    .round()
                    .clamp(0.0, 255.0) as u8;
            }
            base[3] = 255;
        }
    }
}
