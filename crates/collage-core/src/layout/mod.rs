//! Row layout: how many pixels tall a row is, which tiles share a row, and
//! how the rows are painted onto the canvas.
//!
//! ```text
//! tile count + width → LayoutPlan (columns, row_height)
//! tiles → pack_rows → Vec<Row> → Compositor → canvas
//! ```

pub mod compose;
pub mod pack;

pub use compose::{Composition, Compositor};
pub use pack::pack_rows;

use crate::config::CollageConfig;
use crate::error::{PipelineError, PipelineResult};

/// Row geometry derived from the tile count and the collage width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    /// Estimated tiles per row; only used to derive `row_height`
    pub columns: u32,

    /// Target height of every tile
    pub row_height: u32,
}

impl LayoutPlan {
    /// Compute the plan for `tile_count` images.
    ///
    /// `columns = max(1, min(tile_count, width / column_width_hint))` and
    /// `row_height = (width - padding * (columns + 1)) / columns`.
    pub fn new(tile_count: usize, config: &CollageConfig) -> Self {
        let by_width = config.width / config.column_width_hint.max(1);
        let count = u32::try_from(tile_count).unwrap_or(u32::MAX);
        let columns = count.min(by_width).max(1);
        let gutters = config.padding.saturating_mul(columns + 1);
        let row_height = config.width.saturating_sub(gutters) / columns;

        Self {
            columns,
            row_height,
        }
    }

    /// Reject plans whose rows would be thinner than `min_dimension`.
    pub fn validate(&self, config: &CollageConfig) -> PipelineResult<()> {
        if self.row_height < config.min_dimension {
            return Err(PipelineError::Layout(format!(
                "row height {}px is below the minimum of {}px (width {}, padding {}, {} columns)",
                self.row_height, config.min_dimension, config.width, config.padding, self.columns
            )));
        }
        Ok(())
    }
}

/// Canvas height for `row_count` rows: `(row_height + padding) * rows + padding`.
pub fn canvas_height(row_height: u32, padding: u32, row_count: usize) -> u32 {
    let rows = u32::try_from(row_count).unwrap_or(u32::MAX);
    (row_height + padding)
        .saturating_mul(rows)
        .saturating_add(padding)
}
