//! Pipeline orchestration - wires together all collage stages.

use image::DynamicImage;
use std::path::{Path, PathBuf};

use crate::config::{CollageConfig, Config};
use crate::error::{PipelineError, PipelineResult};
use crate::layout::{Composition, Compositor, LayoutPlan};
use crate::output::CollageWriter;
use crate::types::CollageSummary;

use super::decode::ImageDecoder;
use super::discovery::{DiscoveredFile, FileDiscovery};
use super::preprocess::ImagePreprocessor;
use super::validate::Validator;

/// Options for controlling a collage run.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Log and skip files that fail to load instead of aborting the run
    pub skip_unreadable: bool,
}

/// Builds collages: discover → validate → decode → orient → preprocess →
/// pack → compose → save.
pub struct CollageBuilder {
    collage: CollageConfig,
    discovery: FileDiscovery,
    validator: Validator,
    decoder: ImageDecoder,
    preprocessor: ImagePreprocessor,
    compositor: Compositor,
    writer: CollageWriter,
    output_path: PathBuf,
}

impl CollageBuilder {
    /// Create a builder from the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            collage: config.collage.clone(),
            discovery: FileDiscovery::new(config.discovery.clone()),
            validator: Validator::new(config.limits.clone()),
            decoder: ImageDecoder::new(config.limits.clone()),
            preprocessor: ImagePreprocessor::new(config.collage.clone())
                .with_max_tile_pixels(config.limits.max_tile_pixels),
            compositor: Compositor::new(config.collage.clone()),
            writer: CollageWriter::new(&config.output),
            output_path: config.output_path(),
        }
    }

    /// Where the collage will be written.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Discover all supported image files in a directory.
    pub fn discover(&self, dir: &Path) -> PipelineResult<Vec<DiscoveredFile>> {
        self.discovery.discover(dir)
    }

    /// Load one file and rotate it upright.
    pub fn load(&self, path: &Path) -> PipelineResult<DynamicImage> {
        self.validator.validate(path)?;
        let decoded = self.decoder.decode(path)?;
        if decoded.orientation.is_rotation() {
            tracing::debug!("Rotating {:?} ({:?})", path, decoded.orientation);
        }
        Ok(decoded.into_upright())
    }

    /// Lay out `images` and paint them, entirely in memory.
    ///
    /// An empty `images` yields the degenerate `padding`-tall canvas.
    pub fn render(&self, images: Vec<DynamicImage>) -> PipelineResult<Composition> {
        let plan = LayoutPlan::new(images.len(), &self.collage);
        plan.validate(&self.collage)?;
        tracing::debug!(
            "Layout: {} image(s), {} column(s), row height {}",
            images.len(),
            plan.columns,
            plan.row_height
        );

        let tiles = images
            .into_iter()
            .map(|image| self.preprocessor.preprocess(&image, plan.row_height))
            .collect::<PipelineResult<Vec<_>>>()?;

        Ok(self.compositor.compose(tiles, plan.row_height))
    }

    /// Build a collage from already-discovered files and save it.
    ///
    /// `on_file` is called once per file after it has been attempted, for
    /// progress reporting.
    pub fn create<F>(
        &self,
        files: &[DiscoveredFile],
        options: &BuildOptions,
        mut on_file: F,
    ) -> PipelineResult<CollageSummary>
    where
        F: FnMut(&Path),
    {
        let start = std::time::Instant::now();
        let mut images = Vec::with_capacity(files.len());
        let mut skipped = Vec::new();

        for file in files {
            match self.load(&file.path) {
                Ok(image) => images.push(image),
                Err(e) if options.skip_unreadable => {
                    tracing::warn!("Skipping {:?}: {e}", file.path);
                    skipped.push(file.path.clone());
                }
                Err(e) => return Err(e),
            }
            on_file(&file.path);
        }
        tracing::trace!("  Load: {:?}", start.elapsed());

        if images.is_empty() {
            return Err(PipelineError::NoImages);
        }

        let render_start = std::time::Instant::now();
        let composition = self.render(images)?;
        tracing::trace!("  Render: {:?}", render_start.elapsed());

        let (width, height) = composition.canvas.dimensions();
        if height != self.collage.height {
            tracing::debug!(
                "Requested height {} is advisory; collage is {}px tall",
                self.collage.height,
                height
            );
        }

        self.writer.save(composition.canvas, &self.output_path)?;
        tracing::info!("Total images used in collage: {}", composition.placed);
        tracing::debug!("Collage built in {:?}", start.elapsed());

        Ok(CollageSummary {
            output_path: self.output_path.clone(),
            width,
            height,
            requested_height: self.collage.height,
            row_height: composition.row_height,
            rows: composition.rows,
            images_used: composition.placed,
            skipped,
        })
    }

    /// Discover the images in `dir` and build the collage.
    pub fn build(&self, dir: &Path, options: &BuildOptions) -> PipelineResult<CollageSummary> {
        let files = self.discover(dir)?;
        if files.is_empty() {
            return Err(PipelineError::NoImages);
        }
        self.create(&files, options, |_| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn builder(width: u32) -> CollageBuilder {
        let mut config = Config::default();
        config.collage.width = width;
        CollageBuilder::new(&config)
    }

    fn blank(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::new(width, height))
    }

    #[test]
    fn test_build_options_default() {
        let options = BuildOptions::default();
        assert!(!options.skip_unreadable);
    }

    #[test]
    fn test_render_five_image_scenario() {
        let images = vec![
            blank(300, 200),
            blank(150, 300),
            blank(400, 100),
            blank(200, 200),
            blank(600, 150),
        ];
        let composition = builder(900).render(images).unwrap();

        assert_eq!(composition.row_height, 174);
        assert_eq!(composition.canvas.dimensions(), (900, 542));
        assert_eq!(composition.placed, 5);
        let sizes: Vec<usize> = composition.rows.iter().map(|r| r.tiles).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn test_render_empty_is_degenerate() {
        let composition = builder(900).render(Vec::new()).unwrap();
        assert_eq!(composition.canvas.dimensions(), (900, 5));
        assert!(composition.rows.is_empty());
    }

    #[test]
    fn test_render_rejects_rows_below_min_dimension() {
        let mut config = Config::default();
        config.collage.width = 40;
        config.collage.column_width_hint = 1;
        let err = CollageBuilder::new(&config)
            .render(vec![blank(10, 10); 4])
            .unwrap_err();
        assert!(matches!(err, PipelineError::Layout(_)));
    }

    #[test]
    fn test_render_rejects_panorama_too_wide_for_row() {
        // One image at 1920 wide gives a 1910px row; 20000x20 would need a
        // 1910000px-wide tile
        let err = builder(1920)
            .render(vec![blank(20000, 20)])
            .unwrap_err();
        assert!(matches!(err, PipelineError::Layout(_)));
    }

    #[test]
    fn test_build_missing_dir() {
        let err = builder(900)
            .build(Path::new("/nonexistent/photos"), &BuildOptions::default())
            .unwrap_err();
        assert!(matches!(err, PipelineError::NotADirectory(_)));
    }

    #[test]
    fn test_build_empty_dir_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.output.path = dir.path().join("collage.jpg");

        let builder = CollageBuilder::new(&config);
        let err = builder
            .build(dir.path(), &BuildOptions::default())
            .unwrap_err();
        assert!(matches!(err, PipelineError::NoImages));
        assert!(!builder.output_path().exists());
    }
}
