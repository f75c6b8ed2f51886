//! The `collage create` command.

use clap::Args;
use collage_core::output::write_json;
use collage_core::pipeline::FileDiscovery;
use collage_core::{BuildOptions, CollageBuilder, CollageSummary, Config, EmptyRun, PipelineError};
use console::Style;
use std::path::{Path, PathBuf};

/// Arguments for the `create` command.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Folder containing the images
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file (defaults to collage.jpg in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Collage width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Requested collage height in pixels. Advisory: the real height follows
    /// from the number of rows
    #[arg(long)]
    pub height: Option<u32>,

    /// Space between images in pixels
    #[arg(long)]
    pub padding: Option<u32>,

    /// Radius of the rounded corners in pixels
    #[arg(long)]
    pub corner_radius: Option<u32>,

    /// JPEG quality (1-100)
    #[arg(long)]
    pub quality: Option<u8>,

    /// Include images in subfolders
    #[arg(short, long)]
    pub recursive: bool,

    /// Match file extensions case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Skip files that cannot be decoded instead of failing
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Print a JSON summary to stdout
    #[arg(long)]
    pub json: bool,
}

/// Manual Default impl for constructing CreateArgs outside of clap.
///
/// Used by the interactive module to build CreateArgs field-by-field.
impl Default for CreateArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: None,
            width: None,
            height: None,
            padding: None,
            corner_radius: None,
            quality: None,
            recursive: false,
            case_sensitive: false,
            skip_unreadable: false,
            json: false,
        }
    }
}

impl CreateArgs {
    /// Apply the command-line overrides on top of the loaded configuration.
    pub fn apply_to(&self, config: &mut Config) -> anyhow::Result<()> {
        if let Some(width) = self.width {
            config.collage.width = width;
        }
        if let Some(height) = self.height {
            config.collage.height = height;
        }
        if let Some(padding) = self.padding {
            config.collage.padding = padding;
        }
        if let Some(radius) = self.corner_radius {
            config.collage.corner_radius = radius;
        }
        if let Some(quality) = self.quality {
            config.output.jpeg_quality = quality;
        }
        if let Some(ref output) = self.output {
            config.output.path = output.clone();
        }
        if self.recursive {
            config.discovery.recursive = true;
        }
        if self.case_sensitive {
            config.discovery.case_sensitive = true;
        }
        config.validate()?;
        Ok(())
    }
}

/// Execute the create command.
pub fn execute(args: CreateArgs, mut config: Config) -> anyhow::Result<()> {
    args.apply_to(&mut config)?;

    if !args.input.is_dir() {
        anyhow::bail!(
            "Not a folder: {:?}\n\n  Hint: Please select a valid folder containing images.",
            args.input
        );
    }

    let builder = CollageBuilder::new(&config);
    let files = builder.discover(&args.input)?;
    if files.is_empty() {
        return report_empty(&no_images_message(&args.input), args.json);
    }
    tracing::info!(
        "Found {} image(s), {:.1} MB",
        files.len(),
        FileDiscovery::total_size(&files) as f64 / (1024.0 * 1024.0)
    );

    let options = BuildOptions {
        skip_unreadable: args.skip_unreadable,
    };

    let show_progress = !args.json && console::Term::stderr().is_term();
    let pb = show_progress.then(|| create_progress_bar(files.len() as u64));

    let result = builder.create(&files, &options, |path| {
        if let Some(ref pb) = pb {
            if let Some(name) = path.file_name() {
                pb.set_message(name.to_string_lossy().into_owned());
            }
            pb.inc(1);
        }
    });

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    match result {
        Ok(summary) => report(&summary, args.json),
        Err(PipelineError::NoImages) => report_empty(
            &format!("None of the images in {} could be used.", args.input.display()),
            args.json,
        ),
        Err(e) => Err(e.into()),
    }
}

/// Print the outcome: a JSON summary on stdout, or a short human-readable note.
fn report(summary: &CollageSummary, json: bool) -> anyhow::Result<()> {
    if json {
        write_json(std::io::stdout().lock(), summary, true)?;
        return Ok(());
    }

    if !summary.skipped.is_empty() {
        tracing::warn!("{} file(s) skipped", summary.skipped.len());
    }
    println!("Total images used in collage: {}", summary.images_used);
    println!(
        "Collage created: {} ({}x{}, {} row(s))",
        summary.output_path.display(),
        summary.width,
        summary.height,
        summary.rows.len()
    );
    Ok(())
}

fn no_images_message(dir: &Path) -> String {
    format!("No images found in the selected folder: {}", dir.display())
}

/// Print the warning for a run that wrote no collage. Not routed through
/// tracing, so it shows at any log level.
fn report_empty(message: &str, json: bool) -> anyhow::Result<()> {
    if json {
        write_json(std::io::stdout().lock(), &EmptyRun::new(message), true)?;
    } else {
        let warn = Style::new().for_stderr().yellow();
        eprintln!("{} {message}", warn.apply_to("Warning:"));
    }
    Ok(())
}

fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides() {
        let args = CreateArgs {
            width: Some(1280),
            height: Some(720),
            padding: Some(8),
            quality: Some(75),
            output: Some(PathBuf::from("out/trip.jpg")),
            recursive: true,
            ..CreateArgs::default()
        };
        let mut config = Config::default();
        args.apply_to(&mut config).unwrap();

        assert_eq!(config.collage.width, 1280);
        assert_eq!(config.collage.height, 720);
        assert_eq!(config.collage.padding, 8);
        assert_eq!(config.collage.corner_radius, 20);
        assert_eq!(config.output.jpeg_quality, 75);
        assert_eq!(config.output.path, PathBuf::from("out/trip.jpg"));
        assert!(config.discovery.recursive);
    }

    #[test]
    fn test_apply_rejects_invalid_override() {
        let args = CreateArgs {
            width: Some(0),
            ..CreateArgs::default()
        };
        let mut config = Config::default();
        assert!(args.apply_to(&mut config).is_err());
    }

    #[test]
    fn test_execute_rejects_missing_folder() {
        let args = CreateArgs {
            input: PathBuf::from("/nonexistent/photos"),
            ..CreateArgs::default()
        };
        let err = execute(args, Config::default()).unwrap_err();
        assert!(err.to_string().contains("Not a folder"));
    }

    #[test]
    fn test_execute_empty_folder_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("collage.jpg");
        let args = CreateArgs {
            input: dir.path().to_path_buf(),
            output: Some(output.clone()),
            ..CreateArgs::default()
        };
        execute(args, Config::default()).unwrap();
        assert!(!output.exists());
    }

    #[test]
    fn test_no_images_message_names_folder() {
        let message = no_images_message(Path::new("/photos/trip"));
        assert!(message.starts_with("No images found"));
        assert!(message.ends_with("/photos/trip"));
    }

    #[test]
    fn test_empty_folder_with_quiet_logging_still_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("collage.jpg");
        let mut config = Config::default();
        config.logging.level = "error".into();
        let args = CreateArgs {
            input: dir.path().to_path_buf(),
            output: Some(output.clone()),
            json: true,
            ..CreateArgs::default()
        };
        execute(args, config).unwrap();
        assert!(!output.exists());
    }
}
