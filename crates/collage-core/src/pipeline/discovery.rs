//! Finds the images in the input folder.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::DiscoveryConfig;
use crate::error::{PipelineError, PipelineResult};

/// Discovers image files in a directory.
pub struct FileDiscovery {
    config: DiscoveryConfig,
}

/// Information about a discovered file.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// Full path to the file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
}

impl FileDiscovery {
    /// Create a new file discovery instance.
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    /// List the supported image files in `dir`, sorted by path.
    ///
    /// Only the top level is scanned unless `recursive` is set. Fails if
    /// `dir` is not an existing directory.
    pub fn discover(&self, dir: &Path) -> PipelineResult<Vec<DiscoveredFile>> {
        if !dir.is_dir() {
            return Err(PipelineError::NotADirectory(dir.to_path_buf()));
        }

        let max_depth = if self.config.recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();

        for entry in WalkDir::new(dir)
            .max_depth(max_depth)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let entry_path = entry.path();
            if entry_path.is_file() && self.is_supported(entry_path) {
                if let Ok(meta) = entry.metadata() {
                    files.push(DiscoveredFile {
                        path: entry_path.to_path_buf(),
                        size: meta.len(),
                    });
                }
            }
        }

        // Sort by path for deterministic ordering
        files.sort_by(|a, b| a.path.cmp(&b.path));
        tracing::debug!("Discovered {} image(s) in {:?}", files.len(), dir);
        Ok(files)
    }

    /// Check if a file has a supported extension.
    fn is_supported(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };

        if self.config.case_sensitive {
            self.config.supported_formats.iter().any(|fmt| fmt == ext)
        } else {
            self.config
                .supported_formats
                .iter()
                .any(|fmt| fmt.eq_ignore_ascii_case(ext))
        }
    }

    /// Get total size of all discovered files.
    pub fn total_size(files: &[DiscoveredFile]) -> u64 {
        files.iter().map(|f| f.size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_is_supported() {
        let discovery = FileDiscovery::new(DiscoveryConfig::default());

        assert!(discovery.is_supported(Path::new("test.jpg")));
        assert!(discovery.is_supported(Path::new("test.JPG")));
        assert!(discovery.is_supported(Path::new("test.jpeg")));
        assert!(discovery.is_supported(Path::new("test.png")));
        assert!(discovery.is_supported(Path::new("test.bmp")));
        assert!(!discovery.is_supported(Path::new("test.webp")));
        assert!(!discovery.is_supported(Path::new("test.txt")));
        assert!(!discovery.is_supported(Path::new("jpg")));
    }

    #[test]
    fn test_case_sensitive_matching() {
        let discovery = FileDiscovery::new(DiscoveryConfig {
            case_sensitive: true,
            ..DiscoveryConfig::default()
        });
        assert!(discovery.is_supported(Path::new("test.jpg")));
        assert!(!discovery.is_supported(Path::new("test.JPG")));
    }

    #[test]
    fn test_discover_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.png");
        touch(dir.path(), "a.JPG");
        touch(dir.path(), "notes.txt");

        let files = FileDiscovery::new(DiscoveryConfig::default())
            .discover(dir.path())
            .unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.png"]);
    }

    #[test]
    fn test_discover_top_level_only_by_default() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "top.jpg");
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested"), "deep.jpg");

        let flat = FileDiscovery::new(DiscoveryConfig::default())
            .discover(dir.path())
            .unwrap();
        assert_eq!(flat.len(), 1);

        let deep = FileDiscovery::new(DiscoveryConfig {
            recursive: true,
            ..DiscoveryConfig::default()
        })
        .discover(dir.path())
        .unwrap();
        assert_eq!(deep.len(), 2);
    }

    #[test]
    fn test_discover_rejects_missing_dir() {
        let discovery = FileDiscovery::new(DiscoveryConfig::default());
        let err = discovery
            .discover(Path::new("/nonexistent/folder"))
            .unwrap_err();
        assert!(matches!(err, PipelineError::NotADirectory(_)));
    }

    #[test]
    fn test_total_size() {
        let files = vec![
            DiscoveredFile {
                path: PathBuf::from("a.jpg"),
                size: 100,
            },
            DiscoveredFile {
                path: PathBuf::from("b.jpg"),
                size: 200,
            },
        ];

        assert_eq!(FileDiscovery::total_size(&files), 300);
    }
}
