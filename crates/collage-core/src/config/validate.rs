//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let collage = &self.collage;
        if collage.width == 0 {
            return Err(ConfigError::ValidationError(
                "collage.width must be > 0".into(),
            ));
        }
        if collage.height == 0 {
            return Err(ConfigError::ValidationError(
                "collage.height must be > 0".into(),
            ));
        }
        if collage.width <= collage.padding.saturating_mul(2) {
            return Err(ConfigError::ValidationError(format!(
                "collage.width ({}) must exceed twice collage.padding ({})",
                collage.width, collage.padding
            )));
        }
        if collage.min_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "collage.min_dimension must be > 0".into(),
            ));
        }
        if collage.column_width_hint == 0 {
            return Err(ConfigError::ValidationError(
                "collage.column_width_hint must be > 0".into(),
            ));
        }
        if self.discovery.supported_formats.is_empty() {
            return Err(ConfigError::ValidationError(
                "discovery.supported_formats must not be empty".into(),
            ));
        }
        if self.limits.max_file_size_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_file_size_mb must be > 0".into(),
            ));
        }
        if self.limits.max_image_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_image_dimension must be > 0".into(),
            ));
        }
        if self.limits.max_tile_pixels == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_tile_pixels must be > 0".into(),
            ));
        }
        if !(1..=100).contains(&self.output.jpeg_quality) {
            return Err(ConfigError::ValidationError(
                "output.jpeg_quality must be between 1 and 100".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let mut config = Config::default();
        config.collage.width = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("collage.width"));
    }

    #[test]
    fn test_validate_rejects_padding_wider_than_canvas() {
        let mut config = Config::default();
        config.collage.width = 10;
        config.collage.padding = 5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("twice collage.padding"));
    }

    #[test]
    fn test_validate_rejects_zero_min_dimension() {
        let mut config = Config::default();
        config.collage.min_dimension = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("min_dimension"));
    }

    #[test]
    fn test_validate_rejects_empty_formats() {
        let mut config = Config::default();
        config.discovery.supported_formats.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("supported_formats"));
    }

    #[test]
    fn test_validate_rejects_quality_out_of_range() {
        let mut config = Config::default();
        config.output.jpeg_quality = 101;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("jpeg_quality"));
    }

    #[test]
    fn test_validate_rejects_zero_tile_limit() {
        let mut config = Config::default();
        config.limits.max_tile_pixels = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_tile_pixels"));
    }
}
