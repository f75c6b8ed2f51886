//! Tracing subscriber setup for the CLI.
//!
//! Output goes to stderr so `collage create --json` keeps stdout clean.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Resolved logging settings, after CLI flags are applied over the config.
#[derive(Debug, PartialEq, Eq)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub directive: String,
    pub json: bool,
}

impl LogSettings {
    /// `--verbose` forces debug, `--json-logs` forces JSON; otherwise the
    /// `[logging]` section decides. Dependencies stay at `warn`.
    pub fn resolve(config: &collage_core::Config, verbose: bool, json_logs: bool) -> Self {
        let level = if verbose {
            "debug"
        } else {
            config.logging.level.as_str()
        };
        Self {
            directive: format!("warn,collage={level},collage_core={level}"),
            json: json_logs || config.logging.format == "json",
        }
    }
}

/// Install the global subscriber.
pub fn init(settings: &LogSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.directive));

    let registry = tracing_subscriber::registry().with(filter);
    if settings.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collage_core::Config;

    #[test]
    fn test_resolve_uses_config_level() {
        let mut config = Config::default();
        config.logging.level = "trace".into();
        let settings = LogSettings::resolve(&config, false, false);
        assert_eq!(settings.directive, "warn,collage=trace,collage_core=trace");
        assert!(!settings.json);
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.logging.level = "error".into();
        let settings = LogSettings::resolve(&config, true, true);
        assert!(settings.directive.contains("collage=debug"));
        assert!(settings.json);
    }

    #[test]
    fn test_json_format_from_config() {
        let mut config = Config::default();
        config.logging.format = "json".into();
        assert!(LogSettings::resolve(&config, false, false).json);
    }
}
