//! Logger setup for binaries.
//!
//! Library modules only emit through the `log` macros and never install a
//! backend. `raster-demo` calls [`init_logging`] at startup; embedders are
//! free to install their own logger instead.

use std::sync::Once;

use log::LevelFilter;

/// Where log output is filtered and how it is styled.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter directives such as `"affine_raster=debug"`.
    /// When unset, `RUST_LOG` is consulted, then everything at `info`.
    pub env_filter: Option<String>,
    /// ANSI color handling for the terminal.
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { env_filter: None, write_style: env_logger::WriteStyle::Auto }
    }
}

impl LoggingConfig {
    /// Override `RUST_LOG` with explicit filter directives.
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Filter directives in effect: the explicit ones, else `RUST_LOG`.
    fn directives(&self) -> Option<String> {
        self.env_filter.clone().or_else(|| std::env::var("RUST_LOG").ok())
    }
}

static LOGGER: Once = Once::new();

/// Install an `env_logger` backend for the process.
///
/// Runs at most once per process. A logger installed by someone else wins;
/// ours is then dropped without complaint.
pub fn init_logging(config: LoggingConfig) {
    LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.directives() {
            Some(directives) => {
                builder.parse_filters(&directives);
            }
            None => {
                builder.filter_level(LevelFilter::Info);
            }
        }
        builder.write_style(config.write_style);

        if builder.try_init().is_ok() {
            log::debug!("env_logger installed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging(LoggingConfig::default().filter("debug"));
        init_logging(LoggingConfig::default());
        log::info!("second init was a no-op");
    }

    #[test]
    fn test_explicit_filter_wins() {
        let config = LoggingConfig::default().filter("affine_raster=trace");
        assert_eq!(config.directives().as_deref(), Some("affine_raster=trace"));
    }
}
