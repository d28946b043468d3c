//! Logger builder implementation
//!
//! - `format`: format layer creation macros

#[macro_use]
mod format;

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    config: Config,
}

/// Helper macro to install the subscriber for a given format layer.
macro_rules! init_subscriber {
    ($filter:expr, $fmt_layer:expr) => {
        Registry::default()
            .with($filter)
            .with($fmt_layer)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))
    };
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Overrides the level filter.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    /// Overrides the output format.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.config.format = format;
        self
    }

    /// The configuration the logger will be built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses the level filter without installing anything.
    ///
    /// # Errors
    ///
    /// [`LogError::Filter`] if the filter string is invalid.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| LogError::filter(&self.config.level, e))
    }

    /// Build and install the logger as the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<()> {
        let filter = self.filter()?;

        let installed = match self.config.format {
            Format::Pretty => init_subscriber!(filter, create_fmt_layer!(pretty, self.config)),
            Format::Compact => init_subscriber!(filter, create_fmt_layer!(compact, self.config)),
            Format::Json => init_subscriber!(filter, create_json_layer!(self.config)),
        };
        installed?;

        tracing::debug!(
            level = %self.config.level,
            format = %self.config.format,
            "logger initialized"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_rejected_before_install() {
        let builder = LoggerBuilder::from_config(Config::test()).with_level("modelkit=loud");
        assert!(matches!(builder.filter(), Err(LogError::Filter { .. })));
        assert!(matches!(builder.build(), Err(LogError::Filter { .. })));
    }

    #[test]
    fn test_overrides() {
        let builder = LoggerBuilder::from_config(Config::default())
            .with_level("warn")
            .with_format(Format::Json);
        assert_eq!(builder.config().level, "warn");
        assert_eq!(builder.config().format, Format::Json);
        assert!(builder.filter().is_ok());
    }
}
