//! Configuration presets for common scenarios

use super::{Config, Format};

impl Config {
    /// Create configuration from environment variables
    ///
    /// `MODELKIT_LOG` (falling back to `RUST_LOG`) sets the level filter and
    /// `MODELKIT_LOG_FORMAT` the output format.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Overrides `level` and `format` from the same variables as
    /// [`Config::from_env`], keeping every other setting.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::with_env`], reading variables through `lookup`.
    #[must_use]
    pub fn with_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(level) = lookup("MODELKIT_LOG").or_else(|| lookup("RUST_LOG")) {
            self.level = level;
        }

        // Unknown formats fall back to the default rather than failing startup.
        if let Some(format) = lookup("MODELKIT_LOG_FORMAT") {
            self.format = format.parse().unwrap_or_default();
        }

        self
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            ansi: true,
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            ansi: false,
            ..Self::default()
        }
    }

    /// Test configuration (trace level, no colors)
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            ansi: false,
            target: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use pretty_assertions::assert_eq;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_lookup_prefers_modelkit_log() {
        let config = Config::default().with_lookup(lookup(&[("MODELKIT_LOG", "warn"), ("RUST_LOG", "trace")]));
        assert_eq!(config.level, "warn");
    }

    #[test]
    fn test_lookup_falls_back_to_rust_log() {
        let config = Config::default().with_lookup(lookup(&[
            ("RUST_LOG", "debug"),
            ("MODELKIT_LOG_FORMAT", "json"),
        ]));
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, Format::Json);
    }

    #[test]
    fn test_lookup_unknown_format_uses_default() {
        let config = Config::default().with_lookup(lookup(&[("MODELKIT_LOG_FORMAT", "xml")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_lookup_keeps_other_settings() {
        let config = Config::production().with_lookup(lookup(&[("MODELKIT_LOG_FORMAT", "Pretty")]));
        assert_eq!(config.format, Format::Pretty);
        assert_eq!(config.level, "info");
        assert!(!config.ansi);

        let config = Config::production().with_lookup(lookup(&[("MODELKIT_LOG_FORMAT", "xml")]));
        assert_eq!(config.format, Format::Compact);
    }

    #[test]
    fn test_presets() {
        assert_eq!(Config::development().format, Format::Pretty);
        assert_eq!(Config::production().format, Format::Json);
        assert!(!Config::production().ansi);
        assert_eq!(Config::test().level, "trace");
    }
}
