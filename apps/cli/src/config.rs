//! Layered application configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`--config <path>`, or `modelkit.toml` if present)
//! 3. `MODELKIT_*` variables, `__` separating nested keys
//!    (`MODELKIT_ADVENTURE__PROMPT`)
//! 4. `MODELKIT_LOG` (or `RUST_LOG`) and `MODELKIT_LOG_FORMAT`, read by
//!    [`modelkit_log::Config::with_env`]; an unknown format falls back to
//!    compact
//! 5. Command-line flags, applied by the caller

use std::path::Path;

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use modelkit_exercises::adventure::AdventureConfig;
use serde::{Deserialize, Serialize};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "modelkit.toml";

/// Everything the binary can be configured with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging setup.
    pub log: modelkit_log::Config,
    /// Adventure settings.
    pub adventure: AdventureConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: modelkit_log::Config {
                level: "warn".to_owned(),
                ..modelkit_log::Config::default()
            },
            adventure: AdventureConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads the layered configuration.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) if !path.exists() => bail!("config file {} not found", path.display()),
            Some(path) => Toml::file(path),
            None => Toml::file(DEFAULT_CONFIG_FILE),
        };

        let mut config: Self = Self::figment(file)
            .extract()
            .context("failed to load configuration")?;
        config.log = config.log.with_env();
        Ok(config)
    }

    fn figment(file: figment::providers::Data<Toml>) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(file)
            .merge(
                Env::prefixed("MODELKIT_")
                    .ignore(&["LOG", "LOG_FORMAT"])
                    .split("__"),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let config = AppConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config, AppConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                    [log]
                    level = "info"

                    [adventure]
                    prompt = "? "
                    start_room = "armory"
                "#,
            )?;
            jail.set_env("MODELKIT_ADVENTURE__START_ROOM", "cellar");
            jail.set_env("MODELKIT_LOG", "debug");

            let config = AppConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.adventure.prompt, "? ");
            assert_eq!(config.adventure.start_room, "cellar");
            assert_eq!(config.log.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn test_log_format_env_is_lenient() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(DEFAULT_CONFIG_FILE, "[log]\nformat = \"Pretty\"\n")?;
            let config = AppConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.log.format, modelkit_log::Format::Pretty);

            jail.set_env("MODELKIT_LOG_FORMAT", "JSON");
            let config = AppConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.log.format, modelkit_log::Format::Json);

            jail.set_env("MODELKIT_LOG_FORMAT", "xml");
            let config = AppConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.log.format, modelkit_log::Format::Compact);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file() {
        Jail::expect_with(|_jail| {
            assert!(AppConfig::load(Some(Path::new("absent.toml"))).is_err());
            Ok(())
        });
    }
}
