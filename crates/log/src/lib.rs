//! # modelkit-log
//!
//! Logging bootstrap shared by modelkit binaries: a serde-friendly
//! [`Config`], presets, environment parsing and a [`LoggerBuilder`] that
//! installs a `tracing-subscriber` stack writing to stderr.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! fn main() -> anyhow::Result<()> {
//!     modelkit_log::init_with(modelkit_log::Config::from_env())?;
//!     tracing::info!(port = 8080, "starting");
//!     Ok(())
//! }
//! ```

mod builder;
mod config;
mod error;

pub use builder::LoggerBuilder;
pub use config::{Config, Format};
pub use error::{LogError, LogResult};

// Re-export tracing macros
pub use tracing::{debug, error, info, instrument, span, trace, warn};

/// Initialize with custom configuration
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init_with(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}

/// Initialize for tests.
///
/// A subscriber that is already installed, by this or another test, is kept.
///
/// # Errors
///
/// [`LogError::Filter`] if the test preset's filter does not parse.
pub fn init_test() -> LogResult<()> {
    match init_with(Config::test()) {
        Ok(()) | Err(LogError::Init(_)) => Ok(()),
        Err(err @ LogError::Filter { .. }) => Err(err),
    }
}
