//! Error handling for modelkit-log

/// Result type for logging operations.
pub type LogResult<T> = Result<T, LogError>;

/// Errors raised while setting up the logger.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    /// The level filter could not be parsed.
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// The rejected filter string.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber was already installed.
    #[error("logger initialization failed: {0}")]
    Init(String),
}

impl LogError {
    /// Creates a filter parsing error.
    pub fn filter(filter: impl Into<String>, reason: impl ToString) -> Self {
        Self::Filter {
            filter: filter.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_error_display() {
        let error = LogError::filter("app=loud", "invalid level");
        assert_eq!(error.to_string(), "invalid filter 'app=loud': invalid level");
    }

    #[test]
    fn test_init_error_display() {
        let error = LogError::Init("already set".to_owned());
        assert!(error.to_string().contains("already set"));
    }
}
