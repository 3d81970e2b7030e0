//! Error type shared by all fallible operations.

use thiserror::Error as ThisError;

/// Errors reported by solver construction and execution.
///
/// Out-of-range index lookups are not represented here: they are
/// programming errors and panic at the lookup site.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// The problem instance or a configuration value is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A call argument is outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_config("need at least 2 points, got 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration: need at least 2 points, got 1"
        );

        let err = Error::invalid_argument("max_restarts must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid argument: max_restarts must be at least 1"
        );
    }
}
