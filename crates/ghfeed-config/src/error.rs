//! Configuration error types.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(std::path::PathBuf),

    /// Invalid TOML syntax or an unknown event kind in `events.kinds`.
    #[error("invalid ghfeed.toml: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// A value serde accepts but ghfeed cannot use: an empty
    /// `github.api_url` or a zero `github.timeout_secs`.
    #[error("invalid configuration: {key} {reason}")]
    Invalid {
        key: &'static str,
        reason: &'static str,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
