//! Error types for configuration loading.

/// Alias for `Result<T, ConfigError>`.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading a world configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration blob is not valid JSON or has the wrong shape.
    #[error("malformed world configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but fails consistency checks.
    #[error("invalid world configuration: {0}")]
    Invalid(String),
}
