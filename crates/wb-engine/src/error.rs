//! Error types for the engine.

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced across the engine boundary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The world configuration failed to load.
    #[error("configuration error: {0}")]
    Config(#[from] wb_core::ConfigError),

    /// An action payload could not be decoded.
    #[error("malformed action input: {0}")]
    Input(serde_json::Error),

    /// A save blob could not be decoded. The previous state is intact.
    #[error("malformed save data: {0}")]
    SaveDecode(serde_json::Error),

    /// In-memory state failed to encode. Indicates an invariant breach.
    #[error("save encoding failed: {0}")]
    SaveEncode(serde_json::Error),
}
