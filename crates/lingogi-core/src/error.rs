use thiserror::Error;

/// Top-level error type for Lingogi.
#[derive(Debug, Error)]
pub enum LingogiError {
    /// A locale code outside the supported set (or without a UI bundle).
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// A difficulty outside beginner/intermediate/advanced.
    #[error("invalid difficulty: {0}")]
    InvalidDifficulty(String),

    /// Durable storage read/write failure.
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Locale bundle loading error.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
