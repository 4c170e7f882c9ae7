use thiserror::Error;

/// Top-level error type for Vitrine.
#[derive(Debug, Error)]
pub enum VitrineError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// User-supplied input was rejected before reaching the API.
    #[error("validation error: {0}")]
    Validation(String),

    /// Language code outside the supported set.
    #[error("unsupported language: {0}")]
    UnknownLanguage(String),

    /// Config file exists but could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
