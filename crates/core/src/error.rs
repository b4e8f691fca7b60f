use std::io;

/// Errors that can occur while configuring or feeding shortpath
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URI: {0}")]
    UriError(#[from] url::ParseError),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for shortpath operations
pub type Result<T> = std::result::Result<T, Error>;
