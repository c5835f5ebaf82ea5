use thiserror::Error;

/// Top-level error type for the BlueFlame service.
///
/// Subsystem crates define their own error types and convert from
/// `BlueflameError` so that `?` works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BlueflameError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Document store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for BlueflameError {
    fn from(err: toml::de::Error) -> Self {
        BlueflameError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for BlueflameError {
    fn from(err: toml::ser::Error) -> Self {
        BlueflameError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for BlueflameError {
    fn from(err: serde_json::Error) -> Self {
        BlueflameError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for BlueFlame operations.
pub type Result<T> = std::result::Result<T, BlueflameError>;
