use thiserror::Error;

/// Top-level error type for SkyRoute.
///
/// Subsystem crates define their own error types; this one covers the
/// configuration and domain-validation concerns shared by all of them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SkyrouteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid flight offer: {0}")]
    InvalidOffer(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for SkyrouteError {
    fn from(err: toml::de::Error) -> Self {
        SkyrouteError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for SkyrouteError {
    fn from(err: toml::ser::Error) -> Self {
        SkyrouteError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for SkyrouteError {
    fn from(err: serde_json::Error) -> Self {
        SkyrouteError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for SkyRoute operations.
pub type Result<T> = std::result::Result<T, SkyrouteError>;
