//! Error Types

use thiserror::Error;

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Provider-layer error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// Provider answered with an error status
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider unreachable, timed out or dropped the connection
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Provider rejected our credentials
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Response body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
