//! Adapter error types.

use thiserror::Error;

/// Errors raised by the concrete adapters.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The catalog server answered with an error status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus { status: u16, url: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The catalog body was not a valid catalog.
    #[error("invalid catalog from {source_name}: {message}")]
    InvalidCatalog {
        source_name: String,
        message: String,
    },

    /// The speech program could not be started or exited with an error.
    #[error("speech command '{program}' failed: {message}")]
    SpeechCommand { program: String, message: String },
}
