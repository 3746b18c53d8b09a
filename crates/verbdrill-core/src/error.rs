//! Quiz error types.
//!
//! None of these are fatal. The worst observable outcome of any of them is a
//! session that stays on the loading screen.

use thiserror::Error;

/// Errors raised by the catalog loader, the persistence adapter, and the
/// speech adapter.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The static catalog could not be fetched or decoded.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// A stored value could not be decoded and was treated as absent.
    #[error("stored value for '{key}' is corrupt: {message}")]
    StorageCorrupt { key: String, message: String },

    /// Speech initialization or playback failed.
    #[error("speech failed: {0}")]
    SpeechFailure(String),
}

impl QuizError {
    /// Returns `true` if the error leaves the session stuck on the loading
    /// screen.
    pub fn blocks_loading(&self) -> bool {
        matches!(self, QuizError::CatalogUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = QuizError::CatalogUnavailable("connection refused".into());
        assert_eq!(err.to_string(), "catalog unavailable: connection refused");

        let err = QuizError::StorageCorrupt {
            key: "verben".into(),
            message: "expected value at line 1 column 1".into(),
        };
        assert!(err.to_string().contains("'verben'"));
    }

    #[test]
    fn only_catalog_failures_block_loading() {
        assert!(QuizError::CatalogUnavailable(String::new()).blocks_loading());
        assert!(!QuizError::SpeechFailure(String::new()).blocks_loading());
        assert!(!QuizError::StorageCorrupt {
            key: "lang".into(),
            message: String::new(),
        }
        .blocks_loading());
    }
}
