//! Unified error types for the text cleaners.

use crate::types::Lang;

/// Main error type for normalization operations.
///
/// Only caller-selection mistakes surface here. Anomalies inside the text
/// itself (out-of-range numerals, foreign characters, malformed times) are
/// absorbed by the stages and never become errors.
#[derive(Debug, thiserror::Error)]
pub enum NormError {
    /// A stage was asked to work with a language it has no table for.
    #[error("{stage} does not support language '{lang}'")]
    UnsupportedLanguage { stage: &'static str, lang: Lang },

    /// The requested cleaner pipeline key is not known.
    #[error("unknown cleaner: {0}")]
    UnknownCleaner(String),

    /// The requested language tag is not known.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience type alias for Results with NormError.
pub type NormResult<T> = Result<T, NormError>;

impl NormError {
    /// Create an unsupported-language error for the named stage.
    pub fn unsupported_language(stage: &'static str, lang: Lang) -> Self {
        Self::UnsupportedLanguage { stage, lang }
    }

    /// Create an unknown-cleaner error.
    pub fn unknown_cleaner(key: impl Into<String>) -> Self {
        Self::UnknownCleaner(key.into())
    }

    /// Create an unknown-language error.
    pub fn unknown_language(tag: impl Into<String>) -> Self {
        Self::UnknownLanguage(tag.into())
    }

    /// Create a config error with message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_json::Error> for NormError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NormError::unsupported_language("expand_abbreviations", Lang::Hy);
        assert_eq!(
            err.to_string(),
            "expand_abbreviations does not support language 'hy'"
        );

        let err = NormError::unknown_cleaner("klingon_cleaners");
        assert_eq!(err.to_string(), "unknown cleaner: klingon_cleaners");
    }

    #[test]
    fn test_error_constructors() {
        let err = NormError::config("bad level");
        assert!(matches!(err, NormError::Config(_)));

        let err = NormError::unknown_language("xx");
        assert!(matches!(err, NormError::UnknownLanguage(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let err: NormError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, NormError::Serialization(_)));
    }
}
