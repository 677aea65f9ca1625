//! Error types for the pipeline

use thiserror::Error;

/// Error type for pipeline operations
#[derive(Debug, Error)]
pub enum Error {
    /// The sentence tokenizer collaborator could not be initialized
    #[error("Tokenizer unavailable: {0}")]
    TokenizerUnavailable(String),

    /// Invalid tokenizer rules or configuration content
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizer_unavailable_display() {
        let error = Error::TokenizerUnavailable("missing rules file".to_string());
        assert_eq!(error.to_string(), "Tokenizer unavailable: missing rules file");
    }

    #[test]
    fn test_configuration_display() {
        let error = Error::Configuration("expected a table".to_string());
        assert_eq!(error.to_string(), "Configuration error: expected a table");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = Error::TokenizerUnavailable("x".to_string());
        let _: &dyn std::error::Error = &error;
    }
}
