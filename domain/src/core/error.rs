//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown chatbot domain: {0}")]
    UnknownDomain(String),

    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown output format: {0}")]
    UnknownOutputFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_domain_display() {
        let error = DomainError::UnknownDomain("Legal".to_string());
        assert_eq!(error.to_string(), "Unknown chatbot domain: Legal");
    }
}
