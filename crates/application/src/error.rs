//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The data holder has not produced a value yet
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error was caused by an unsupported condition
    pub fn is_unknown_condition(&self) -> bool {
        matches!(
            self,
            ApplicationError::Domain(DomainError::UnknownCondition(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::unknown_condition("hailing").into();
        assert_eq!(err.to_string(), "Unknown condition: hailing");
        assert!(err.is_unknown_condition());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ApplicationError::DataUnavailable("no reading".into()).to_string(),
            "Data unavailable: no reading"
        );
        assert_eq!(
            ApplicationError::ExternalService("timeout".into()).to_string(),
            "External service error: timeout"
        );
    }

    #[test]
    fn configuration_is_not_unknown_condition() {
        let err = ApplicationError::Configuration("bad".into());
        assert!(!err.is_unknown_condition());
    }
}
