//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// The condition identifier is not one of the supported conditions
    #[error("Unknown condition: {0}")]
    UnknownCondition(String),
}

impl DomainError {
    /// Create an unknown condition error
    pub fn unknown_condition(id: impl Into<String>) -> Self {
        Self::UnknownCondition(id.into())
    }
}
