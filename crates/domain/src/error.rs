//! Unified error types for the domain layer
//!
//! Every fallible domain operation returns [`DomainError`]. Callers can tell
//! "bad request" (malformed or out-of-domain input) apart from "bad reference"
//! (well-formed identifier that resolves to nothing).

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or out-of-domain input. The message names the offending field.
    #[error("{0}")]
    Validation(String),

    /// Well-formed reference that does not resolve to an existing entity
    #[error("{entity_type} with ID {id} does not exist.")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
}

impl DomainError {
    /// Creates a validation error for an input that violates a field constraint.
    ///
    /// Use this when domain invariants or constraints are violated:
    /// - Required fields are empty or missing
    /// - Values are outside allowed ranges
    /// - Values are not part of an enumerated set
    ///
    /// # Example
    /// ```
    /// use roster_domain::DomainError;
    ///
    /// let err = DomainError::validation("Player Job cannot be empty.");
    /// assert_eq!(err.to_string(), "Player Job cannot be empty.");
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("Player Level is out of range, please enter 1-10");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Player Level is out of range, please enter 1-10"
        );
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Character", 42);
        assert!(err.is_not_found());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Character with ID 42 does not exist.");
    }
}
