//! Domain error model.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error returned by aggregate command handlers.
///
/// Field-level problems travel as [`ValidationErrors`] so the editing UI can
/// show every message at once; the remaining variants are lifecycle failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// One or more fields failed validation.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested child entity was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The command does not fit the current state (e.g. editing a deployed will).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The acting role or principal may not issue this command.
    #[error("unauthorized")]
    Unauthorized,
}

impl DomainError {
    pub fn validation(errors: impl Into<ValidationErrors>) -> Self {
        Self::Validation(errors.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
