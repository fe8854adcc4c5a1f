//! Field-level validation errors.
//!
//! Validators never short-circuit: they push every problem they find into a
//! [`ValidationErrors`] so the caller can report all of them together.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type returned by the validators.
pub type ValidationResult = Result<(), ValidationErrors>;

/// A single field that violates a documented invariant.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    /// Field path, e.g. `percentage` or `beneficiaries[1].name`.
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Re-root this error under a parent path (`assets` + `nfts` -> `assets.nfts`).
    pub fn nested(self, parent: &str) -> Self {
        Self {
            field: format!("{parent}.{}", self.field),
            reason: self.reason,
        }
    }
}

/// Collected validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.0.push(ValidationError::new(field, reason));
    }

    /// Merge another result's errors, re-rooted under `parent` when given.
    pub fn absorb(&mut self, result: ValidationResult, parent: Option<&str>) {
        if let Err(errors) = result {
            match parent {
                Some(parent) => self
                    .0
                    .extend(errors.0.into_iter().map(|e| e.nested(parent))),
                None => self.0.extend(errors.0),
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Whether any error was reported for exactly `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> ValidationResult {
        if self.0.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            core::fmt::Display::fmt(error, f)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_is_ok() {
        assert_eq!(ValidationErrors::new().into_result(), Ok(()));
    }

    #[test]
    fn absorb_prefixes_nested_fields() {
        let mut inner = ValidationErrors::new();
        inner.push("nfts", "must not be negative");

        let mut outer = ValidationErrors::new();
        outer.absorb(Err(inner), Some("assets"));
        outer.absorb(Ok(()), Some("ignored"));

        assert_eq!(outer.len(), 1);
        assert!(outer.has_field("assets.nfts"));
    }

    #[test]
    fn display_joins_all_errors() {
        let errors = ValidationErrors::from(vec![
            ValidationError::new("name", "cannot be empty"),
            ValidationError::new("percentage", "must be between 0 and 100"),
        ]);
        assert_eq!(
            errors.to_string(),
            "name: cannot be empty; percentage: must be between 0 and 100"
        );
    }

    #[test]
    fn serializes_as_plain_array() {
        let errors = ValidationErrors::from(ValidationError::new("nfts", "must not be negative"));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "field": "nfts", "reason": "must not be negative" }])
        );
    }
}
