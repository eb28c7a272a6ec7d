//! Error types and result types for item store operations.
//!
//! Use [`ItemStoreResult<T>`] as the return type for fallible operations.
//! A lookup that finds nothing is not an error: it is reported as `Ok(None)`
//! or `Ok(false)` by the operation itself.

use std::fmt;

use serde::Serialize;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with the item store.
#[derive(Error, Debug)]
pub enum ItemStoreError {
    /// The request failed one or more field constraints and never reached the store.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    /// The service configuration is unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// Serialization/deserialization error when converting to or from JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ItemStoreError {
    /// Returns `true` when the error was caused by the caller's input.
    ///
    /// A boundary adapter maps these to a client error (HTTP 400).
    pub fn is_client_error(&self) -> bool {
        matches!(self, ItemStoreError::Validation(_))
    }

    /// Returns the individual field violations when this is a validation error.
    pub fn violations(&self) -> Option<&[FieldViolation]> {
        match self {
            ItemStoreError::Validation(errors) => Some(errors.violations()),
            _ => None,
        }
    }
}

/// A specialized `Result` type for item store operations.
pub type ItemStoreResult<T> = Result<T, ItemStoreError>;

impl From<SerdeJsonError> for ItemStoreError {
    fn from(err: SerdeJsonError) -> Self {
        ItemStoreError::Serialization(err.to_string())
    }
}

impl From<ValidationErrors> for ItemStoreError {
    fn from(errors: ValidationErrors) -> Self {
        ItemStoreError::Validation(errors)
    }
}

/// A single constraint violation on a request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Wire name of the offending field (e.g. `stockQuantity`).
    pub field: &'static str,
    /// Human readable description of the violated constraint.
    pub message: String,
}

/// Every violation found while validating a single request.
///
/// Validation collects all problems instead of stopping at the first one, so a
/// client can fix its request in one round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation for `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Returns `true` if any violation was recorded against `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Converts the collected violations into a result.
    ///
    /// Returns `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> ItemStoreResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ItemStoreError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", violation.field, violation.message)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_errors_convert_to_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn display_joins_violations() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "Name is required");
        errors.push("stockQuantity", "Stock quantity cannot be negative");

        let err = ItemStoreError::from(errors);

        assert!(err.is_client_error());
        assert_eq!(
            err.to_string(),
            "Validation failed: name: Name is required; stockQuantity: Stock quantity cannot be negative"
        );
        assert_eq!(err.violations().map(|v| v.len()), Some(2));
    }

    #[test]
    fn serialization_errors_are_not_client_errors() {
        let err: ItemStoreError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();

        assert!(matches!(err, ItemStoreError::Serialization(_)));
        assert!(!err.is_client_error());
        assert!(err.violations().is_none());
    }
}
