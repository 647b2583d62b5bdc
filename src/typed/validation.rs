//! Validation types and errors.

use std::fmt;
use thiserror::Error;

/// ValidationError represents a document that does not decode against its schema.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{path}: type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("{path}: {message}")]
    InvalidValue { path: String, message: String },

    #[error("{message}")]
    SchemaError { message: String },
}

impl ValidationError {
    /// Creates a type mismatch error.
    pub fn type_mismatch(path: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        ValidationError::TypeMismatch {
            path: path.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(path: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a schema error.
    pub fn schema_error(message: impl Into<String>) -> Self {
        ValidationError::SchemaError {
            message: message.into(),
        }
    }
}

/// ValidationErrors is a collection of validation errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        ValidationErrors { errors: Vec::new() }
    }

    /// Creates ValidationErrors from a single error.
    pub fn from_error(error: ValidationError) -> Self {
        ValidationErrors {
            errors: vec![error],
        }
    }

    /// Adds an error.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns an iterator over the errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
