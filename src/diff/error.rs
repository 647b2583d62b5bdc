//! Error type shared by normalization, diffing and redaction.

use thiserror::Error;

use crate::schema::GroupKind;
use crate::typed::ValidationErrors;

/// DiffError reports why a comparison could not be carried out.
#[derive(Debug, Error)]
pub enum DiffError {
    /// A Secret's stringData holds something other than a string.
    #[error("secret stringData value for key {key:?} is not a string")]
    InvalidStringData { key: String },

    /// A document of a known kind does not decode against its schema.
    #[error("{kind} does not match its schema: {source}")]
    Schema {
        kind: GroupKind,
        #[source]
        source: ValidationErrors,
    },

    /// The prior-applied annotation could not be parsed.
    #[error("invalid last-applied-configuration annotation: {0}")]
    InvalidLastApplied(String),

    #[error("number of configs ({configs}) does not match number of lives ({lives})")]
    LengthMismatch { configs: usize, lives: usize },

    #[error("invalid diff options: {0}")]
    InvalidOptions(String),

    /// Returned by a custom Normalizer.
    #[error("normalizer failed: {0}")]
    Normalizer(String),
}
