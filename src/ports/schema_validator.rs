//! Schema Validator Port - Presentation document validation interface.
//!
//! This port defines the contract for checking untrusted JSON (model output,
//! client-supplied current presentations) against the presentation schema.
//! The application depends on this trait, while adapters (like
//! JsonSchemaValidator) provide the implementation.

use serde_json::Value;
use thiserror::Error;

use crate::domain::presentation::Presentation;

/// Model output after validation: the summary text plus the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDeck {
    pub message: String,
    pub presentation: Presentation,
}

/// Port for validating presentation documents.
///
/// # Contract
///
/// Implementations must:
/// - Reject missing required fields, never default them
/// - Tolerate and drop unknown fields
/// - Name the offending field path in every violation
/// - Expose the output schema handed to generative backends
///
/// # Usage
///
/// ```rust,ignore
/// let validator: &dyn PresentationSchemaValidator = get_validator();
///
/// // Client-supplied document
/// let current = validator.validate_presentation(&raw)?;
///
/// // Model output envelope
/// let deck = validator.validate_generated(&completion)?;
///
/// // Schema for the backend's structured-output mode
/// let schema = validator.output_schema();
/// ```
pub trait PresentationSchemaValidator: Send + Sync {
    /// Validate a bare presentation document.
    fn validate_presentation(&self, value: &Value) -> Result<Presentation, SchemaViolation>;

    /// Validate a `{ message, presentation }` envelope produced by a model.
    fn validate_generated(&self, value: &Value) -> Result<GeneratedDeck, SchemaViolation>;

    /// The JSON Schema of the generated envelope.
    ///
    /// Schemas are considered public and safe to expose via API.
    fn output_schema(&self) -> &Value;
}

/// A document that does not satisfy the presentation schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("missing required field: {field}")]
    MissingRequired { field: String },

    #[error("invalid type for field {field}: expected {expected}, got {actual}")]
    InvalidType {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("field {field} must not be empty")]
    EmptyValue { field: String },

    #[error("invalid format for field {field}: expected {format}")]
    InvalidFormat { field: String, format: String },
}

impl SchemaViolation {
    /// Creates a missing required field violation.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingRequired {
            field: field.into(),
        }
    }

    /// Creates an invalid type violation.
    pub fn invalid_type(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates an empty value violation.
    pub fn empty(field: impl Into<String>) -> Self {
        Self::EmptyValue {
            field: field.into(),
        }
    }

    /// Creates an invalid format violation.
    pub fn invalid_format(field: impl Into<String>, format: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            format: format.into(),
        }
    }

    /// Path of the offending field, e.g. `presentation.slides[2].title`.
    pub fn field(&self) -> &str {
        match self {
            SchemaViolation::MissingRequired { field }
            | SchemaViolation::InvalidType { field, .. }
            | SchemaViolation::EmptyValue { field }
            | SchemaViolation::InvalidFormat { field, .. } => field,
        }
    }
}
