//! JSON Schema Validator - Implementation of PresentationSchemaValidator.
//!
//! Uses manual validation mirroring the embedded JSON Schema definition.
//! Validates documents without external schema validation dependencies and
//! builds domain values in the same pass.

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use crate::domain::foundation::ValidationError;
use crate::domain::presentation::{ImageUrl, Presentation, Slide};
use crate::ports::{GeneratedDeck, PresentationSchemaValidator, SchemaViolation};

const ENVELOPE_SCHEMA: &str = include_str!("schemas/presentation_envelope.json");

/// Static storage for the raw envelope schema (for `output_schema`).
static RAW_SCHEMA: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(ENVELOPE_SCHEMA)
        .unwrap_or_else(|e| panic!("Failed to parse presentation envelope schema: {}", e))
});

/// JSON Schema-based validator implementation.
///
/// The schema is embedded in the binary via `include_str!`. Validation stops
/// at the first violation and reports its field path.
///
/// # Thread Safety
///
/// This struct is `Send + Sync` and can be shared across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSchemaValidator;

impl JsonSchemaValidator {
    pub fn new() -> Self {
        Self
    }

    // =========================================================================
    // Document validators
    // =========================================================================

    fn presentation_at(&self, value: &Value, path: &str) -> Result<Presentation, SchemaViolation> {
        let obj = self.require_object(value, path)?;
        let title = self.require_non_empty_string(obj, "title", path)?;

        let slides_path = Self::join(path, "slides");
        let raw_slides = self.require_field(obj, "slides", path)?;
        let raw_slides = raw_slides.as_array().ok_or_else(|| {
            SchemaViolation::invalid_type(&slides_path, "array", Self::type_name(raw_slides))
        })?;

        let slides = raw_slides
            .iter()
            .enumerate()
            .map(|(i, raw)| self.slide_at(raw, &format!("{}[{}]", slides_path, i)))
            .collect::<Result<Vec<_>, _>>()?;

        Presentation::new(title, slides).map_err(|e| Self::from_domain(e, path))
    }

    fn slide_at(&self, value: &Value, path: &str) -> Result<Slide, SchemaViolation> {
        let obj = self.require_object(value, path)?;
        let title = self.require_non_empty_string(obj, "title", path)?;

        let content_path = Self::join(path, "content");
        let raw_content = self.require_field(obj, "content", path)?;
        let raw_content = raw_content.as_array().ok_or_else(|| {
            SchemaViolation::invalid_type(&content_path, "array", Self::type_name(raw_content))
        })?;
        let content = raw_content
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    SchemaViolation::invalid_type(
                        format!("{}[{}]", content_path, i),
                        "string",
                        Self::type_name(item),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut slide = Slide::new(title, content).map_err(|e| Self::from_domain(e, path))?;

        if let Some(notes) = self.optional_string(obj, "notes", path)? {
            slide = slide.with_notes(notes);
        }

        if let Some(raw_url) = self.optional_string(obj, "imageUrl", path)? {
            let url = ImageUrl::parse(raw_url).map_err(|_| {
                SchemaViolation::invalid_format(Self::join(path, "imageUrl"), "absolute URL")
            })?;
            slide = slide.with_image_url(url);
        }

        Ok(slide)
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    fn require_object<'a>(
        &self,
        value: &'a Value,
        path: &str,
    ) -> Result<&'a Map<String, Value>, SchemaViolation> {
        value.as_object().ok_or_else(|| {
            let field = if path.is_empty() { "root" } else { path };
            SchemaViolation::invalid_type(field, "object", Self::type_name(value))
        })
    }

    fn require_field<'a>(
        &self,
        obj: &'a Map<String, Value>,
        field: &str,
        parent: &str,
    ) -> Result<&'a Value, SchemaViolation> {
        obj.get(field)
            .ok_or_else(|| SchemaViolation::missing(Self::join(parent, field)))
    }

    fn require_string_field<'a>(
        &self,
        obj: &'a Map<String, Value>,
        field: &str,
        parent: &str,
    ) -> Result<&'a str, SchemaViolation> {
        let val = self.require_field(obj, field, parent)?;
        val.as_str().ok_or_else(|| {
            SchemaViolation::invalid_type(Self::join(parent, field), "string", Self::type_name(val))
        })
    }

    fn require_non_empty_string<'a>(
        &self,
        obj: &'a Map<String, Value>,
        field: &str,
        parent: &str,
    ) -> Result<&'a str, SchemaViolation> {
        let val = self.require_string_field(obj, field, parent)?;
        if val.trim().is_empty() {
            return Err(SchemaViolation::empty(Self::join(parent, field)));
        }
        Ok(val)
    }

    /// Absent and `null` both mean "not set".
    fn optional_string<'a>(
        &self,
        obj: &'a Map<String, Value>,
        field: &str,
        parent: &str,
    ) -> Result<Option<&'a str>, SchemaViolation> {
        match obj.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(SchemaViolation::invalid_type(
                Self::join(parent, field),
                "string",
                Self::type_name(other),
            )),
        }
    }

    fn join(parent: &str, field: &str) -> String {
        if parent.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", parent, field)
        }
    }

    fn from_domain(err: ValidationError, parent: &str) -> SchemaViolation {
        match err {
            ValidationError::EmptyField { field } => SchemaViolation::empty(Self::join(parent, &field)),
            ValidationError::InvalidFormat { field, reason } => {
                SchemaViolation::invalid_format(Self::join(parent, &field), reason)
            }
        }
    }

    fn type_name(value: &Value) -> String {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
        .to_string()
    }
}

impl PresentationSchemaValidator for JsonSchemaValidator {
    fn validate_presentation(&self, value: &Value) -> Result<Presentation, SchemaViolation> {
        self.presentation_at(value, "")
    }

    fn validate_generated(&self, value: &Value) -> Result<GeneratedDeck, SchemaViolation> {
        let obj = self.require_object(value, "")?;
        let message = self.require_string_field(obj, "message", "")?.to_string();
        let presentation = self.presentation_at(self.require_field(obj, "presentation", "")?, "presentation")?;

        Ok(GeneratedDeck {
            message,
            presentation,
        })
    }

    fn output_schema(&self) -> &Value {
        &RAW_SCHEMA
    }
}
