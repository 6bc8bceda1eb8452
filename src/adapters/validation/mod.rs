//! Validation Adapters - Schema validation implementations.
//!
//! Contains the adapter that checks presentation documents against the
//! embedded envelope JSON Schema.

mod json_schema_validator;

pub use json_schema_validator::JsonSchemaValidator;
