//! Presentation aggregate - the synthesized artifact.

use serde::Serialize;

use super::Slide;
use crate::domain::foundation::ValidationError;

/// A complete slide presentation.
///
/// Presentations are replaced wholesale on every successful synthesis; there
/// is no field-level merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    title: String,
    slides: Vec<Slide>,
}

impl Presentation {
    /// Creates a presentation.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title is blank
    pub fn new(title: impl Into<String>, slides: Vec<Slide>) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self { title, slides })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}
