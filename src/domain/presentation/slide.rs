//! Slide value object.

use reqwest::Url;
use serde::Serialize;

use crate::domain::foundation::ValidationError;

/// An absolute image URL attached to a slide.
///
/// The original text is kept verbatim; parsing only checks that it is a
/// well-formed absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Parses an image URL.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the text is not an absolute URL
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        Url::parse(&raw)
            .map_err(|e| ValidationError::invalid_format("imageUrl", e.to_string()))?;
        Ok(Self(raw))
    }

    /// Returns the URL text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One slide of a presentation.
///
/// # Invariants
///
/// - `title` is never blank
/// - `content` is always present (possibly empty)
/// - `notes` and `image_url` are true optionals and are omitted when absent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    title: String,
    content: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    image_url: Option<ImageUrl>,
}

impl Slide {
    /// Creates a slide with a title and bullet points.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title is blank
    pub fn new(
        title: impl Into<String>,
        content: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self {
            title,
            content,
            notes: None,
            image_url: None,
        })
    }

    /// Attaches speaker notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attaches an image reference.
    pub fn with_image_url(mut self, image_url: ImageUrl) -> Self {
        self.image_url = Some(image_url);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn image_url(&self) -> Option<&ImageUrl> {
        self.image_url.as_ref()
    }
}
