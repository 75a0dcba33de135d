//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Malformed or ambiguous profile record, detected while building the page.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "details")]
pub enum ConfigurationError {
    /// The record has no content section, so the profile hint has no target
    #[error("profile has no content sections")]
    EmptySections,

    /// Title derives an empty id
    #[error("section #{index} has an empty title")]
    EmptySectionId { index: usize },

    /// Title derives the id reserved for the profile section
    #[error("section #{index} collides with the reserved id \"profile\"")]
    ReservedSectionId { index: usize },

    /// Two titles derive the same id
    #[error("sections #{first} and #{second} share the id \"{id}\"")]
    DuplicateSectionId {
        id: String,
        first: usize,
        second: usize,
    },
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum PageError {
    /// Invalid profile record (fatal at startup)
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Navigation target is not a rendered section
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// File system error
    #[error("IO error: {0}")]
    IoError(String),

    /// HTML template failed to render
    #[error("Render error: {0}")]
    RenderError(String),
}

impl PageError {
    /// Whether it is expected behavior, used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Configuration(_) | Self::SerializationError(_) | Self::IoError(_) => true,
            // ids are generated internally, a miss is a broken invariant
            Self::SectionNotFound(_) | Self::RenderError(_) => false,
        }
    }
}

impl From<serde_json::Error> for PageError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

impl From<std::io::Error> for PageError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError(e.to_string())
    }
}

impl From<askama::Error> for PageError {
    fn from(e: askama::Error) -> Self {
        Self::RenderError(e.to_string())
    }
}

/// Core layer Result type alias
pub type PageResult<T> = std::result::Result<T, PageError>;
