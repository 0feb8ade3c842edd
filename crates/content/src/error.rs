// ABOUTME: Error types for catalog operations.
// ABOUTME: Provides ContentError with UnknownSlug and SlugConflict variants.

use thiserror::Error;

/// Errors that can occur when working with the content catalog.
///
/// The image resolver itself never produces errors: malformed markup
/// degrades to a fallback result and missing data is represented by
/// empty sequences or `None`.
#[derive(Debug, Error)]
pub enum ContentError {
    /// No record exists under the given slug.
    #[error("no record with slug: {0}")]
    UnknownSlug(String),

    /// A record with the same slug already exists.
    #[error("slug already taken: {0}")]
    SlugConflict(String),
}

impl ContentError {
    /// Creates an UnknownSlug error.
    pub fn unknown(slug: impl Into<String>) -> Self {
        ContentError::UnknownSlug(slug.into())
    }

    /// Creates a SlugConflict error.
    pub fn conflict(slug: impl Into<String>) -> Self {
        ContentError::SlugConflict(slug.into())
    }
}
