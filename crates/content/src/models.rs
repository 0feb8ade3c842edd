// ABOUTME: Data model for catalog records: articles, categories, tools, and resources.
// ABOUTME: Plain serde structs; derived image/excerpt data is computed on demand, never stored.

use serde::{Deserialize, Serialize};

use crate::excerpt::excerpt;
use crate::featured::{all_images, content_image_count, featured_image, has_images};
use crate::scanner::scan_images;

/// A single `<img>` reference found in article content.
///
/// Attributes absent from the markup map to the empty string. Image
/// references are transient values recomputed from content on each
/// request; they have no identity of their own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
    pub title: String,
    pub width: String,
    pub height: String,
}

impl ImageRef {
    /// Creates a src-only reference with all other attributes empty.
    pub fn from_src(src: impl Into<String>) -> Self {
        ImageRef {
            src: src.into(),
            ..Default::default()
        }
    }
}

/// A published article. Content may mix HTML and Markdown; the resolver
/// treats it as an opaque string and never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    pub title: String,
    pub slug: String,
    pub content: String,
    /// Explicitly designated banner image, independent of inline content images.
    pub banner_url: Option<String>,
    pub category_slug: Option<String>,
    pub tags: Vec<String>,
    pub read_time_minutes: u32,
    pub is_tutorial: bool,
    pub is_featured: bool,
    pub published_ms: u64,
}

impl Article {
    /// All `<img>` references in document order.
    pub fn content_images(&self) -> Vec<ImageRef> {
        scan_images(&self.content)
    }

    /// The single image to display prominently: banner first, then the
    /// first content image, then none.
    pub fn featured_image(&self) -> Option<String> {
        featured_image(&self.content, self.banner_url.as_deref())
    }

    /// True iff a banner is set or the content references at least one image.
    pub fn has_images(&self) -> bool {
        has_images(&self.content, self.banner_url.as_deref())
    }

    /// Number of content images; the banner is never counted.
    pub fn image_count(&self) -> usize {
        content_image_count(&self.content)
    }

    /// Deduplicated union of banner and content image URLs.
    pub fn all_images(&self) -> std::collections::HashSet<String> {
        all_images(&self.content, self.banner_url.as_deref())
    }

    /// Plain-text preview of the content at the default length.
    pub fn excerpt(&self) -> String {
        excerpt(&self.content)
    }
}

/// A browsable grouping for articles, tools, and resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
    pub description: String,
}

/// An external tool listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category_slug: Option<String>,
    pub external_link: Option<String>,
}

/// A downloadable or linked resource listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category_slug: Option<String>,
    pub external_link: Option<String>,
}
