// ABOUTME: Core content library for copydesk.
// ABOUTME: Provides image scanning, featured-image selection, excerpts, slugs, and the catalog store.

pub mod error;
pub mod excerpt;
pub mod featured;
pub mod models;
pub mod scanner;
pub mod slug;
pub mod store;

pub use error::ContentError;
pub use excerpt::{excerpt, excerpt_with_limit, DEFAULT_EXCERPT_LEN};
pub use featured::{all_images, content_image_count, featured_image, has_images};
pub use models::{Article, Category, ImageRef, Resource, Tool};
pub use scanner::{resolve_src, scan_image_sources, scan_images};
pub use slug::slugify;
pub use store::{ArticleView, Catalog};
