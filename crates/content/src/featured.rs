// ABOUTME: Featured-image selection for articles.
// ABOUTME: Banner wins, then the first content image, then none.

use std::collections::HashSet;

use crate::scanner::scan_image_sources;

/// Treats an empty or whitespace-only banner as unset.
fn banner_url(banner: Option<&str>) -> Option<&str> {
    banner.map(str::trim).filter(|b| !b.is_empty())
}

/// Resolves the single image to display prominently for an article.
/// Priority: explicit banner, then the first content image, then `None`.
pub fn featured_image(content: &str, banner: Option<&str>) -> Option<String> {
    if let Some(banner) = banner_url(banner) {
        return Some(banner.to_string());
    }
    scan_image_sources(content).into_iter().next()
}

/// True iff a banner is set or the content references at least one image.
pub fn has_images(content: &str, banner: Option<&str>) -> bool {
    banner_url(banner).is_some() || !scan_image_sources(content).is_empty()
}

/// Deduplicated union of the banner URL and all content image URLs.
/// Set semantics; ordering is not guaranteed.
pub fn all_images(content: &str, banner: Option<&str>) -> HashSet<String> {
    let mut images: HashSet<String> = scan_image_sources(content).into_iter().collect();
    if let Some(banner) = banner_url(banner) {
        images.insert(banner.to_string());
    }
    images
}

/// Number of images referenced in the content. The banner is excluded.
pub fn content_image_count(content: &str) -> usize {
    scan_image_sources(content).len()
}
