// ABOUTME: HTML image scanning for article content.
// ABOUTME: Extracts ordered <img> references, with a regex fallback when the selector fails.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

use crate::models::ImageRef;

/// Matches src="..." or src='...' attributes, case-insensitive.
static SRC_ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)src\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap());

/// Extracts all `<img>` references from a content fragment in document order.
///
/// Tags without a `src` attribute (or with a blank one) are skipped.
/// Malformed markup never raises: if the primary parse path is unavailable,
/// a best-effort regex scan recovers src-only references. Empty input or a
/// fragment with no images yields an empty vec.
pub fn scan_images(content: &str) -> Vec<ImageRef> {
    if content.is_empty() {
        return Vec::new();
    }

    let selector = match Selector::parse("img") {
        Ok(sel) => sel,
        Err(_) => return fallback_scan(content),
    };

    let document = Html::parse_fragment(content);
    document
        .select(&selector)
        .filter_map(|element| {
            let attrs = element.value();
            let src = attrs.attr("src")?.trim();
            if src.is_empty() {
                return None;
            }
            Some(ImageRef {
                src: src.to_string(),
                alt: attrs.attr("alt").unwrap_or_default().to_string(),
                title: attrs.attr("title").unwrap_or_default().to_string(),
                width: attrs.attr("width").unwrap_or_default().to_string(),
                height: attrs.attr("height").unwrap_or_default().to_string(),
            })
        })
        .collect()
}

/// Extracts image `src` values only, same order and skip rules as [`scan_images`].
pub fn scan_image_sources(content: &str) -> Vec<String> {
    scan_images(content).into_iter().map(|img| img.src).collect()
}

/// Best-effort recovery scan over raw text. Only src values are extracted;
/// all other attributes come back empty. May miss tags the primary parser
/// would have caught.
fn fallback_scan(content: &str) -> Vec<ImageRef> {
    SRC_ATTR_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let src = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().trim())?;
            if src.is_empty() {
                return None;
            }
            Some(ImageRef::from_src(src))
        })
        .collect()
}

/// Resolves a potentially relative image source against a base URL.
/// Absolute http(s) and data URLs pass through unchanged; relative paths
/// need a base to resolve, otherwise `None`.
pub fn resolve_src(src: &str, base_url: Option<&str>) -> Option<String> {
    let src = src.trim();
    if src.is_empty() {
        return None;
    }

    if src.starts_with("http://") || src.starts_with("https://") || src.starts_with("data:") {
        return Some(src.to_string());
    }

    let base = Url::parse(base_url?).ok()?;
    let resolved = base.join(src).ok()?;
    Some(resolved.to_string())
}
