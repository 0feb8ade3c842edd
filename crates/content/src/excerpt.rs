// ABOUTME: Plain-text excerpt generation for article previews.
// ABOUTME: Strips markup, collapses whitespace, and truncates at a word boundary.

use scraper::{ElementRef, Html};

/// Default excerpt target length, in characters.
pub const DEFAULT_EXCERPT_LEN: usize = 150;

/// Produces a plain-text preview of content at the default target length.
pub fn excerpt(content: &str) -> String {
    excerpt_with_limit(content, DEFAULT_EXCERPT_LEN)
}

/// Produces a plain-text preview truncated to at most `limit` characters
/// plus an ellipsis marker.
///
/// Markup is stripped and whitespace runs collapse to single spaces. Text
/// at or under the limit is returned verbatim. Longer text is cut at the
/// limit and backed up to the last space so no word is split; when no
/// space exists before the cutoff, the cut is hard at the limit and the
/// marker is still appended. If stripping fails the raw content is
/// hard-truncated instead — degraded, never an error.
pub fn excerpt_with_limit(content: &str, limit: usize) -> String {
    match plain_text(content) {
        Some(text) => truncate_at_word(&text, limit),
        None => hard_truncate(content.trim(), limit),
    }
}

/// Extracts the text nodes of a fragment, collapsing whitespace runs
/// (including newlines) to single spaces and trimming the ends.
/// `None` when the fragment yields no element tree to walk.
fn plain_text(content: &str) -> Option<String> {
    let document = Html::parse_fragment(content);
    let root = document.tree.root().children().find_map(ElementRef::wrap)?;

    let mut text = String::with_capacity(content.len());
    let mut last_was_space = true;
    for piece in root.text() {
        for c in piece.chars() {
            if c.is_whitespace() {
                if !last_was_space {
                    text.push(' ');
                    last_was_space = true;
                }
            } else {
                text.push(c);
                last_was_space = false;
            }
        }
    }

    Some(text.trim_end().to_string())
}

/// Cuts at the limit, then backs up to the last space boundary.
fn truncate_at_word(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    match cut.rfind(' ') {
        Some(pos) => format!("{}…", cut[..pos].trim_end()),
        // No word boundary before the cutoff: cut hard, keep the marker.
        None => format!("{cut}…"),
    }
}

/// Character-boundary-safe hard truncation with an ellipsis marker.
fn hard_truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{cut}…")
}
