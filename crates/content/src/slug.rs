// ABOUTME: Slug derivation for catalog records.
// ABOUTME: Lowercases, keeps alphanumerics, and collapses everything else to single hyphens.

/// Derives a URL-safe slug from a title or name.
///
/// Alphanumeric characters are lowercased and kept; any run of other
/// characters becomes a single hyphen. Leading and trailing hyphens are
/// dropped, so pure punctuation input yields an empty slug.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_titles() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Cybersecurity Best Practices for 2025"), "cybersecurity-best-practices-for-2025");
    }

    #[test]
    fn punctuation_collapses_to_single_hyphens() {
        assert_eq!(slugify("UI/UX Design"), "ui-ux-design");
        assert_eq!(slugify("C++ -- the basics!"), "c-the-basics");
    }

    #[test]
    fn edges_are_trimmed() {
        assert_eq!(slugify("  spaced out  "), "spaced-out");
        assert_eq!(slugify("***"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn unicode_is_lowercased_and_kept() {
        assert_eq!(slugify("Épée Guide"), "épée-guide");
    }
}
