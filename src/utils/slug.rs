//! Fragment slugs for in-page anchors.

use deunicode::deunicode;

/// Slugify text for use as a URL fragment.
///
/// Transliterates to ASCII, lowercases, and collapses every run of
/// non-alphanumeric characters into a single `-`.
///
/// # Example
/// ```ignore
/// assert_eq!(slugify_fragment("Origin Story"), "origin-story");
/// ```
pub fn slugify_fragment(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words() {
        assert_eq!(slugify_fragment("Core Belief"), "core-belief");
    }

    #[test]
    fn test_punctuation_collapses() {
        assert_eq!(
            slugify_fragment("The Movement - \"AI Investing League\""),
            "the-movement-ai-investing-league"
        );
    }

    #[test]
    fn test_unicode_transliterated() {
        assert_eq!(slugify_fragment("Café Crème"), "cafe-creme");
    }

    #[test]
    fn test_no_leading_or_trailing_dash() {
        assert_eq!(slugify_fragment("  -- Value Promise! -- "), "value-promise");
    }

    #[test]
    fn test_empty() {
        assert_eq!(slugify_fragment("!? — ?"), "");
    }
}
