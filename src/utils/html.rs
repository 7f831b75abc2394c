//! HTML utility functions.
//!
//! Provides the escaping needed when writing `<head>` fragments:
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - `escape_script_json()` - JSON safe to embed inside `<script>` raw text

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

// =============================================================================
// Script Raw Text
// =============================================================================

/// Characters rewritten by `escape_script_json()`.
///
/// `<`, `>` and `&` can start `</script`, `<!--` or a character reference
/// that a tag-sniffing parser acts on; U+2028/U+2029 terminate lines in
/// legacy script parsers.
const SCRIPT_UNSAFE: [char; 5] = ['<', '>', '&', '\u{2028}', '\u{2029}'];

/// Rewrite serialized JSON so it can sit inside a `<script>` element.
///
/// Every unsafe character becomes its `\uXXXX` escape. In valid JSON these
/// characters only occur inside string literals, where the escape decodes to
/// the same character, so the output parses to the same value.
///
/// # Example
/// ```ignore
/// let json = r#"{"a":"</script>"}"#;
/// assert!(!escape_script_json(json).contains("</script"));
/// ```
pub fn escape_script_json(json: &str) -> Cow<'_, str> {
    if !json.contains(SCRIPT_UNSAFE) {
        return Cow::Borrowed(json);
    }

    let mut result = String::with_capacity(json.len() + 16);
    for c in json.chars() {
        match c {
            '<' => result.push_str("\\u003C"),
            '>' => result.push_str("\\u003E"),
            '&' => result.push_str("\\u0026"),
            '\u{2028}' => result.push_str("\\u2028"),
            '\u{2029}' => result.push_str("\\u2029"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert!(matches!(escape("hello"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape("<b>"), "&lt;b&gt;");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(
            escape_attr("Pricing \"Basic\" & <Pro>"),
            "Pricing &quot;Basic&quot; &amp; &lt;Pro&gt;"
        );
    }

    #[test]
    fn test_escape_script_json_borrowed_when_safe() {
        let json = r#"{"name":"Deal Scale"}"#;
        assert!(matches!(escape_script_json(json), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_script_json_closing_tag() {
        let json = r#"{"description":"</script><script>alert('xss')</script>"}"#;
        let escaped = escape_script_json(json);

        assert!(!escaped.contains("</script"));
        assert!(!escaped.contains('<'));
        assert!(escaped.contains("\\u003C/script\\u003E"));
    }

    #[test]
    fn test_escape_script_json_roundtrip() {
        let value = serde_json::json!({
            "description": "</script><!-- a & b -->",
            "line": "x\u{2028}y\u{2029}z",
        });
        let json = serde_json::to_string(&value).unwrap();
        let escaped = escape_script_json(&json);

        let parsed: serde_json::Value = serde_json::from_str(&escaped).unwrap();
        assert_eq!(parsed, value);
        assert!(!escaped.contains('\u{2028}'));
        assert!(!escaped.contains('&'));
    }
}
