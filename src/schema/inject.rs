//! Inline `<script type="application/ld+json">` rendering.
//!
//! The JSON text is passed through `escape_script_json`, so no `</script`,
//! `<!--` or character reference can end the element early.

use std::borrow::Cow;

use serde_json::Value;

use super::JsonLd;
use crate::debug;
use crate::utils::html::escape_script_json;

pub const SCRIPT_TYPE: &str = "application/ld+json";

/// Renders a page's JSON-LD into a single script element.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaInjector {
    pretty: bool,
}

impl SchemaInjector {
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Indent the JSON (for `inspect` output).
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Escaped JSON text for the script body.
    ///
    /// Only object nodes are rendered; `None` when no object is left.
    pub fn inner(&self, schema: Option<&JsonLd>) -> Option<String> {
        let schema = object_nodes(schema?)?;
        let json = if self.pretty {
            serde_json::to_string_pretty(&schema)
        } else {
            serde_json::to_string(&schema)
        };
        match json {
            Ok(json) => Some(escape_script_json(&json).into_owned()),
            Err(err) => {
                debug!("schema"; "skipping unserializable JSON-LD: {}", err);
                None
            }
        }
    }

    /// The full `<script>` element, or `None` when there is nothing to render.
    pub fn render(&self, schema: Option<&JsonLd>) -> Option<String> {
        self.inner(schema)
            .map(|json| format!(r#"<script type="{SCRIPT_TYPE}">{json}</script>"#))
    }
}

/// Drop `null`, scalar and array nodes. Borrows when nothing is dropped.
fn object_nodes(schema: &JsonLd) -> Option<Cow<'_, JsonLd>> {
    match schema {
        JsonLd::One(node) => node.is_object().then_some(Cow::Borrowed(schema)),
        JsonLd::Many(nodes) if nodes.iter().all(Value::is_object) => {
            (!nodes.is_empty()).then_some(Cow::Borrowed(schema))
        }
        JsonLd::Many(nodes) => {
            let kept: Vec<Value> = nodes.iter().filter(|n| n.is_object()).cloned().collect();
            debug!("schema"; "dropping {} non-object JSON-LD node(s)", nodes.len() - kept.len());
            (!kept.is_empty()).then(|| Cow::Owned(JsonLd::Many(kept)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    const XSS: &str = "</script><script>alert('xss')</script>";

    #[test]
    fn test_no_script_breakout() {
        let schema = JsonLd::One(json!({ "description": XSS }));
        let html = SchemaInjector::new().render(Some(&schema)).unwrap();

        let inner = html
            .strip_prefix(r#"<script type="application/ld+json">"#)
            .and_then(|s| s.strip_suffix("</script>"))
            .unwrap();
        assert!(!inner.contains("</script>"));
        assert!(!inner.to_ascii_lowercase().contains("</script"));
        assert!(!inner.contains('<'));
        assert!(inner.contains("\\u003C/script\\u003E"));
        assert_eq!(html.matches("</script>").count(), 1);

        let parsed: Value = serde_json::from_str(inner).unwrap();
        assert_eq!(parsed["description"], XSS);
    }

    #[test]
    fn test_none_renders_nothing() {
        assert!(SchemaInjector::new().render(None).is_none());
        assert!(SchemaInjector::new().render(Some(&JsonLd::Many(Vec::new()))).is_none());
    }

    #[test]
    fn test_non_object_nodes_render_nothing() {
        let injector = SchemaInjector::new();
        assert!(injector.render(Some(&JsonLd::One(Value::Null))).is_none());
        assert!(injector.render(Some(&JsonLd::One(json!("text")))).is_none());
        assert!(injector.render(Some(&JsonLd::One(json!([{"@type": "A"}])))).is_none());
        assert!(injector.inner(Some(&JsonLd::Many(vec![Value::Null, json!(1)]))).is_none());
    }

    #[test]
    fn test_non_object_nodes_dropped_from_list() {
        let schema = JsonLd::Many(vec![
            Value::Null,
            json!({"@type": "A"}),
            json!(false),
            json!({"@type": "B"}),
        ]);
        let inner = SchemaInjector::new().inner(Some(&schema)).unwrap();
        assert_eq!(inner, r#"[{"@type":"A"},{"@type":"B"}]"#);
    }

    #[test]
    fn test_many_renders_array() {
        let schema = JsonLd::Many(vec![json!({"@type": "A"}), json!({"@type": "B"})]);
        let inner = SchemaInjector::new().inner(Some(&schema)).unwrap();
        assert_eq!(inner, r#"[{"@type":"A"},{"@type":"B"}]"#);
    }

    #[test]
    fn test_ampersand_and_line_separators() {
        let text = "Q&A <!-- \u{2028} \u{2029}";
        let schema = JsonLd::One(json!({ "name": text }));
        let inner = SchemaInjector::new().pretty(true).inner(Some(&schema)).unwrap();
        assert!(!inner.contains('&'));
        assert!(!inner.contains("<!--"));
        assert!(!inner.contains('\u{2028}'));
        let parsed: Value = serde_json::from_str(&inner).unwrap();
        assert_eq!(parsed["name"], text);
    }
}
