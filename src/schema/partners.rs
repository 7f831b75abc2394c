//! Partner list → `ItemList` of organizations.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::SCHEMA_CONTEXT;
use crate::core::SiteOrigin;

/// Everything but unreserved URL characters is escaped in partner anchors.
const FRAGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// One `[[partner]]` entry of `content/partners.toml`, kept in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    /// Stable key, used as the `/partners#<key>` anchor.
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Partner {
    /// Partner URL, or the anchor on the partners page when there is no link.
    pub fn url(&self, origin: &SiteOrigin) -> String {
        match self.link.as_deref().map(str::trim) {
            Some(link) if !link.is_empty() => origin.absolute(link),
            _ => origin.absolute(&format!("/partners#{}", self.anchor())),
        }
    }

    /// The key as a URL fragment, percent-encoded.
    pub fn anchor(&self) -> String {
        utf8_percent_encode(self.key.trim(), FRAGMENT).to_string()
    }

    /// Whether the key is usable as an anchor without encoding.
    pub fn has_slug_key(&self) -> bool {
        let key = self.key.trim();
        !key.is_empty()
            && key
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_'))
    }
}

/// `ItemList` with one `ListItem` per partner, positions starting at 1.
pub fn build_partners_item_list_schema(partners: &[Partner], origin: &SiteOrigin) -> Value {
    let elements: Vec<Value> = partners
        .iter()
        .enumerate()
        .map(|(i, partner)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "item": organization(partner, origin),
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "ItemList",
        "numberOfItems": elements.len(),
        "itemListElement": elements,
    })
}

fn organization(partner: &Partner, origin: &SiteOrigin) -> Value {
    let mut node = Map::new();
    node.insert("@type".into(), "Organization".into());
    node.insert("name".into(), partner.name.clone().into());
    node.insert("url".into(), partner.url(origin).into());
    if !partner.logo.trim().is_empty() {
        node.insert("logo".into(), origin.absolute(partner.logo.trim()).into());
    }
    if let Some(description) = partner.description.as_deref().filter(|d| !d.trim().is_empty()) {
        node.insert("description".into(), description.into());
    }
    Value::Object(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partner(key: &str, link: Option<&str>) -> Partner {
        Partner {
            key: key.into(),
            name: key.to_uppercase(),
            logo: format!("/partners/{key}.svg"),
            link: link.map(Into::into),
            description: None,
        }
    }

    #[test]
    fn test_positions_and_default_url() {
        let partners = vec![
            partner("zillow", Some("https://www.zillow.com")),
            partner("kw", None),
        ];
        let list = build_partners_item_list_schema(&partners, &SiteOrigin::default());
        let elements = list["itemListElement"].as_array().unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0]["position"], 1);
        assert_eq!(elements[1]["position"], 2);
        assert_eq!(elements[0]["item"]["name"], "ZILLOW");
        assert_eq!(elements[0]["item"]["url"], "https://www.zillow.com");
        assert_eq!(elements[1]["item"]["url"], "https://dealscale.io/partners#kw");
        assert_eq!(elements[1]["item"]["@type"], "Organization");
    }

    #[test]
    fn test_insertion_order_not_sorted() {
        let partners = vec![partner("zeta", None), partner("alpha", None), partner("mid", None)];
        let list = build_partners_item_list_schema(&partners, &SiteOrigin::default());
        let keys: Vec<_> = list["itemListElement"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["item"]["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(keys, ["ZETA", "ALPHA", "MID"]);
    }

    #[test]
    fn test_logo_and_description() {
        let mut with_description = partner("kw", Some("  "));
        with_description.description = Some("Brokerage partner".into());
        let list = build_partners_item_list_schema(&[with_description], &SiteOrigin::default());
        let item = &list["itemListElement"][0]["item"];
        assert_eq!(item["logo"], "https://dealscale.io/partners/kw.svg");
        assert_eq!(item["description"], "Brokerage partner");
        // blank link falls back to the anchor
        assert_eq!(item["url"], "https://dealscale.io/partners#kw");
    }

    #[test]
    fn test_anchor_is_percent_encoded() {
        let hostile = partner("a b#\"<x>&", None);
        assert_eq!(hostile.anchor(), "a%20b%23%22%3Cx%3E%26");
        assert_eq!(
            hostile.url(&SiteOrigin::default()),
            "https://dealscale.io/partners#a%20b%23%22%3Cx%3E%26"
        );
        assert!(!hostile.has_slug_key());

        let plain = partner("keller_williams-2", None);
        assert_eq!(plain.anchor(), "keller_williams-2");
        assert!(plain.has_slug_key());
    }

    #[test]
    fn test_empty_list() {
        let list = build_partners_item_list_schema(&[], &SiteOrigin::default());
        assert_eq!(list["numberOfItems"], 0);
        assert_eq!(list["itemListElement"], json!([]));
    }
}
