//! `FAQPage` builder.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::SCHEMA_CONTEXT;

/// One `[[faq]]` entry of `content/faq.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone)]
pub struct FaqPageOptions<'a> {
    pub canonical_url: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub faqs: &'a [FaqItem],
}

/// `FAQPage` with one `Question` per item, in order.
///
/// Every item is emitted; callers that want fewer pass a shorter slice.
pub fn build_faq_page_schema(options: &FaqPageOptions<'_>) -> Value {
    let main_entity: Vec<Value> = options
        .faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer,
                },
            })
        })
        .collect();

    let mut node = Map::new();
    node.insert("@context".into(), SCHEMA_CONTEXT.into());
    node.insert("@type".into(), "FAQPage".into());
    node.insert("@id".into(), format!("{}#faq", options.canonical_url).into());
    node.insert("url".into(), options.canonical_url.into());
    node.insert("name".into(), options.name.into());
    if let Some(description) = options.description {
        node.insert("description".into(), description.into());
    }
    node.insert("mainEntity".into(), main_entity.into());
    Value::Object(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faqs(n: usize) -> Vec<FaqItem> {
        (1..=n)
            .map(|i| FaqItem {
                question: format!("Question {i}?"),
                answer: format!("Answer {i}."),
            })
            .collect()
    }

    #[test]
    fn test_all_items_kept_in_order() {
        let items = faqs(12);
        let schema = build_faq_page_schema(&FaqPageOptions {
            canonical_url: "https://dealscale.io/faq",
            name: "DealScale FAQ",
            description: Some("Common questions"),
            faqs: &items,
        });
        let entities = schema["mainEntity"].as_array().unwrap();
        assert_eq!(entities.len(), 12);
        assert_eq!(entities[0]["name"], "Question 1?");
        assert_eq!(entities[11]["acceptedAnswer"]["text"], "Answer 12.");
        assert_eq!(entities[3]["@type"], "Question");
        assert_eq!(schema["@type"], "FAQPage");
        assert_eq!(schema["@id"], "https://dealscale.io/faq#faq");
        assert_eq!(schema["description"], "Common questions");
    }

    #[test]
    fn test_caller_slicing() {
        let items = faqs(5);
        let schema = build_faq_page_schema(&FaqPageOptions {
            canonical_url: "https://dealscale.io/",
            name: "FAQ",
            description: None,
            faqs: &items[..3],
        });
        assert_eq!(schema["mainEntity"].as_array().unwrap().len(), 3);
        assert!(schema.get("description").is_none());
    }
}
