//! Manifesto timeline → `CreativeWorkSeries`.

use serde_json::{Value, json};

use super::SCHEMA_CONTEXT;
use crate::seo::ManifestoSection;

pub const DEFAULT_MANIFESTO_NAME: &str = "The DealScale Manifesto";

#[derive(Debug, Clone, Copy)]
pub struct ManifestoOptions<'a> {
    /// Page URL, doubles as the series `@id`.
    pub url: &'a str,
    pub name: Option<&'a str>,
}

pub fn build_manifesto_schema(timeline: &[ManifestoSection], options: ManifestoOptions<'_>) -> Value {
    let parts: Vec<Value> = timeline
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let headline = if section.subtitle.trim().is_empty() {
                &section.title
            } else {
                &section.subtitle
            };
            json!({
                "@type": "CreativeWork",
                "position": i + 1,
                "name": section.title,
                "headline": headline,
                "abstract": section.summary,
                "url": format!("{}#{}", options.url, section.anchor),
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "CreativeWorkSeries",
        "@id": options.url,
        "url": options.url,
        "name": options.name.unwrap_or(DEFAULT_MANIFESTO_NAME),
        "hasPart": parts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline() -> Vec<ManifestoSection> {
        let mut why = ManifestoSection::new("Why Now", "Investors drown in follow-ups.");
        why.subtitle = "The timing".into();
        vec![
            ManifestoSection::new("Origin Story", "Built by investors."),
            why,
        ]
    }

    #[test]
    fn test_default_name_and_url() {
        let schema = build_manifesto_schema(
            &timeline(),
            ManifestoOptions {
                url: "https://dealscale.io/about",
                name: None,
            },
        );
        assert_eq!(schema["@type"], "CreativeWorkSeries");
        assert_eq!(schema["name"], DEFAULT_MANIFESTO_NAME);
        assert_eq!(schema["@id"], "https://dealscale.io/about");
        assert_eq!(schema["url"], "https://dealscale.io/about");
    }

    #[test]
    fn test_parts() {
        let schema = build_manifesto_schema(
            &timeline(),
            ManifestoOptions {
                url: "https://dealscale.io/about",
                name: Some("Our Manifesto"),
            },
        );
        assert_eq!(schema["name"], "Our Manifesto");
        let parts = schema["hasPart"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["position"], 1);
        assert_eq!(parts[0]["headline"], "Origin Story");
        assert_eq!(parts[0]["url"], "https://dealscale.io/about#origin-story");
        assert_eq!(parts[1]["headline"], "The timing");
        assert_eq!(parts[1]["abstract"], "Investors drown in follow-ups.");
    }
}
