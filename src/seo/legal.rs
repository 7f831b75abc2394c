//! Legal document registry and its metadata/JSON-LD.
//!
//! Documents live in `content/legal.toml`:
//!
//! ```toml
//! [[document]]
//! slug = "privacy-policy"
//! title = "Privacy Policy"
//! description = "How DealScale collects and processes personal data."
//! last_updated = "2025-01-15"
//! ```
//!
//! `path` defaults to `/legal/<slug>`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::meta::{ChangeFrequency, OgType, SeoMeta, dedup_keywords};
use crate::core::{RoutePath, SiteIdentity};
use crate::schema::SCHEMA_CONTEXT;
use crate::utils::date::to_iso8601;

/// Slugs rendered as `Legislation` (binding terms and compliance policies).
const LEGISLATION_SLUGS: &[&str] = &[
    "terms-of-service",
    "tcpa-compliance",
    "gdpr-policy",
    "hipaa-policy",
    "pii-handling-policy",
];

const PRIVACY_POLICY_SLUG: &str = "privacy-policy";

/// Sitemap priority of legal pages.
pub const LEGAL_PRIORITY: f32 = 0.3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalDocument {
    pub slug: String,
    /// Route override; blank or missing means `/legal/<slug>`.
    #[serde(default)]
    pub path: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-form date as written by the legal team.
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl LegalDocument {
    /// Route key of the document.
    pub fn route(&self) -> RoutePath {
        match self.path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => RoutePath::new(path),
            _ => RoutePath::new(&format!("/legal/{}", self.slug)),
        }
    }

    /// schema.org type for the document; unknown slugs are plain `WebPage`s.
    pub fn schema_type(&self) -> &'static str {
        match self.slug.as_str() {
            PRIVACY_POLICY_SLUG => "PrivacyPolicy",
            slug if LEGISLATION_SLUGS.contains(&slug) => "Legislation",
            _ => "WebPage",
        }
    }

    /// `last_updated` as ISO-8601, `None` when missing or unparsable.
    pub fn last_updated_iso(&self) -> Option<String> {
        self.last_updated.as_deref().and_then(to_iso8601)
    }
}

/// Immutable lookup over legal documents, by route and by slug.
#[derive(Debug, Default)]
pub struct LegalRegistry {
    documents: Vec<LegalDocument>,
    by_path: FxHashMap<RoutePath, usize>,
    by_slug: FxHashMap<String, usize>,
    duplicates: Vec<String>,
}

impl LegalRegistry {
    /// Index documents. The first document claiming a path or slug wins.
    pub fn new(documents: Vec<LegalDocument>) -> Self {
        let mut by_path = FxHashMap::default();
        let mut by_slug = FxHashMap::default();
        let mut duplicates = Vec::new();

        for (i, doc) in documents.iter().enumerate() {
            let route = doc.route();
            if by_path.contains_key(&route) || by_slug.contains_key(&doc.slug) {
                duplicates.push(doc.slug.clone());
                continue;
            }
            by_path.insert(route, i);
            by_slug.insert(doc.slug.clone(), i);
        }

        Self {
            documents,
            by_path,
            by_slug,
            duplicates,
        }
    }

    /// Exact match on the normalized route (`legal/tos` and `/legal/tos/` both hit `/legal/tos`).
    pub fn get_legal_document_by_path(&self, path: &str) -> Option<&LegalDocument> {
        self.by_path
            .get(&RoutePath::new(path))
            .map(|&i| &self.documents[i])
    }

    pub fn get_legal_document_by_slug(&self, slug: &str) -> Option<&LegalDocument> {
        self.by_slug.get(slug).map(|&i| &self.documents[i])
    }

    /// Indexed documents in content order.
    pub fn iter(&self) -> impl Iterator<Item = &LegalDocument> {
        self.documents
            .iter()
            .enumerate()
            .filter(|(i, doc)| self.by_slug.get(&doc.slug) == Some(i))
            .map(|(_, doc)| doc)
    }

    pub fn len(&self) -> usize {
        self.by_slug.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_slug.is_empty()
    }

    /// Slugs skipped because their path or slug was already taken.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }
}

/// JSON-LD for a legal document page.
///
/// `dateModified` is left out when the date is missing or unparsable.
pub fn build_legal_json_ld(doc: &LegalDocument, site: &SiteIdentity) -> Value {
    let mut node = Map::new();
    node.insert("@context".into(), SCHEMA_CONTEXT.into());
    node.insert("@type".into(), doc.schema_type().into());
    node.insert("name".into(), doc.title.clone().into());
    node.insert("description".into(), doc.description.clone().into());
    node.insert("url".into(), site.origin.page_url(&doc.route()).into());
    if let Some(modified) = doc.last_updated_iso() {
        node.insert("dateModified".into(), modified.into());
    }
    node.insert(
        "isPartOf".into(),
        json!({
            "@type": "WebSite",
            "name": site.name,
            "url": site.origin.root_url(),
        }),
    );
    node.insert(
        "publisher".into(),
        json!({
            "@type": "Organization",
            "name": site.name,
            "url": site.origin.root_url(),
            "logo": {
                "@type": "ImageObject",
                "url": site.logo_url(),
            },
        }),
    );
    Value::Object(node)
}

/// Registry entry for a legal document page.
pub fn build_legal_seo_meta(doc: &LegalDocument, site: &SiteIdentity) -> SeoMeta {
    let legal_keyword = format!("{} Legal Document", site.name);
    let keywords = dedup_keywords(
        [doc.title.as_str(), legal_keyword.as_str()]
            .into_iter()
            .chain(site.keywords.iter().map(String::as_str)),
    );

    let mut meta = SeoMeta::new(
        format!("{} | {}", doc.title, site.name),
        doc.description.clone(),
        site.origin.page_url(&doc.route()),
    );
    meta.keywords = keywords;
    meta.image = site.image.clone();
    meta.og_type = OgType::Article;
    meta.date_modified = doc.last_updated_iso();
    meta.priority = Some(LEGAL_PRIORITY);
    meta.change_frequency = Some(ChangeFrequency::Yearly);
    meta.site_name = Some(site.name.clone());
    meta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_identity;

    fn doc(slug: &str, last_updated: Option<&str>) -> LegalDocument {
        LegalDocument {
            slug: slug.into(),
            path: None,
            title: "Privacy Policy".into(),
            description: "How we handle personal data.".into(),
            last_updated: last_updated.map(Into::into),
        }
    }

    fn registry() -> LegalRegistry {
        LegalRegistry::new(vec![
            doc("privacy-policy", Some("2025-01-15")),
            LegalDocument {
                path: Some("terms".into()),
                title: "Terms of Service".into(),
                ..doc("terms-of-service", None)
            },
        ])
    }

    mod lookup {
        use super::*;

        #[test]
        fn by_path_with_and_without_slash() {
            let registry = registry();
            for path in ["/legal/privacy-policy", "legal/privacy-policy", "/legal/privacy-policy/"] {
                let found = registry.get_legal_document_by_path(path).unwrap();
                assert_eq!(found.slug, "privacy-policy");
            }
        }

        #[test]
        fn explicit_path() {
            let registry = registry();
            assert_eq!(
                registry.get_legal_document_by_path("/terms").unwrap().slug,
                "terms-of-service"
            );
            assert!(registry.get_legal_document_by_path("/legal/terms-of-service").is_none());
        }

        #[test]
        fn by_slug() {
            let registry = registry();
            assert!(registry.get_legal_document_by_slug("terms-of-service").is_some());
            assert!(registry.get_legal_document_by_slug("cookie-policy").is_none());
        }

        #[test]
        fn missing_is_none() {
            assert!(registry().get_legal_document_by_path("/legal/unknown").is_none());
        }

        #[test]
        fn duplicates_keep_first() {
            let registry = LegalRegistry::new(vec![
                doc("privacy-policy", None),
                LegalDocument {
                    title: "Second".into(),
                    ..doc("privacy-policy", None)
                },
            ]);
            assert_eq!(registry.len(), 1);
            assert_eq!(registry.duplicates(), ["privacy-policy"]);
            assert_eq!(registry.iter().next().unwrap().title, "Privacy Policy");
        }
    }

    mod json_ld {
        use super::*;

        #[test]
        fn privacy_policy_with_date() {
            let site = test_identity();
            let value = build_legal_json_ld(&doc("privacy-policy", Some("2025-01-15")), &site);
            assert_eq!(value["@context"], "https://schema.org");
            assert_eq!(value["@type"], "PrivacyPolicy");
            assert_eq!(value["name"], "Privacy Policy");
            assert_eq!(value["url"], "https://dealscale.io/legal/privacy-policy");
            assert_eq!(value["dateModified"], "2025-01-15T00:00:00Z");
            assert_eq!(value["isPartOf"]["@type"], "WebSite");
            assert_eq!(value["publisher"]["logo"]["url"], "https://dealscale.io/logo.png");
        }

        #[test]
        fn key_order() {
            let site = test_identity();
            let value = build_legal_json_ld(&doc("privacy-policy", Some("2025-01-15")), &site);
            let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
            assert_eq!(
                keys,
                [
                    "@context",
                    "@type",
                    "name",
                    "description",
                    "url",
                    "dateModified",
                    "isPartOf",
                    "publisher"
                ]
            );
        }

        #[test]
        fn type_per_slug() {
            let site = test_identity();
            for slug in ["terms-of-service", "tcpa-compliance", "gdpr-policy"] {
                let value = build_legal_json_ld(&doc(slug, None), &site);
                assert_eq!(value["@type"], "Legislation");
            }
            for slug in ["cookie-policy", "refund-policy"] {
                let value = build_legal_json_ld(&doc(slug, None), &site);
                assert_eq!(value["@type"], "WebPage", "{slug}");
            }
        }

        #[test]
        fn unparsable_date_omitted() {
            let site = test_identity();
            for date in [None, Some("last spring"), Some("2025-13-01"), Some("")] {
                let value = build_legal_json_ld(&doc("privacy-policy", date), &site);
                assert!(value.get("dateModified").is_none(), "{date:?}");
            }
        }
    }

    mod seo_meta {
        use super::*;

        #[test]
        fn fields() {
            let site = test_identity();
            let meta = build_legal_seo_meta(&doc("privacy-policy", Some("2025-01-15")), &site);
            assert_eq!(meta.title, "Privacy Policy | DealScale");
            assert_eq!(meta.canonical, "https://dealscale.io/legal/privacy-policy");
            assert_eq!(meta.og_type, OgType::Article);
            assert_eq!(meta.priority, Some(0.3));
            assert_eq!(meta.change_frequency, Some(ChangeFrequency::Yearly));
            assert_eq!(meta.date_modified.as_deref(), Some("2025-01-15T00:00:00Z"));
        }

        #[test]
        fn keywords_deduplicated() {
            let mut site = test_identity();
            site.keywords.push("Privacy Policy".into());
            let meta = build_legal_seo_meta(&doc("privacy-policy", None), &site);
            assert_eq!(
                meta.keywords,
                [
                    "Privacy Policy",
                    "DealScale Legal Document",
                    "real estate ai",
                    "sales automation"
                ]
            );
        }
    }
}
