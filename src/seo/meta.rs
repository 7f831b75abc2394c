//! Page-level SEO record and its enums.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::slug::slugify_fragment;

/// Open Graph object type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
    #[default]
    Website,
    Article,
}

impl OgType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

/// Sitemap `<changefreq>` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured-data blocks a page asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    Organization,
    Website,
    Pricing,
    Partners,
    Faq,
    Manifesto,
    Software,
    #[serde(rename = "knowledge-graph")]
    KnowledgeGraph,
    Blog,
}

/// One entry of the manifesto timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestoSection {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub summary: String,
    /// URL fragment, derived from the title when left empty.
    #[serde(default)]
    pub anchor: String,
}

impl ManifestoSection {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        let title = title.into();
        let anchor = slugify_fragment(&title);
        Self {
            title,
            subtitle: String::new(),
            summary: summary.into(),
            anchor,
        }
    }

    /// Fill in a missing anchor from the title.
    pub fn with_resolved_anchor(mut self) -> Self {
        if self.anchor.trim().is_empty() {
            self.anchor = slugify_fragment(&self.title);
        } else {
            self.anchor = self.anchor.trim().trim_start_matches('#').to_string();
        }
        self
    }
}

/// Search-engine metadata for one route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    /// Absolute (or root-relative) canonical URL.
    pub canonical: String,
    pub keywords: Vec<String>,
    pub image: String,
    #[serde(rename = "type")]
    pub og_type: OgType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_frequency: Option<ChangeFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifesto_sections: Option<Vec<ManifestoSection>>,
    /// Whether search engines may index the page.
    pub index: bool,
    /// Structured data requested for the page, in render order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<SchemaKind>,
}

impl SeoMeta {
    /// Bare record with the given title, description and canonical.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        canonical: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            canonical: canonical.into(),
            keywords: Vec::new(),
            image: String::new(),
            og_type: OgType::Website,
            date_published: None,
            date_modified: None,
            priority: None,
            change_frequency: None,
            site_name: None,
            manifesto_sections: None,
            index: true,
            schemas: Vec::new(),
        }
    }

    pub fn wants(&self, kind: SchemaKind) -> bool {
        self.schemas.contains(&kind)
    }
}

/// Keep the first occurrence of every keyword, ignoring blanks.
///
/// Comparison is case-insensitive; the first spelling wins.
pub fn dedup_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = rustc_hash::FxHashSet::default();
    keywords
        .into_iter()
        .filter_map(|k| {
            let k = k.as_ref().trim();
            (!k.is_empty() && seen.insert(k.to_lowercase())).then(|| k.to_string())
        })
        .collect()
}
