//! `SeoMeta` → page metadata consumed by the head renderer.
//!
//! The output mirrors the usual framework metadata shape: `alternates`,
//! `openGraph`, `twitter` and `robots` blocks. Serialized as camelCase JSON
//! into `metadata.json` by the build command.

use serde::Serialize;

use super::meta::{OgType, SeoMeta};

/// Twitter card type used for every page.
pub const TWITTER_CARD: &str = "summary_large_image";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub alternates: Alternates,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternates {
    pub canonical: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub og_type: OgType,
    pub images: Vec<OgImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub see_also: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    /// `@handle` of the site account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

/// Map an `SeoMeta` record to page metadata.
///
/// Pure passthrough: empty strings stay empty, nothing is validated.
/// `openGraph.url` and `alternates.canonical` are both the input canonical.
pub fn map_seo_meta_to_metadata(seo: &SeoMeta) -> PageMetadata {
    let images: Vec<String> = if seo.image.is_empty() {
        Vec::new()
    } else {
        vec![seo.image.clone()]
    };

    let see_also = seo
        .manifesto_sections
        .as_deref()
        .filter(|sections| !sections.is_empty())
        .map(|sections| {
            sections
                .iter()
                .map(|s| format!("{}#{}", seo.canonical, s.anchor))
                .collect()
        });

    PageMetadata {
        title: seo.title.clone(),
        description: seo.description.clone(),
        keywords: seo.keywords.clone(),
        alternates: Alternates {
            canonical: seo.canonical.clone(),
        },
        open_graph: OpenGraph {
            title: seo.title.clone(),
            description: seo.description.clone(),
            url: seo.canonical.clone(),
            og_type: seo.og_type,
            images: images.iter().map(|url| OgImage { url: url.clone() }).collect(),
            site_name: seo.site_name.clone(),
            locale: None,
            published_time: seo.date_published.clone(),
            modified_time: seo.date_modified.clone(),
            see_also,
        },
        twitter: TwitterCard {
            card: TWITTER_CARD,
            title: seo.title.clone(),
            description: seo.description.clone(),
            images,
            site: None,
        },
        robots: Robots {
            index: seo.index,
            follow: seo.index,
        },
    }
}
