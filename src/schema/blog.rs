//! `Blog` and `BlogPosting` builders.
//!
//! `content/posts.toml`:
//!
//! ```toml
//! [blog]
//! path = "/blogs"
//!
//! [[post]]
//! slug = "scale-outbound"
//! title = "Scale your outbound"
//! subtitle = "Tactics for real estate teams"
//! published = "2023-11-14"
//! tags = ["Outbound", "AI"]
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::SCHEMA_CONTEXT;
use crate::core::SiteIdentity;
use crate::utils::date::to_iso8601;

/// `[blog]` table of `content/posts.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogSettings {
    /// Route posts live under when they have no explicit URL.
    pub path: String,
    /// Defaults to `"{site} Blog"`.
    pub name: Option<String>,
    /// Defaults to the page description.
    pub description: Option<String>,
}

impl Default for BlogSettings {
    fn default() -> Self {
        Self {
            path: "/blogs".into(),
            name: None,
            description: None,
        }
    }
}

/// One `[[post]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    /// Meta description; the subtitle is used when missing.
    pub description: Option<String>,
    /// Path or absolute URL; defaults to `{blog.path}/{slug}`.
    pub url: Option<String>,
    pub published: Option<String>,
    pub updated: Option<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub authors: Vec<String>,
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

impl BlogPost {
    /// Absolute URL of the post, `None` without a URL or slug.
    pub fn resolve_url(&self, settings: &BlogSettings, site: &SiteIdentity) -> Option<String> {
        if let Some(url) = non_blank(self.url.as_deref()) {
            return Some(site.origin.absolute(url));
        }
        let slug = self.slug.trim();
        (!slug.is_empty()).then(|| {
            let base = settings.path.trim().trim_end_matches('/');
            site.origin.absolute(&format!("{base}/{slug}"))
        })
    }

    fn tags(&self) -> Vec<&str> {
        self.tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// `BlogPosting` node, or `None` for a post without a title or URL.
pub fn build_blog_posting_schema(
    post: &BlogPost,
    settings: &BlogSettings,
    site: &SiteIdentity,
) -> Option<Value> {
    let title = post.title.trim();
    if title.is_empty() {
        return None;
    }
    let url = post.resolve_url(settings, site)?;

    let mut node = Map::new();
    node.insert("@context".into(), SCHEMA_CONTEXT.into());
    node.insert("@type".into(), "BlogPosting".into());
    node.insert("@id".into(), format!("{url}#blog-post").into());
    node.insert("url".into(), url.clone().into());
    node.insert(
        "mainEntityOfPage".into(),
        json!({ "@type": "WebPage", "@id": url }),
    );
    node.insert("headline".into(), title.into());
    if let Some(description) =
        non_blank(post.description.as_deref()).or(non_blank(post.subtitle.as_deref()))
    {
        node.insert("description".into(), description.into());
    }

    let published = post.published.as_deref().and_then(to_iso8601);
    let modified = post.updated.as_deref().and_then(to_iso8601).or(published.clone());
    if let Some(published) = published {
        node.insert("datePublished".into(), published.into());
    }
    if let Some(modified) = modified {
        node.insert("dateModified".into(), modified.into());
    }
    if let Some(image) = non_blank(post.image.as_deref()) {
        node.insert("image".into(), site.origin.absolute(image).into());
    }

    let tags = post.tags();
    if !tags.is_empty() {
        node.insert("keywords".into(), tags.clone().into());
        node.insert("articleSection".into(), tags.into());
    }

    let author = match post.authors.iter().map(|a| a.trim()).find(|a| !a.is_empty()) {
        Some(name) => json!({ "@type": "Person", "name": name }),
        None => json!({
            "@type": "Organization",
            "@id": site.organization_id(),
            "name": site.name,
        }),
    };
    node.insert("author".into(), author);
    node.insert("publisher".into(), json!({ "@id": site.organization_id() }));
    node.insert("inLanguage".into(), site.language.clone().into());
    Some(Value::Object(node))
}

#[derive(Debug, Clone, Copy)]
pub struct BlogOptions<'a> {
    pub canonical_url: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub settings: &'a BlogSettings,
}

/// `Blog` node embedding one `BlogPosting` per usable post, in file order.
///
/// `blogPost` is omitted when no post has both a title and a URL.
pub fn build_blog_schema(
    options: &BlogOptions<'_>,
    posts: &[BlogPost],
    site: &SiteIdentity,
) -> Value {
    let blog_posts: Vec<Value> = posts
        .iter()
        .filter_map(|post| build_blog_posting_schema(post, options.settings, site))
        .collect();

    let mut node = Map::new();
    node.insert("@context".into(), SCHEMA_CONTEXT.into());
    node.insert("@type".into(), "Blog".into());
    node.insert("@id".into(), format!("{}#blog", options.canonical_url).into());
    node.insert("url".into(), options.canonical_url.into());
    node.insert("name".into(), options.name.into());
    if let Some(description) = non_blank(options.description) {
        node.insert("description".into(), description.into());
    }
    node.insert("publisher".into(), json!({ "@id": site.organization_id() }));
    if !blog_posts.is_empty() {
        node.insert("blogPost".into(), blog_posts.into());
    }
    Value::Object(node)
}
