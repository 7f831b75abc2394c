//! Content files under `[build] content`.
//!
//! | File             | Table                          | Type                       |
//! |------------------|--------------------------------|----------------------------|
//! | `pages.toml`     | `[[page]]`                     | `PageEntry`                |
//! | `pricing.toml`   | `[[plan]]`                     | `PricingPlan`              |
//! | `partners.toml`  | `[[partner]]`                  | `Partner`                  |
//! | `faq.toml`       | `[[faq]]`                      | `FaqItem`                  |
//! | `legal.toml`     | `[[document]]`                 | `LegalDocument`            |
//! | `manifesto.toml` | `[[section]]`                  | `ManifestoSection`         |
//! | `posts.toml`     | `[blog]`, `[[post]]`           | `BlogSettings`, `BlogPost` |
//! | `profile.toml`   | `[software]`, `[organization]` | `KnowledgeProfile`         |
//!
//! Every file is optional; a missing file is an empty list. Unknown keys are
//! reported the same way as in `site.toml`.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::log;
use crate::schema::{BlogPost, BlogSettings, FaqItem, KnowledgeProfile, Partner, PricingCatalog};
use crate::seo::{LegalDocument, ManifestoSection, PageEntry};

pub const PAGES_FILE: &str = "pages.toml";
pub const PRICING_FILE: &str = "pricing.toml";
pub const PARTNERS_FILE: &str = "partners.toml";
pub const FAQ_FILE: &str = "faq.toml";
pub const LEGAL_FILE: &str = "legal.toml";
pub const MANIFESTO_FILE: &str = "manifesto.toml";
pub const POSTS_FILE: &str = "posts.toml";
pub const PROFILE_FILE: &str = "profile.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
struct PagesFile {
    #[serde(default)]
    page: Vec<PageEntry>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PartnersFile {
    #[serde(default)]
    partner: Vec<Partner>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct FaqFile {
    #[serde(default)]
    faq: Vec<FaqItem>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LegalFile {
    #[serde(default)]
    document: Vec<LegalDocument>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ManifestoFile {
    #[serde(default)]
    section: Vec<ManifestoSection>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PostsFile {
    #[serde(default)]
    blog: BlogSettings,
    #[serde(default)]
    post: Vec<BlogPost>,
}

/// Everything the builders read, loaded once per run.
#[derive(Debug, Default, Clone)]
pub struct SiteContent {
    pub pages: Vec<PageEntry>,
    pub pricing: PricingCatalog,
    pub partners: Vec<Partner>,
    pub faqs: Vec<FaqItem>,
    pub legal: Vec<LegalDocument>,
    pub manifesto: Vec<ManifestoSection>,
    pub blog: BlogSettings,
    pub posts: Vec<BlogPost>,
    pub profile: KnowledgeProfile,
}

impl SiteContent {
    /// Load all content files from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let pages: PagesFile = read_optional(dir, PAGES_FILE)?;
        let pricing: PricingCatalog = read_optional(dir, PRICING_FILE)?;
        let partners: PartnersFile = read_optional(dir, PARTNERS_FILE)?;
        let faqs: FaqFile = read_optional(dir, FAQ_FILE)?;
        let legal: LegalFile = read_optional(dir, LEGAL_FILE)?;
        let manifesto: ManifestoFile = read_optional(dir, MANIFESTO_FILE)?;
        let posts: PostsFile = read_optional(dir, POSTS_FILE)?;
        let profile: KnowledgeProfile = read_optional(dir, PROFILE_FILE)?;

        Ok(Self {
            pages: pages.page,
            pricing,
            partners: partners.partner,
            faqs: faqs.faq,
            legal: legal.document,
            manifesto: manifesto
                .section
                .into_iter()
                .map(ManifestoSection::with_resolved_anchor)
                .collect(),
            blog: posts.blog,
            posts: posts.post,
            profile,
        })
    }
}

/// Parse `dir/name`, or return the default when the file does not exist.
fn read_optional<T>(dir: &Path, name: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let path = dir.join(name);
    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let (value, ignored) = parse_with_ignored::<T>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    if !ignored.is_empty() {
        log!("warning"; "unknown fields in {}: {}", name, ignored.join(", "));
    }
    Ok(value)
}

fn parse_with_ignored<T: DeserializeOwned>(content: &str) -> Result<(T, Vec<String>)> {
    let mut ignored = Vec::new();
    let deserializer = toml::Deserializer::new(content);
    let value = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
        ignored.push(path.to_string());
    })?;
    Ok((value, ignored))
}
