//! Static SEO registry: route path → `SeoMeta`.
//!
//! Built once from `content/pages.toml`, the legal registry and the site
//! defaults. Lookups are exact matches on the normalized route; anything
//! else gets the site-wide fallback.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::legal::{LegalRegistry, build_legal_seo_meta};
use super::meta::{ChangeFrequency, ManifestoSection, OgType, SchemaKind, SeoMeta, dedup_keywords};
use crate::core::{RoutePath, SiteIdentity};
use crate::{debug, log};

/// One `[[page]]` entry of `content/pages.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEntry {
    pub path: RoutePath,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Overrides the site image.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "type")]
    pub og_type: OgType,
    #[serde(default)]
    pub date_published: Option<String>,
    #[serde(default)]
    pub date_modified: Option<String>,
    #[serde(default)]
    pub priority: Option<f32>,
    #[serde(default)]
    pub change_frequency: Option<ChangeFrequency>,
    #[serde(default = "default_index")]
    pub index: bool,
    /// Structured data rendered on the page, in order.
    #[serde(default)]
    pub schemas: Vec<SchemaKind>,
}

const fn default_index() -> bool {
    true
}

/// Where a registry entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySource {
    Page,
    Legal,
}

#[derive(Debug)]
struct Entry {
    route: RoutePath,
    meta: SeoMeta,
    source: EntrySource,
}

/// Immutable route → metadata mapping.
#[derive(Debug)]
pub struct StaticSeoRegistry {
    entries: Vec<Entry>,
    index: FxHashMap<RoutePath, usize>,
    fallback: SeoMeta,
    duplicates: Vec<RoutePath>,
}

impl StaticSeoRegistry {
    /// Build the registry.
    ///
    /// Pages come first in content order; legal documents are appended for
    /// every route no page claims. Canonicals are always `origin + path`.
    pub fn build(
        site: &SiteIdentity,
        pages: &[PageEntry],
        legal: &LegalRegistry,
        manifesto: &[ManifestoSection],
    ) -> Self {
        let mut registry = Self {
            entries: Vec::with_capacity(pages.len() + legal.len()),
            index: FxHashMap::default(),
            fallback: fallback_meta(site),
            duplicates: Vec::new(),
        };

        for page in pages {
            let meta = page_meta(page, site, manifesto);
            registry.insert(page.path.clone(), meta, EntrySource::Page);
        }

        for doc in legal.iter() {
            let route = doc.route();
            if registry.index.contains_key(&route) {
                debug!("seo"; "legal document `{}` shadowed by page {}", doc.slug, route);
                continue;
            }
            registry.insert(route, build_legal_seo_meta(doc, site), EntrySource::Legal);
        }

        registry
    }

    fn insert(&mut self, route: RoutePath, meta: SeoMeta, source: EntrySource) {
        if self.index.contains_key(&route) {
            log!("warning"; "duplicate page `{}` ignored", route);
            self.duplicates.push(route);
            return;
        }
        self.index.insert(route.clone(), self.entries.len());
        self.entries.push(Entry {
            route,
            meta,
            source,
        });
    }

    /// Metadata for a route, falling back to the site defaults.
    pub fn get_static_seo(&self, path: &str) -> &SeoMeta {
        match self.lookup(path) {
            Some(meta) => meta,
            None => {
                debug!("seo"; "no static metadata for `{}`, using site defaults", path);
                &self.fallback
            }
        }
    }

    /// Strict lookup, `None` for unknown routes.
    pub fn lookup(&self, path: &str) -> Option<&SeoMeta> {
        self.index
            .get(&RoutePath::new(path))
            .map(|&i| &self.entries[i].meta)
    }

    pub fn source(&self, route: &RoutePath) -> Option<EntrySource> {
        self.index.get(route).map(|&i| self.entries[i].source)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&RoutePath, &SeoMeta)> {
        self.entries.iter().map(|e| (&e.route, &e.meta))
    }

    pub fn routes(&self) -> impl Iterator<Item = &RoutePath> {
        self.entries.iter().map(|e| &e.route)
    }

    pub fn fallback(&self) -> &SeoMeta {
        &self.fallback
    }

    pub fn duplicates(&self) -> &[RoutePath] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn fallback_meta(site: &SiteIdentity) -> SeoMeta {
    let mut meta = SeoMeta::new(&*site.title, &*site.description, site.origin.root_url());
    meta.keywords = dedup_keywords(&site.keywords);
    meta.image = site.image.clone();
    meta.site_name = Some(site.name.clone());
    meta
}

fn page_meta(page: &PageEntry, site: &SiteIdentity, manifesto: &[ManifestoSection]) -> SeoMeta {
    let mut meta = SeoMeta::new(
        &*page.title,
        &*page.description,
        site.origin.page_url(&page.path),
    );
    meta.keywords = dedup_keywords(page.keywords.iter().chain(&site.keywords));
    meta.image = page.image.clone().unwrap_or_else(|| site.image.clone());
    meta.og_type = page.og_type;
    meta.date_published = page.date_published.clone();
    meta.date_modified = page.date_modified.clone();
    meta.priority = page.priority;
    meta.change_frequency = page.change_frequency;
    meta.site_name = Some(site.name.clone());
    meta.index = page.index;
    meta.schemas = page.schemas.clone();

    if page.schemas.contains(&SchemaKind::Manifesto) && !manifesto.is_empty() {
        meta.manifesto_sections = Some(manifesto.to_vec());
    }
    meta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_identity;
    use crate::seo::legal::LegalDocument;

    fn page(path: &str, title: &str) -> PageEntry {
        PageEntry {
            path: RoutePath::new(path),
            title: title.into(),
            description: format!("{title} description"),
            keywords: vec!["pricing".into(), "Real Estate AI".into()],
            image: None,
            og_type: OgType::Website,
            date_published: None,
            date_modified: None,
            priority: None,
            change_frequency: None,
            index: true,
            schemas: Vec::new(),
        }
    }

    fn legal_doc(slug: &str) -> LegalDocument {
        LegalDocument {
            slug: slug.into(),
            path: None,
            title: "Terms".into(),
            description: "Terms of use".into(),
            last_updated: None,
        }
    }

    fn registry() -> StaticSeoRegistry {
        let pages = vec![
            page("/", "DealScale"),
            page("/pricing", "Pricing | DealScale"),
            page("/about", "About | DealScale"),
        ];
        let legal = LegalRegistry::new(vec![legal_doc("terms-of-service")]);
        StaticSeoRegistry::build(&test_identity(), &pages, &legal, &[])
    }

    #[test]
    fn test_canonical_ends_with_path() {
        let registry = registry();
        let origin = "https://dealscale.io";
        for (route, _) in registry.iter() {
            let meta = registry.get_static_seo(route.as_str());
            if route.is_root() {
                assert_eq!(meta.canonical, format!("{origin}/"));
            } else {
                assert!(meta.canonical.ends_with(route.as_str()));
                assert_eq!(meta.canonical, format!("{origin}{route}"));
            }
        }
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_lookup_normalizes() {
        let registry = registry();
        assert_eq!(registry.get_static_seo("pricing/").title, "Pricing | DealScale");
        assert!(registry.lookup("/pricing").is_some());
        assert!(registry.lookup("/Pricing").is_none());
    }

    #[test]
    fn test_unknown_path_falls_back() {
        let registry = registry();
        let meta = registry.get_static_seo("/does-not-exist");
        assert_eq!(meta.title, "DealScale | AI Sales Automation");
        assert_eq!(meta.canonical, "https://dealscale.io/");
        assert!(registry.lookup("/does-not-exist").is_none());
    }

    #[test]
    fn test_keywords_merged_with_defaults() {
        let registry = registry();
        let meta = registry.get_static_seo("/pricing");
        assert_eq!(meta.keywords, ["pricing", "Real Estate AI", "sales automation"]);
    }

    #[test]
    fn test_legal_pages_merged() {
        let registry = registry();
        let meta = registry.lookup("/legal/terms-of-service").unwrap();
        assert_eq!(meta.priority, Some(0.3));
        assert_eq!(
            registry.source(&RoutePath::new("/legal/terms-of-service")),
            Some(EntrySource::Legal)
        );
    }

    #[test]
    fn test_page_shadows_legal_document() {
        let pages = vec![page("/legal/terms-of-service", "Custom Terms")];
        let legal = LegalRegistry::new(vec![legal_doc("terms-of-service")]);
        let registry = StaticSeoRegistry::build(&test_identity(), &pages, &legal, &[]);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get_static_seo("/legal/terms-of-service").title,
            "Custom Terms"
        );
        assert!(registry.duplicates().is_empty());
    }

    #[test]
    fn test_duplicate_pages_keep_first() {
        let pages = vec![page("/about", "First"), page("/about/", "Second")];
        let registry =
            StaticSeoRegistry::build(&test_identity(), &pages, &LegalRegistry::default(), &[]);
        assert_eq!(registry.get_static_seo("/about").title, "First");
        assert_eq!(registry.duplicates(), [RoutePath::new("/about")]);
    }

    #[test]
    fn test_manifesto_sections_attached_on_hint() {
        let mut about = page("/about", "About");
        about.schemas = vec![SchemaKind::Manifesto];
        let sections = vec![ManifestoSection::new("Origin Story", "How it began")];
        let registry = StaticSeoRegistry::build(
            &test_identity(),
            &[about, page("/pricing", "Pricing")],
            &LegalRegistry::default(),
            &sections,
        );
        assert_eq!(
            registry.get_static_seo("/about").manifesto_sections.as_deref(),
            Some(sections.as_slice())
        );
        assert!(registry.get_static_seo("/pricing").manifesto_sections.is_none());
    }

    #[test]
    fn test_page_entry_from_toml() {
        #[derive(Deserialize)]
        struct File {
            page: Vec<PageEntry>,
        }
        let file: File = toml::from_str(
            r#"
            [[page]]
            path = "pricing/"
            title = "Pricing"
            description = "Plans"
            change_frequency = "daily"
            priority = 0.9
            schemas = ["pricing", "faq"]
            "#,
        )
        .unwrap();
        let entry = &file.page[0];
        assert_eq!(entry.path.as_str(), "/pricing");
        assert!(entry.index);
        assert_eq!(entry.change_frequency, Some(ChangeFrequency::Daily));
        assert_eq!(entry.schemas, [SchemaKind::Pricing, SchemaKind::Faq]);
    }
}
