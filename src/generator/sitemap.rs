//! Sitemap generation.
//!
//! Lists every indexable registry route, plus one entry per partner anchor,
//! for search engine crawlers.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://dealscale.io/pricing</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.8</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::{SeoConfig, SiteConfig},
    core::RoutePath,
    generator::minify_xml,
    log,
    page::Site,
    seo::ChangeFrequency,
    utils::date::DateTimeUtc,
};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const PARTNERS_ROUTE: &str = "/partners";
const PARTNER_PRIORITY: f32 = 0.5;

/// Build sitemap if enabled.
pub fn build_sitemap(site: &Site, config: &SiteConfig) -> Result<()> {
    if config.build.sitemap.enable {
        let sitemap = Sitemap::build(site, &config.seo, config.build.sitemap.partner_anchors);
        sitemap.write(config)?;
    }
    Ok(())
}

#[derive(Debug)]
pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

#[derive(Debug, Clone, PartialEq)]
struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
    changefreq: ChangeFrequency,
    priority: f32,
}

impl Sitemap {
    /// Collect entries in registry order, partner anchors last.
    pub fn build(site: &Site, seo: &SeoConfig, partner_anchors: bool) -> Self {
        let origin = &site.identity.origin;

        let mut urls: Vec<UrlEntry> = site
            .registry
            .iter()
            .filter(|(_, meta)| meta.index)
            .map(|(route, meta)| UrlEntry {
                loc: origin.page_url(route),
                lastmod: meta
                    .date_modified
                    .as_deref()
                    .or(meta.date_published.as_deref())
                    .and_then(DateTimeUtc::parse)
                    .map(DateTimeUtc::to_w3c_date),
                changefreq: meta.change_frequency.unwrap_or(seo.default_change_frequency),
                priority: meta.priority.unwrap_or(seo.default_priority),
            })
            .collect();

        if partner_anchors {
            let page = origin.page_url(&RoutePath::new(PARTNERS_ROUTE));
            urls.extend(site.content.partners.iter().map(|partner| UrlEntry {
                loc: format!("{page}#{}", partner.anchor()),
                lastmod: None,
                changefreq: ChangeFrequency::Monthly,
                priority: PARTNER_PRIORITY,
            }));
        }

        Self { urls }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&lastmod);
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("    <changefreq>");
            xml.push_str(entry.changefreq.as_str());
            xml.push_str("</changefreq>\n    <priority>");
            xml.push_str(&format_priority(entry.priority));
            xml.push_str("</priority>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let output = &config.build.output;
        let sitemap_path = output.join(&config.build.sitemap.path);
        let count = self.len();
        let xml = self.into_xml();
        let xml = minify_xml(xml.as_bytes(), config.build.minify);

        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!(
            "sitemap";
            "{} ({} urls)",
            config.root_relative(&sitemap_path).display(),
            count
        );
        Ok(())
    }
}

/// Clamp to `[0, 1]` and print with one decimal.
fn format_priority(priority: f32) -> String {
    format!("{:.1}", priority.clamp(0.0, 1.0))
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
