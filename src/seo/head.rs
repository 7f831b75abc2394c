//! `<head>` tags for page metadata.
//!
//! Emits `<title>`, description/keywords, canonical link, robots, Open Graph
//! and Twitter card tags. Every attribute value is HTML-escaped; relative
//! image URLs are made absolute against the site origin.

use std::fmt::Write;

use super::metadata::PageMetadata;
use crate::core::SiteOrigin;
use crate::utils::html::{escape, escape_attr};

/// Render the head fragment, one tag per line.
pub fn render_head(metadata: &PageMetadata, origin: &SiteOrigin) -> String {
    let mut out = String::with_capacity(2048);
    let og = &metadata.open_graph;
    let twitter = &metadata.twitter;

    let _ = writeln!(out, "<title>{}</title>", escape(&metadata.title));
    meta_name(&mut out, "description", &metadata.description);
    if !metadata.keywords.is_empty() {
        meta_name(&mut out, "keywords", &metadata.keywords.join(", "));
    }
    let _ = writeln!(
        out,
        r#"<link rel="canonical" href="{}">"#,
        escape_attr(&metadata.alternates.canonical)
    );
    let robots = match (metadata.robots.index, metadata.robots.follow) {
        (true, true) => "index, follow",
        (true, false) => "index, nofollow",
        (false, true) => "noindex, follow",
        (false, false) => "noindex, nofollow",
    };
    meta_name(&mut out, "robots", robots);

    // Open Graph
    meta_property(&mut out, "og:title", &og.title);
    meta_property(&mut out, "og:description", &og.description);
    meta_property(&mut out, "og:url", &og.url);
    meta_property(&mut out, "og:type", og.og_type.as_str());
    if let Some(site_name) = &og.site_name {
        meta_property(&mut out, "og:site_name", site_name);
    }
    if let Some(locale) = &og.locale {
        meta_property(&mut out, "og:locale", locale);
    }
    for image in &og.images {
        meta_property(&mut out, "og:image", &origin.absolute(&image.url));
    }
    if let Some(published) = &og.published_time {
        meta_property(&mut out, "article:published_time", published);
    }
    if let Some(modified) = &og.modified_time {
        meta_property(&mut out, "article:modified_time", modified);
    }
    for url in og.see_also.iter().flatten() {
        meta_property(&mut out, "og:see_also", url);
    }

    // Twitter
    meta_name(&mut out, "twitter:card", twitter.card);
    if let Some(site) = &twitter.site {
        meta_name(&mut out, "twitter:site", site);
    }
    meta_name(&mut out, "twitter:title", &twitter.title);
    meta_name(&mut out, "twitter:description", &twitter.description);
    for image in &twitter.images {
        meta_name(&mut out, "twitter:image", &origin.absolute(image));
    }

    out
}

fn meta_name(out: &mut String, name: &str, content: &str) {
    let _ = writeln!(
        out,
        r#"<meta name="{name}" content="{}">"#,
        escape_attr(content)
    );
}

fn meta_property(out: &mut String, property: &str, content: &str) {
    let _ = writeln!(
        out,
        r#"<meta property="{property}" content="{}">"#,
        escape_attr(content)
    );
}
