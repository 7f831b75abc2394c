//! Site building orchestration.
//!
//! Build phases:
//! - **Init** - Clear (with `--clean`) and create the output directory
//! - **Load** - Read content files, build the legal and SEO registries
//! - **Render** - Parallel per-route output, sitemap alongside
//! - **Finalize** - Logging
//!
//! Every registered route gets `<out>/<route>/head.html` and
//! `<out>/<route>/metadata.json`; `/` writes straight into `<out>/`.

use crate::{
    config::SiteConfig,
    core::RoutePath,
    generator::sitemap::build_sitemap,
    log,
    page::{PageRenderer, RenderedPage, Site},
    utils::plural_count,
};
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::{
    fs,
    path::{Component, Path},
};

pub const HEAD_FILE: &str = "head.html";
pub const METADATA_FILE: &str = "metadata.json";

/// Build the whole site.
pub fn build_site(config: &SiteConfig) -> Result<Site> {
    init_output(&config.build.output, config.build.clean)?;

    let site = Site::load(config)?;
    if site.registry.is_empty() {
        log!("warning"; "no pages found in {}", config.root_relative(&config.build.content).display());
    }

    let (pages, sitemap) = rayon::join(
        || write_pages(&site, config),
        || build_sitemap(&site, config),
    );
    let count = pages?;
    sitemap?;

    log!("build"; "rendered {}", plural_count(count, "page"));
    Ok(site)
}

/// Clear the output directory when asked, then make sure it exists.
fn init_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

/// Render every registered route in parallel and write its files.
fn write_pages(site: &Site, config: &SiteConfig) -> Result<usize> {
    let renderer = PageRenderer::new(site);
    let routes: Vec<_> = site.registry.routes().collect();
    check_output_dirs(&routes, &config.build.sitemap.path)?;

    routes
        .par_iter()
        .map(|route| {
            let page = renderer.render(route.as_str());
            write_page(&page, &config.build.output, config.build.minify)
        })
        .collect::<Result<Vec<()>>>()
        .map(|written| written.len())
}

/// Fail before writing anything when two routes would share a directory, or
/// a route directory would shadow a file the root writes.
///
/// Directories are compared case-insensitively so the build behaves the same
/// on case-insensitive filesystems.
fn check_output_dirs(routes: &[&RoutePath], sitemap: &Path) -> Result<()> {
    let sitemap_top = sitemap.components().find_map(|c| match c {
        Component::Normal(name) => name.to_str(),
        _ => None,
    });
    let reserved: Vec<&str> = [HEAD_FILE, METADATA_FILE]
        .into_iter()
        .chain(sitemap_top)
        .collect();

    let mut seen: FxHashMap<String, &RoutePath> = FxHashMap::default();
    for &route in routes {
        if let Some(first) = route.segments().next()
            && reserved.iter().any(|name| name.eq_ignore_ascii_case(first))
        {
            bail!("route `{route}` would overwrite the output file `{first}`");
        }
        let key = route.output_dir().to_string_lossy().to_lowercase();
        if let Some(other) = seen.insert(key, route) {
            bail!("routes `{other}` and `{route}` write to the same output directory");
        }
    }
    Ok(())
}

fn write_page(page: &RenderedPage, output: &Path, minify: bool) -> Result<()> {
    let dir = output.join(page.route.output_dir());
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let head_path = dir.join(HEAD_FILE);
    fs::write(&head_path, &page.head)
        .with_context(|| format!("Failed to write {}", head_path.display()))?;

    let json = if minify {
        serde_json::to_string(page)?
    } else {
        serde_json::to_string_pretty(page)?
    };
    let metadata_path = dir.join(METADATA_FILE);
    fs::write(&metadata_path, json)
        .with_context(|| format!("Failed to write {}", metadata_path.display()))?;

    crate::debug!("build"; "{}", page.route);
    Ok(())
}
