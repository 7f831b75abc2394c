//! Inspect command implementation.
//!
//! Resolves one route and prints what the build would emit for it.

use anyhow::Result;

use crate::cli::InspectArgs;
use crate::config::SiteConfig;
use crate::debug;
use crate::page::{PageRenderer, RenderedPage, Site};
use crate::schema::SchemaInjector;

/// Execute inspect command
pub fn run_inspect(args: &InspectArgs, config: &SiteConfig) -> Result<()> {
    let site = Site::load(config)?;
    let output = inspect(&site, args)?;
    println!("{output}");
    Ok(())
}

/// Text printed for a route: the head fragment, the JSON-LD only, or the
/// whole rendered page as JSON.
pub fn inspect(site: &Site, args: &InspectArgs) -> Result<String> {
    let injector = SchemaInjector::new().pretty(args.pretty);
    let page = PageRenderer::new(site)
        .with_injector(injector)
        .render(&args.path);

    if page.fallback {
        debug!("inspect"; "`{}` is not registered, showing site defaults", args.path);
    }

    if args.head {
        return Ok(page.head.trim_end().to_string());
    }
    if args.json_ld {
        return Ok(injector
            .inner(page.json_ld.as_ref())
            .unwrap_or_else(|| "null".to_string()));
    }
    to_json(&page, args.pretty)
}

fn to_json(page: &RenderedPage, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(page)?
    } else {
        serde_json::to_string(page)?
    };
    Ok(json)
}
