//! Site validation command.
//!
//! Checks the loaded content against the invariants the builders rely on:
//!
//! - every indexable page has a title and a description
//! - canonicals end with the route and priorities stay in `[0, 1]`
//! - no duplicate routes, legal slugs or partner keys
//! - recurring plans list at least one interval
//! - rendered JSON-LD never contains a raw `</script`
//! - emitted Organization, WebSite, Product and Service nodes carry their
//!   required fields
//! - schema hints point at content that exists

use anyhow::{Result, bail};
use rustc_hash::FxHashSet;

use crate::cli::ValidateArgs;
use crate::config::SiteConfig;
use crate::core::RoutePath;
use crate::log;
use crate::logger::Report;
use crate::page::{PageRenderer, Site};
use crate::schema::{Billing, SchemaInjector, check_node_shape};
use crate::seo::{SchemaKind, SeoMeta};
use crate::utils::plural_count;

/// Validate site content
pub fn validate_site(args: &ValidateArgs, config: &SiteConfig) -> Result<()> {
    let site = Site::load(config)?;
    log!("validate"; "checking {}", plural_count(site.registry.len(), "route"));

    let mut report = Report::new();
    check_site(&site, &mut report);

    let failures = report.failures();
    let warnings = report.warnings();
    if failures == 0 {
        log!(
            "validate";
            "all {} passed, {}",
            plural_count(report.passed(), "check"),
            plural_count(warnings, "warning")
        );
        return Ok(());
    }

    log!(
        "validate";
        "found {}, {}",
        plural_count(failures, "problem"),
        plural_count(warnings, "warning")
    );
    if args.warn_only {
        return Ok(());
    }
    bail!("validation failed: {}", plural_count(failures, "problem"))
}

/// Run every check, recording results in `report`.
pub fn check_site(site: &Site, report: &mut Report) {
    check_pages(site, report);
    check_duplicates(site, report);
    check_partners(site, report);
    check_pricing(site, report);
    check_scripts(site, report);
    check_shapes(site, report);
}

fn check_pages(site: &Site, report: &mut Report) {
    for (route, meta) in site.registry.iter() {
        let subject = route.as_str();
        let mut ok = true;

        if meta.index && meta.title.trim().is_empty() {
            report.fail(subject, "title is empty");
            ok = false;
        }
        if meta.index && meta.description.trim().is_empty() {
            report.fail(subject, "description is empty");
            ok = false;
        }
        if !canonical_matches(&meta.canonical, route) {
            report.fail(
                subject,
                &format!("canonical `{}` does not end with the route", meta.canonical),
            );
            ok = false;
        }
        if let Some(priority) = meta.priority
            && !(0.0..=1.0).contains(&priority)
        {
            report.fail(subject, &format!("priority {priority} is outside [0, 1]"));
            ok = false;
        }
        ok &= check_hints(site, subject, meta, report);

        if ok {
            report.pass(subject);
        }
    }
}

fn canonical_matches(canonical: &str, route: &RoutePath) -> bool {
    if route.is_root() {
        canonical.ends_with('/')
    } else {
        canonical.ends_with(route.as_str())
    }
}

/// Hints whose content is missing render nothing; flag them.
fn check_hints(site: &Site, subject: &str, meta: &SeoMeta, report: &mut Report) -> bool {
    let content = &site.content;
    let mut ok = true;
    for kind in &meta.schemas {
        let missing = match kind {
            SchemaKind::Pricing => content.pricing.plans.is_empty().then_some("pricing plans"),
            SchemaKind::Partners => content.partners.is_empty().then_some("partners"),
            SchemaKind::Faq => content.faqs.is_empty().then_some("faq entries"),
            SchemaKind::Manifesto => content.manifesto.is_empty().then_some("manifesto sections"),
            SchemaKind::Blog => content.posts.is_empty().then_some("blog posts"),
            SchemaKind::Organization
            | SchemaKind::Website
            | SchemaKind::Software
            | SchemaKind::KnowledgeGraph => None,
        };
        if let Some(what) = missing {
            report.warn(subject, &format!("asks for {kind:?} schema but there are no {what}"));
            ok = false;
        }
    }
    ok
}

fn check_duplicates(site: &Site, report: &mut Report) {
    for route in site.registry.duplicates() {
        report.fail(route.as_str(), "route is registered more than once");
    }
    for slug in site.legal.duplicates() {
        report.fail(slug, "legal document is defined more than once");
    }
}

fn check_partners(site: &Site, report: &mut Report) {
    let mut seen = FxHashSet::default();
    for (i, partner) in site.content.partners.iter().enumerate() {
        let key = partner.key.trim();
        if key.is_empty() {
            report.fail(&format!("partner #{}", i + 1), "key is empty");
        } else if !seen.insert(key) {
            report.fail(&format!("partner `{key}`"), "key is not unique");
        } else if partner.name.trim().is_empty() {
            report.fail(&format!("partner `{key}`"), "name is empty");
        } else if !partner.has_slug_key() {
            report.warn(
                &format!("partner `{key}`"),
                &format!("key is not slug-like, its anchor is `#{}`", partner.anchor()),
            );
        } else {
            report.pass(&format!("partner `{key}`"));
        }
    }
}

fn check_pricing(site: &Site, report: &mut Report) {
    for plan in &site.content.pricing.plans {
        let subject = format!("plan `{}`", plan.id);
        match &plan.billing {
            Billing::Recurring(prices) if prices.is_empty() => {
                report.fail(&subject, "recurring plan has no intervals");
            }
            _ => report.pass(&subject),
        }
    }
}

fn check_scripts(site: &Site, report: &mut Report) {
    let renderer = PageRenderer::new(site);
    let injector = SchemaInjector::new();
    for route in site.registry.routes() {
        let page = renderer.render(route.as_str());
        let Some(inner) = injector.inner(page.json_ld.as_ref()) else {
            continue;
        };
        if inner.to_ascii_lowercase().contains("</script") {
            report.fail(route.as_str(), "JSON-LD contains a closing script tag");
        }
    }
}

/// One failure per malformed node, listing every problem on it.
fn check_shapes(site: &Site, report: &mut Report) {
    let renderer = PageRenderer::new(site);
    for route in site.registry.routes() {
        let page = renderer.render(route.as_str());
        let Some(json_ld) = &page.json_ld else {
            continue;
        };
        for node in json_ld.nodes() {
            let issues = check_node_shape(node);
            if !issues.is_empty() {
                let detail = issues
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                report.fail(route.as_str(), &detail);
            }
        }
    }
}
