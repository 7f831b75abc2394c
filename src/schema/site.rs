//! Organization, WebSite, Product and Service nodes.

use serde_json::{Map, Value, json};

use super::SCHEMA_CONTEXT;
use crate::core::SiteIdentity;

pub const AVAILABILITY_IN_STOCK: &str = "https://schema.org/InStock";
pub const AVAILABILITY_PRE_ORDER: &str = "https://schema.org/PreOrder";

/// `Organization` node, `@id = {origin}#organization`.
pub fn build_organization_schema(site: &SiteIdentity) -> Value {
    let logo = site.logo_url();
    let mut node = Map::new();
    node.insert("@context".into(), SCHEMA_CONTEXT.into());
    node.insert("@type".into(), "Organization".into());
    node.insert("@id".into(), site.organization_id().into());
    node.insert("name".into(), site.name.clone().into());
    if let Some(legal_name) = &site.legal_name {
        node.insert("legalName".into(), legal_name.clone().into());
    }
    node.insert("url".into(), site.origin.root_url().into());
    node.insert("description".into(), site.description.clone().into());
    node.insert("logo".into(), logo.clone().into());
    node.insert("image".into(), site.image_url().into());

    let same_as = social_profiles(site);
    if !same_as.is_empty() {
        node.insert("sameAs".into(), same_as.into());
    }
    node.insert(
        "brand".into(),
        json!({
            "@type": "Brand",
            "name": site.name,
            "logo": logo,
        }),
    );
    Value::Object(node)
}

/// `sameAs` profiles plus the Twitter handle, deduplicated.
///
/// Two URLs are the same profile when they match ignoring case and
/// trailing slashes; the first spelling is kept.
fn social_profiles(site: &SiteIdentity) -> Vec<String> {
    let twitter = site
        .twitter
        .as_deref()
        .map(|handle| handle.trim().trim_start_matches('@'))
        .filter(|handle| !handle.is_empty())
        .map(|handle| format!("https://x.com/{handle}"));

    let mut seen = rustc_hash::FxHashSet::default();
    site.same_as
        .iter()
        .cloned()
        .chain(twitter)
        .filter_map(|url| {
            let trimmed = url.trim();
            let key = trimmed.trim_end_matches('/').to_lowercase();
            (!trimmed.is_empty() && seen.insert(key)).then(|| trimmed.to_string())
        })
        .collect()
}

/// `WebSite` node with a site search action, `@id = {origin}#website`.
pub fn build_website_schema(site: &SiteIdentity) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "@id": site.website_id(),
        "url": site.origin.root_url(),
        "name": site.name,
        "description": site.description,
        "inLanguage": site.language,
        "publisher": { "@id": site.organization_id() },
        "potentialAction": {
            "@type": "SearchAction",
            "target": site.origin.absolute(&site.search_path),
            "query-input": "required name=search_term_string",
        },
    })
}

/// Offer attached to a product or service.
#[derive(Debug, Clone)]
pub struct OfferInput {
    /// Integer minor units for products, free text allowed for services.
    pub price: Value,
    pub currency: String,
    pub availability: &'static str,
    /// Path or absolute URL.
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub url: String,
    pub sku: String,
    pub offer: OfferInput,
}

#[derive(Debug, Clone)]
pub struct ServiceInput {
    pub name: String,
    pub description: String,
    pub url: String,
    pub service_type: String,
    pub category: String,
    pub offer: OfferInput,
}

fn offer_node(offer: &OfferInput, site: &SiteIdentity) -> Value {
    json!({
        "@type": "Offer",
        "price": offer.price,
        "priceCurrency": offer.currency,
        "availability": offer.availability,
        "url": site.origin.absolute(&offer.url),
    })
}

/// `Product` node, `@id = {url}#product`; relative URLs are made absolute.
pub fn build_product_schema(input: &ProductInput, site: &SiteIdentity) -> Value {
    let url = site.origin.absolute(&input.url);
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Product",
        "@id": format!("{url}#product"),
        "name": input.name,
        "description": input.description,
        "url": url,
        "sku": input.sku,
        "brand": { "@type": "Brand", "name": site.name },
        "offers": offer_node(&input.offer, site),
        "manufacturer": { "@id": site.organization_id() },
    })
}

/// `Service` node provided by the organization, `@id = {url}#service`.
pub fn build_service_schema(input: &ServiceInput, site: &SiteIdentity) -> Value {
    let url = site.origin.absolute(&input.url);
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Service",
        "@id": format!("{url}#service"),
        "name": input.name,
        "description": input.description,
        "url": url,
        "serviceType": input.service_type,
        "category": input.category,
        "provider": { "@id": site.organization_id() },
        "offers": offer_node(&input.offer, site),
    })
}
