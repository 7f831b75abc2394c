//! `SoftwareApplication` node and the `@graph` knowledge graph.
//!
//! `content/profile.toml`:
//!
//! ```toml
//! [software]
//! categories = ["BusinessApplication"]
//! operating_system = "Web"
//! price = "0"
//!
//! [software.rating]
//! value = 4.9
//! count = 120
//!
//! [organization]
//! founding_date = "2025-10-29"
//! knows_about = ["AI automation", "real estate lead generation"]
//! area_served = ["United States", "Canada"]
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::SCHEMA_CONTEXT;
use super::faq::{FaqItem, FaqPageOptions, build_faq_page_schema};
use super::site::{build_organization_schema, build_website_schema};
use crate::core::SiteIdentity;

/// FAQ entries copied into the knowledge graph.
const GRAPH_FAQS: usize = 3;

/// Product facts and organization extras, read from `profile.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeProfile {
    pub software: SoftwareProfile,
    pub organization: OrganizationProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftwareProfile {
    /// Defaults to the site name.
    pub name: Option<String>,
    /// Defaults to the site description.
    pub description: Option<String>,
    /// `applicationCategory`; a single entry is emitted as a string.
    pub categories: Vec<String>,
    pub operating_system: String,
    pub image: Option<String>,
    pub version: Option<String>,
    /// Entry price as shown on the offer.
    pub price: String,
    pub pricing_path: String,
    pub rating: Option<Rating>,
}

impl Default for SoftwareProfile {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            categories: vec!["BusinessApplication".into()],
            operating_system: "Web".into(),
            image: None,
            version: None,
            price: "0".into(),
            pricing_path: "/pricing".into(),
            rating: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub value: f64,
    pub count: u32,
    #[serde(default = "default_best")]
    pub best: f64,
    #[serde(default = "default_worst")]
    pub worst: f64,
}

const fn default_best() -> f64 {
    5.0
}

const fn default_worst() -> f64 {
    1.0
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationProfile {
    pub founding_date: Option<String>,
    pub knows_about: Vec<String>,
    pub area_served: Vec<String>,
    pub contact: Option<ContactPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPoint {
    #[serde(default = "default_contact_type")]
    pub contact_type: String,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

fn default_contact_type() -> String {
    "customer support".into()
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// `SoftwareApplication` node, `@id = {origin}/#software`, published by the
/// organization.
pub fn build_software_application_schema(
    profile: &SoftwareProfile,
    site: &SiteIdentity,
) -> Value {
    let url = site.origin.root_url();
    let mut node = Map::new();
    node.insert("@context".into(), SCHEMA_CONTEXT.into());
    node.insert("@type".into(), "SoftwareApplication".into());
    node.insert("@id".into(), format!("{url}#software").into());
    node.insert(
        "name".into(),
        non_blank(profile.name.as_deref()).unwrap_or(&site.name).into(),
    );
    node.insert(
        "description".into(),
        non_blank(profile.description.as_deref())
            .unwrap_or(&site.description)
            .into(),
    );
    node.insert("url".into(), url.clone().into());
    let image = non_blank(profile.image.as_deref()).unwrap_or(&site.image);
    node.insert("image".into(), site.origin.absolute(image).into());

    let category = match profile.categories.as_slice() {
        [one] => Value::from(one.as_str()),
        many => Value::from(many.to_vec()),
    };
    node.insert("applicationCategory".into(), category);
    node.insert("operatingSystem".into(), profile.operating_system.clone().into());
    if let Some(version) = non_blank(profile.version.as_deref()) {
        node.insert("softwareVersion".into(), version.into());
    }
    node.insert(
        "offers".into(),
        json!({
            "@type": "Offer",
            "price": profile.price,
            "priceCurrency": site.currency,
            "url": site.origin.absolute(&profile.pricing_path),
        }),
    );
    if let Some(rating) = profile.rating {
        node.insert(
            "aggregateRating".into(),
            json!({
                "@type": "AggregateRating",
                "ratingValue": rating.value,
                "reviewCount": rating.count,
                "bestRating": rating.best,
                "worstRating": rating.worst,
            }),
        );
    }
    node.insert("publisher".into(), json!({ "@id": site.organization_id() }));
    Value::Object(node)
}

#[derive(Debug, Clone, Copy)]
pub struct KnowledgeGraphOptions<'a> {
    pub profile: &'a KnowledgeProfile,
    pub faqs: &'a [FaqItem],
    /// Page the FAQ entries live on.
    pub faq_url: &'a str,
}

/// One `@graph` holding the organization (as `Organization` + `Brand`), the
/// website, the software application and the first FAQ entries.
///
/// Members drop their own `@context`; the graph carries it.
pub fn build_knowledge_graph_schema(
    options: &KnowledgeGraphOptions<'_>,
    site: &SiteIdentity,
) -> Value {
    let mut graph = vec![
        graph_organization(&options.profile.organization, site),
        build_website_schema(site),
        build_software_application_schema(&options.profile.software, site),
    ];
    if !options.faqs.is_empty() {
        let name = format!("{} FAQ", site.name);
        let faqs = &options.faqs[..options.faqs.len().min(GRAPH_FAQS)];
        graph.push(build_faq_page_schema(&FaqPageOptions {
            canonical_url: options.faq_url,
            name: &name,
            description: Some(site.description.as_str()),
            faqs,
        }));
    }

    json!({
        "@context": SCHEMA_CONTEXT,
        "@graph": graph.into_iter().map(without_context).collect::<Vec<_>>(),
    })
}

fn graph_organization(profile: &OrganizationProfile, site: &SiteIdentity) -> Value {
    let Value::Object(mut node) = build_organization_schema(site) else {
        return Value::Null;
    };
    node.insert("@type".into(), json!(["Organization", "Brand"]));
    if let Some(date) = non_blank(profile.founding_date.as_deref()) {
        node.insert("foundingDate".into(), date.into());
    }
    if !profile.area_served.is_empty() {
        let areas: Vec<Value> = profile
            .area_served
            .iter()
            .map(|name| json!({ "@type": "AdministrativeArea", "name": name }))
            .collect();
        node.insert("areaServed".into(), areas.into());
    }
    if !profile.knows_about.is_empty() {
        node.insert("knowsAbout".into(), profile.knows_about.clone().into());
    }
    if let Some(contact) = &profile.contact {
        let mut point = Map::new();
        point.insert("@type".into(), "ContactPoint".into());
        point.insert("contactType".into(), contact.contact_type.clone().into());
        if let Some(phone) = non_blank(contact.telephone.as_deref()) {
            point.insert("telephone".into(), phone.into());
        }
        if let Some(email) = non_blank(contact.email.as_deref()) {
            point.insert("email".into(), email.into());
        }
        if !contact.languages.is_empty() {
            point.insert("availableLanguage".into(), contact.languages.clone().into());
        }
        node.insert("contactPoint".into(), vec![Value::Object(point)].into());
    }
    Value::Object(node)
}

/// Rebuild the object without `@context`, keeping key order.
fn without_context(node: Value) -> Value {
    match node {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(key, _)| key != "@context")
                .collect(),
        ),
        other => other,
    }
}
