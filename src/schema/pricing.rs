//! Pricing catalog → `Product` / `Service` nodes.
//!
//! `content/pricing.toml`:
//!
//! ```toml
//! [[plan]]
//! id = "basic"
//! name = "Basic"
//! features = ["AI voice agent", "CRM sync"]
//! ideal_for = "solo investors"
//!
//! [[plan.recurring]]
//! interval = "monthly"
//! amount = 2000          # cents
//!
//! [[plan]]
//! id = "self-hosted"
//! name = "Self-Hosted"
//!
//! [plan.one-time]
//! kind = "self-hosted"
//! pricing_model = "Custom enterprise licensing"
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};

use super::SCHEMA_CONTEXT;
use super::site::{
    AVAILABILITY_IN_STOCK, AVAILABILITY_PRE_ORDER, OfferInput, ProductInput, ServiceInput,
    build_product_schema, build_service_schema,
};
use crate::core::SiteIdentity;

/// Offer price for one-time plans without an amount or pricing model.
const CONTACT_FOR_PRICING: &str = "Contact for pricing";

/// How many features/inclusions make it into a generated description.
const SUMMARY_ITEMS: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingCatalog {
    #[serde(default, rename = "plan")]
    pub plans: Vec<PricingPlan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    /// Explicit description; generated from features when missing.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub ideal_for: Option<String>,
    #[serde(flatten)]
    pub billing: Billing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Billing {
    /// One `Product` per interval, in the listed order. Never empty when loaded.
    #[serde(deserialize_with = "non_empty_intervals")]
    Recurring(Vec<IntervalPrice>),
    OneTime(OneTimeTerms),
}

fn non_empty_intervals<'de, D>(deserializer: D) -> Result<Vec<IntervalPrice>, D::Error>
where
    D: Deserializer<'de>,
{
    let prices = Vec::<IntervalPrice>::deserialize(deserializer)?;
    if prices.is_empty() {
        return Err(serde::de::Error::custom(
            "`recurring` must list at least one interval",
        ));
    }
    Ok(prices)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Monthly,
    Annual,
}

impl Interval {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Annual => "annual",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Annual => "Annual",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalPrice {
    pub interval: Interval,
    /// Price in minor currency units (cents), emitted as-is.
    pub amount: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OneTimeKind {
    SelfHosted,
    Partnership,
}

impl OneTimeKind {
    const fn service_type(self) -> &'static str {
        match self {
            Self::SelfHosted => "Self-Hosted Deployment",
            Self::Partnership => "Channel Partnership",
        }
    }

    const fn category(self) -> &'static str {
        match self {
            Self::SelfHosted => "Enterprise Deployment",
            Self::Partnership => "Partner Program",
        }
    }

    const fn default_contact_path(self) -> &'static str {
        match self {
            Self::SelfHosted => "/contact",
            Self::Partnership => "/affiliate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeTerms {
    pub kind: OneTimeKind,
    #[serde(default)]
    pub pricing_model: Option<String>,
    /// Fixed price in minor units, when there is one.
    #[serde(default)]
    pub amount: Option<u64>,
    #[serde(default)]
    pub includes: Vec<String>,
    /// Where the offer points; defaults per kind.
    #[serde(default)]
    pub contact_path: Option<String>,
}

/// JSON-LD for the whole catalog, in catalog order.
///
/// Recurring plans yield one `Product` per interval; one-time plans yield a
/// single `Service`. Every plan yields at least one node: a recurring plan
/// built in code without intervals becomes a `Product` with no offer.
pub fn build_pricing_json_ld(catalog: &PricingCatalog, site: &SiteIdentity) -> Vec<Value> {
    let mut nodes = Vec::with_capacity(catalog.plans.len() * 2);
    for plan in &catalog.plans {
        match &plan.billing {
            Billing::Recurring(prices) if prices.is_empty() => {
                nodes.push(unpriced_product(plan, &recurring_description(plan), site));
            }
            Billing::Recurring(prices) => {
                let description = recurring_description(plan);
                nodes.extend(
                    prices
                        .iter()
                        .map(|price| recurring_product(plan, *price, &description, site)),
                );
            }
            Billing::OneTime(terms) => nodes.push(one_time_service(plan, terms, site)),
        }
    }
    nodes
}

fn plan_path(plan_id: &str, interval: &str) -> String {
    format!("/pricing?plan={plan_id}&interval={interval}")
}

fn recurring_product(
    plan: &PricingPlan,
    price: IntervalPrice,
    description: &str,
    site: &SiteIdentity,
) -> Value {
    let interval = price.interval.as_str();
    let path = plan_path(&plan.id, interval);
    build_product_schema(
        &ProductInput {
            name: format!("{} ({})", plan.name, price.interval.label()),
            description: description.to_string(),
            url: path.clone(),
            sku: format!("{}-{}", plan.id, interval).to_uppercase(),
            offer: OfferInput {
                price: json!(price.amount),
                currency: site.currency.clone(),
                availability: AVAILABILITY_IN_STOCK,
                url: path,
            },
        },
        site,
    )
}

fn unpriced_product(plan: &PricingPlan, description: &str, site: &SiteIdentity) -> Value {
    let url = site.origin.absolute(&format!("/pricing?plan={}", plan.id));
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Product",
        "@id": format!("{url}#product"),
        "name": plan.name,
        "description": description,
        "url": url,
        "sku": plan.id.to_uppercase(),
        "brand": { "@type": "Brand", "name": site.name },
        "manufacturer": { "@id": site.organization_id() },
    })
}

fn one_time_service(plan: &PricingPlan, terms: &OneTimeTerms, site: &SiteIdentity) -> Value {
    let price = match (terms.amount, &terms.pricing_model) {
        (Some(amount), _) => json!(amount),
        (None, Some(model)) if !model.trim().is_empty() => json!(model),
        _ => json!(CONTACT_FOR_PRICING),
    };
    let contact = terms
        .contact_path
        .clone()
        .unwrap_or_else(|| terms.kind.default_contact_path().to_string());

    build_service_schema(
        &ServiceInput {
            name: plan.name.clone(),
            description: one_time_description(plan, terms),
            url: plan_path(&plan.id, "one-time"),
            service_type: terms.kind.service_type().to_string(),
            category: terms.kind.category().to_string(),
            offer: OfferInput {
                price,
                currency: site.currency.clone(),
                availability: AVAILABILITY_PRE_ORDER,
                url: contact,
            },
        },
        site,
    )
}

fn explicit_description(plan: &PricingPlan) -> Option<String> {
    plan.description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

fn ideal_for_line(plan: &PricingPlan) -> Option<String> {
    plan.ideal_for
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("Ideal for {s}."))
}

fn summary(items: &[String]) -> Option<String> {
    let joined = items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .take(SUMMARY_ITEMS)
        .collect::<Vec<_>>()
        .join(" • ");
    (!joined.is_empty()).then_some(joined)
}

fn join_parts(parts: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    let joined = parts.into_iter().flatten().collect::<Vec<_>>().join(" ");
    (!joined.is_empty()).then_some(joined)
}

fn recurring_description(plan: &PricingPlan) -> String {
    explicit_description(plan)
        .or_else(|| join_parts([summary(&plan.features), ideal_for_line(plan)]))
        .unwrap_or_else(|| plan.name.clone())
}

fn one_time_description(plan: &PricingPlan, terms: &OneTimeTerms) -> String {
    let pricing_model = terms
        .pricing_model
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    explicit_description(plan)
        .or_else(|| {
            join_parts([
                pricing_model,
                ideal_for_line(plan),
                summary(&terms.includes).or_else(|| summary(&plan.features)),
            ])
        })
        .unwrap_or_else(|| plan.name.clone())
}
