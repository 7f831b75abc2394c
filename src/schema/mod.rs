//! schema.org JSON-LD builders and the script-tag injector.
//!
//! Every builder is a pure function returning a `serde_json::Value`. With
//! `preserve_order` enabled, object keys serialize in insertion order, so
//! `@context` and `@type` always lead.
//!
//! | Module      | Output                                            |
//! |-------------|---------------------------------------------------|
//! | `site`      | `Organization`, `WebSite`, `Product`, `Service`   |
//! | `pricing`   | One `Product`/`Service` per plan variant          |
//! | `partners`  | `ItemList` of partner organizations               |
//! | `faq`       | `FAQPage`                                         |
//! | `manifesto` | `CreativeWorkSeries`                              |
//! | `software`  | `SoftwareApplication`, knowledge `@graph`         |
//! | `blog`      | `Blog` with embedded `BlogPosting`s               |
//! | `shape`     | Required-field checks on emitted nodes            |
//! | `inject`    | `<script type="application/ld+json">` markup      |

mod blog;
mod faq;
mod inject;
mod manifesto;
mod partners;
mod pricing;
mod shape;
mod site;
mod software;

pub use blog::{BlogOptions, BlogPost, BlogSettings, build_blog_posting_schema, build_blog_schema};
pub use faq::{FaqItem, FaqPageOptions, build_faq_page_schema};
pub use inject::{SCRIPT_TYPE, SchemaInjector};
pub use manifesto::{DEFAULT_MANIFESTO_NAME, ManifestoOptions, build_manifesto_schema};
pub use partners::{Partner, build_partners_item_list_schema};
pub use pricing::{
    Billing, Interval, IntervalPrice, OneTimeKind, OneTimeTerms, PricingCatalog, PricingPlan,
    build_pricing_json_ld,
};
pub use shape::{ShapeIssue, check_node_shape};
pub use site::{
    AVAILABILITY_IN_STOCK, AVAILABILITY_PRE_ORDER, OfferInput, ProductInput, ServiceInput,
    build_organization_schema, build_product_schema, build_service_schema, build_website_schema,
};
pub use software::{
    ContactPoint, KnowledgeGraphOptions, KnowledgeProfile, OrganizationProfile, Rating,
    SoftwareProfile, build_knowledge_graph_schema, build_software_application_schema,
};

use serde::Serialize;
use serde_json::Value;

/// `@context` of every top-level node.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// JSON-LD payload of a page: a single node or an array of nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsonLd {
    One(Value),
    Many(Vec<Value>),
}

impl JsonLd {
    /// Collapse a list of nodes: none → `None`, one → `One`, more → `Many`.
    pub fn from_nodes(mut nodes: Vec<Value>) -> Option<Self> {
        match nodes.len() {
            0 => None,
            1 => nodes.pop().map(Self::One),
            _ => Some(Self::Many(nodes)),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(nodes) => nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Many(nodes) if nodes.is_empty())
    }

    pub fn nodes(&self) -> &[Value] {
        match self {
            Self::One(node) => std::slice::from_ref(node),
            Self::Many(nodes) => nodes,
        }
    }
}

impl From<Value> for JsonLd {
    fn from(value: Value) -> Self {
        Self::One(value)
    }
}

impl From<Vec<Value>> for JsonLd {
    fn from(values: Vec<Value>) -> Self {
        Self::Many(values)
    }
}
