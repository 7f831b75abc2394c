//! Loaded site: identity, content and the registries built from them.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::content::SiteContent;
use crate::core::SiteIdentity;
use crate::debug;
use crate::seo::{LegalRegistry, StaticSeoRegistry};

/// Immutable state shared (by reference) by every render.
#[derive(Debug)]
pub struct Site {
    pub identity: SiteIdentity,
    pub content: SiteContent,
    pub legal: LegalRegistry,
    pub registry: StaticSeoRegistry,
}

impl Site {
    pub fn new(identity: SiteIdentity, content: SiteContent) -> Self {
        let legal = LegalRegistry::new(content.legal.clone());
        let registry =
            StaticSeoRegistry::build(&identity, &content.pages, &legal, &content.manifesto);
        Self {
            identity,
            content,
            legal,
            registry,
        }
    }

    /// Load content from the configured directory and build the registries.
    pub fn load(config: &SiteConfig) -> Result<Self> {
        let identity = SiteIdentity::from_config(config);
        let content = SiteContent::load(&config.build.content)?;
        debug!(
            "seo";
            "loaded {} pages, {} plans, {} partners, {} faqs, {} legal documents, {} posts",
            content.pages.len(),
            content.pricing.plans.len(),
            content.partners.len(),
            content.faqs.len(),
            content.legal.len(),
            content.posts.len()
        );
        Ok(Self::new(identity, content))
    }
}

#[cfg(test)]
pub(crate) mod fixture {
    use super::*;
    use crate::core::{RoutePath, test_identity};
    use crate::schema::{
        Billing, BlogPost, BlogSettings, FaqItem, Interval, IntervalPrice, KnowledgeProfile,
        OneTimeKind, OneTimeTerms, Partner, PricingCatalog, PricingPlan,
    };
    use crate::seo::{LegalDocument, ManifestoSection, OgType, PageEntry, SchemaKind};

    fn page(path: &str, title: &str, schemas: Vec<SchemaKind>) -> PageEntry {
        PageEntry {
            path: RoutePath::new(path),
            title: title.into(),
            description: format!("{title} at DealScale"),
            keywords: Vec::new(),
            image: None,
            og_type: OgType::Website,
            date_published: None,
            date_modified: None,
            priority: None,
            change_frequency: None,
            index: true,
            schemas,
        }
    }

    /// A small but complete DealScale site.
    pub fn site() -> Site {
        let content = SiteContent {
            pages: vec![
                page("/", "DealScale", vec![SchemaKind::Organization, SchemaKind::Website]),
                page("/pricing", "Pricing", vec![SchemaKind::Pricing, SchemaKind::Faq]),
                page("/partners", "Partners", vec![SchemaKind::Partners]),
                page("/about", "About", vec![SchemaKind::Manifesto]),
                page("/contact", "Contact", Vec::new()),
            ],
            pricing: PricingCatalog {
                plans: vec![
                    PricingPlan {
                        id: "basic".into(),
                        name: "Basic".into(),
                        description: Some("Starter plan".into()),
                        features: Vec::new(),
                        ideal_for: None,
                        billing: Billing::Recurring(vec![
                            IntervalPrice {
                                interval: Interval::Monthly,
                                amount: 2000,
                            },
                            IntervalPrice {
                                interval: Interval::Annual,
                                amount: 20000,
                            },
                        ]),
                    },
                    PricingPlan {
                        id: "self-hosted".into(),
                        name: "Self-Hosted".into(),
                        description: None,
                        features: Vec::new(),
                        ideal_for: Some("enterprises".into()),
                        billing: Billing::OneTime(OneTimeTerms {
                            kind: OneTimeKind::SelfHosted,
                            pricing_model: None,
                            amount: None,
                            includes: Vec::new(),
                            contact_path: None,
                        }),
                    },
                ],
            },
            partners: vec![
                Partner {
                    key: "kw".into(),
                    name: "Keller Williams".into(),
                    logo: "/partners/kw.svg".into(),
                    link: None,
                    description: None,
                },
                Partner {
                    key: "zillow".into(),
                    name: "Zillow".into(),
                    logo: "/partners/zillow.svg".into(),
                    link: Some("https://www.zillow.com".into()),
                    description: Some("Listings partner".into()),
                },
            ],
            faqs: vec![FaqItem {
                question: "Is there a free trial?".into(),
                answer: "Yes, 14 days.".into(),
            }],
            legal: vec![LegalDocument {
                slug: "terms-of-service".into(),
                path: None,
                title: "Terms of Service".into(),
                description: "Rules for using DealScale.".into(),
                last_updated: Some("2025-02-01".into()),
            }],
            manifesto: vec![
                ManifestoSection::new("Origin Story", "Built by investors."),
                ManifestoSection::new("Why Now", "AI finally works."),
            ],
            blog: BlogSettings::default(),
            posts: vec![BlogPost {
                slug: "scale-outbound".into(),
                title: "Scale your outbound".into(),
                subtitle: Some("Tactics for real estate teams".into()),
                published: Some("2025-01-15".into()),
                tags: vec!["Outbound".into()],
                ..BlogPost::default()
            }],
            profile: KnowledgeProfile::default(),
        };
        Site::new(test_identity(), content)
    }
}
