//! Brand facts shared by the metadata and JSON-LD builders.

use super::url::SiteOrigin;
use crate::config::SiteConfig;

/// Resolved site identity.
///
/// Built once from `site.toml`; every builder reads from it instead of the
/// raw config so tests can construct one directly.
#[derive(Debug, Clone)]
pub struct SiteIdentity {
    pub origin: SiteOrigin,
    pub name: String,
    pub legal_name: Option<String>,
    pub title: String,
    pub description: String,
    /// Default social image, as configured (path or URL).
    pub image: String,
    /// Logo, as configured (path or URL).
    pub logo: String,
    pub locale: String,
    pub language: String,
    pub keywords: Vec<String>,
    pub twitter: Option<String>,
    pub same_as: Vec<String>,
    pub currency: String,
    pub search_path: String,
    pub manifesto_name: Option<String>,
}

impl SiteIdentity {
    pub fn from_config(config: &SiteConfig) -> Self {
        let site = &config.site;
        Self {
            origin: config.origin(),
            name: site.name.clone(),
            legal_name: site.legal_name.clone(),
            title: site.title.clone(),
            description: site.description.clone(),
            image: site.image.clone(),
            logo: site.logo.clone(),
            locale: site.locale.clone(),
            language: site.language.clone(),
            keywords: site.keywords.clone(),
            twitter: site.twitter.clone(),
            same_as: site.same_as.clone(),
            currency: config.seo.currency.clone(),
            search_path: config.seo.search_path.clone(),
            manifesto_name: config.seo.manifesto_name.clone(),
        }
    }

    /// `@id` of the organization node.
    pub fn organization_id(&self) -> String {
        self.origin.node_id("organization")
    }

    /// `@id` of the website node.
    pub fn website_id(&self) -> String {
        self.origin.node_id("website")
    }

    pub fn logo_url(&self) -> String {
        self.origin.absolute(&self.logo)
    }

    pub fn image_url(&self) -> String {
        self.origin.absolute(&self.image)
    }
}

#[cfg(test)]
pub(crate) fn test_identity() -> SiteIdentity {
    SiteIdentity {
        origin: SiteOrigin::default(),
        name: "DealScale".into(),
        legal_name: Some("DealScale, Inc.".into()),
        title: "DealScale | AI Sales Automation".into(),
        description: "AI agents that call, qualify and follow up with sellers.".into(),
        image: "/banners/main.png".into(),
        logo: "/logo.png".into(),
        locale: "en_US".into(),
        language: "en".into(),
        keywords: vec!["real estate ai".into(), "sales automation".into()],
        twitter: Some("@dealscaleio".into()),
        same_as: vec![
            "https://www.linkedin.com/company/dealscale".into(),
            "https://x.com/dealscaleio".into(),
        ],
        currency: "USD".into(),
        search_path: "/search?q={search_term_string}".into(),
        manifesto_name: None,
    }
}
