//! Route → metadata, JSON-LD and `<head>` fragment.

use serde::Serialize;
use serde_json::Value;

use super::site::Site;
use crate::core::RoutePath;
use crate::schema::{
    BlogOptions, FaqPageOptions, JsonLd, KnowledgeGraphOptions, ManifestoOptions, SchemaInjector,
    build_blog_schema, build_faq_page_schema, build_knowledge_graph_schema,
    build_manifesto_schema, build_organization_schema, build_partners_item_list_schema,
    build_pricing_json_ld, build_software_application_schema, build_website_schema,
};
use crate::seo::{
    PageMetadata, SchemaKind, SeoMeta, build_legal_json_ld, map_seo_meta_to_metadata, render_head,
};

/// Everything emitted for one route.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage {
    pub route: RoutePath,
    /// The route had no registry entry and got the site defaults.
    pub fallback: bool,
    pub metadata: PageMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_ld: Option<JsonLd>,
    pub head: String,
}

/// Assembles pages from a loaded `Site`.
#[derive(Debug, Clone, Copy)]
pub struct PageRenderer<'a> {
    site: &'a Site,
    injector: SchemaInjector,
}

impl<'a> PageRenderer<'a> {
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            injector: SchemaInjector::new(),
        }
    }

    pub fn with_injector(mut self, injector: SchemaInjector) -> Self {
        self.injector = injector;
        self
    }

    /// Render a route: lookup → metadata → JSON-LD → head.
    pub fn render(&self, path: &str) -> RenderedPage {
        let route = RoutePath::new(path);
        let registry = &self.site.registry;
        let fallback = registry.lookup(route.as_str()).is_none();
        let seo = registry.get_static_seo(route.as_str());

        let metadata = self.metadata(seo);
        let json_ld = if fallback {
            None
        } else {
            JsonLd::from_nodes(self.schemas(&route, seo))
        };

        let mut head = render_head(&metadata, &self.site.identity.origin);
        if let Some(script) = self.injector.render(json_ld.as_ref()) {
            head.push_str(&script);
            head.push('\n');
        }

        RenderedPage {
            route,
            fallback,
            metadata,
            json_ld,
            head,
        }
    }

    fn metadata(&self, seo: &SeoMeta) -> PageMetadata {
        let identity = &self.site.identity;
        let mut metadata = map_seo_meta_to_metadata(seo);
        if !identity.locale.is_empty() {
            metadata.open_graph.locale = Some(identity.locale.clone());
        }
        metadata.twitter.site = identity.twitter.clone();
        metadata
    }

    /// Structured data for a registered route, in hint order, legal last.
    pub fn schemas(&self, route: &RoutePath, seo: &SeoMeta) -> Vec<Value> {
        let Site {
            identity, content, ..
        } = self.site;
        let mut nodes = Vec::new();

        for kind in &seo.schemas {
            match kind {
                SchemaKind::Organization => nodes.push(build_organization_schema(identity)),
                SchemaKind::Website => nodes.push(build_website_schema(identity)),
                SchemaKind::Pricing => {
                    nodes.extend(build_pricing_json_ld(&content.pricing, identity))
                }
                SchemaKind::Partners if !content.partners.is_empty() => nodes.push(
                    build_partners_item_list_schema(&content.partners, &identity.origin),
                ),
                SchemaKind::Faq if !content.faqs.is_empty() => {
                    let name = format!("{} FAQ", identity.name);
                    nodes.push(build_faq_page_schema(&FaqPageOptions {
                        canonical_url: &seo.canonical,
                        name: &name,
                        description: Some(seo.description.as_str()),
                        faqs: &content.faqs,
                    }));
                }
                SchemaKind::Manifesto if !content.manifesto.is_empty() => {
                    nodes.push(build_manifesto_schema(
                        &content.manifesto,
                        ManifestoOptions {
                            url: &seo.canonical,
                            name: identity.manifesto_name.as_deref(),
                        },
                    ));
                }
                SchemaKind::Software => nodes.push(build_software_application_schema(
                    &content.profile.software,
                    identity,
                )),
                SchemaKind::KnowledgeGraph => {
                    let faq_url = self.faq_page_url().unwrap_or(&seo.canonical);
                    nodes.push(build_knowledge_graph_schema(
                        &KnowledgeGraphOptions {
                            profile: &content.profile,
                            faqs: &content.faqs,
                            faq_url,
                        },
                        identity,
                    ));
                }
                SchemaKind::Blog => {
                    let name = content
                        .blog
                        .name
                        .clone()
                        .unwrap_or_else(|| format!("{} Blog", identity.name));
                    let description = content
                        .blog
                        .description
                        .as_deref()
                        .unwrap_or(seo.description.as_str());
                    nodes.push(build_blog_schema(
                        &BlogOptions {
                            canonical_url: &seo.canonical,
                            name: &name,
                            description: Some(description),
                            settings: &content.blog,
                        },
                        &content.posts,
                        identity,
                    ));
                }
                SchemaKind::Partners | SchemaKind::Faq | SchemaKind::Manifesto => {}
            }
        }

        if let Some(doc) = self.site.legal.get_legal_document_by_path(route.as_str()) {
            nodes.push(build_legal_json_ld(doc, identity));
        }
        nodes
    }

    /// Canonical of the first registered page that renders the FAQ.
    fn faq_page_url(&self) -> Option<&'a str> {
        self.site
            .registry
            .iter()
            .find(|(_, meta)| meta.schemas.contains(&SchemaKind::Faq))
            .map(|(_, meta)| meta.canonical.as_str())
    }

    /// Render every registered route, in registry order.
    pub fn render_all(&self) -> Vec<RenderedPage> {
        self.site
            .registry
            .routes()
            .map(|route| self.render(route.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::site::fixture;

    #[test]
    fn test_home_has_org_and_website() {
        let site = fixture::site();
        let page = PageRenderer::new(&site).render("/");
        let Some(JsonLd::Many(nodes)) = &page.json_ld else {
            panic!("expected two nodes");
        };
        assert_eq!(nodes[0]["@type"], "Organization");
        assert_eq!(nodes[1]["@type"], "WebSite");
        assert_eq!(page.metadata.alternates.canonical, "https://dealscale.io/");
        assert_eq!(page.head.matches(r#"<script type="application/ld+json">"#).count(), 1);
    }

    #[test]
    fn test_pricing_page() {
        let site = fixture::site();
        let page = PageRenderer::new(&site).render("pricing");
        let nodes = page.json_ld.as_ref().unwrap().nodes();
        let types: Vec<_> = nodes.iter().map(|n| n["@type"].as_str().unwrap()).collect();
        assert_eq!(types, ["Product", "Product", "Service", "FAQPage"]);
        assert_eq!(nodes[0]["name"], "Basic (Monthly)");
        assert_eq!(nodes[0]["offers"]["price"], 2000);
        assert_eq!(nodes[3]["url"], "https://dealscale.io/pricing");
    }

    #[test]
    fn test_about_page_manifesto() {
        let site = fixture::site();
        let page = PageRenderer::new(&site).render("/about");
        assert_eq!(
            page.metadata.open_graph.see_also.as_deref(),
            Some(
                [
                    "https://dealscale.io/about#origin-story".to_string(),
                    "https://dealscale.io/about#why-now".to_string(),
                ]
                .as_slice()
            )
        );
        let Some(JsonLd::One(series)) = &page.json_ld else {
            panic!("expected a single node");
        };
        assert_eq!(series["@type"], "CreativeWorkSeries");
        assert_eq!(series["name"], "The DealScale Manifesto");
    }

    #[test]
    fn test_partners_page() {
        let site = fixture::site();
        let page = PageRenderer::new(&site).render("/partners");
        let Some(JsonLd::One(list)) = &page.json_ld else {
            panic!("expected a single node");
        };
        assert_eq!(
            list["itemListElement"][0]["item"]["url"],
            "https://dealscale.io/partners#kw"
        );
    }

    #[test]
    fn test_legal_route_gets_legal_schema() {
        let site = fixture::site();
        let page = PageRenderer::new(&site).render("/legal/terms-of-service/");
        let Some(JsonLd::One(doc)) = &page.json_ld else {
            panic!("expected a single node");
        };
        assert_eq!(doc["@type"], "Legislation");
        assert_eq!(doc["dateModified"], "2025-02-01T00:00:00Z");
        assert_eq!(page.metadata.title, "Terms of Service | DealScale");
    }

    #[test]
    fn test_page_without_schemas_has_no_script() {
        let site = fixture::site();
        let page = PageRenderer::new(&site).render("/contact");
        assert!(page.json_ld.is_none());
        assert!(!page.head.contains("application/ld+json"));
        assert!(!page.fallback);
    }

    fn with_schemas(schemas: Vec<SchemaKind>) -> Site {
        let mut site = fixture::site();
        site.content.pages[4].schemas = schemas;
        Site::new(site.identity, site.content)
    }

    #[test]
    fn test_software_and_blog_schemas() {
        let site = with_schemas(vec![SchemaKind::Software, SchemaKind::Blog]);
        let page = PageRenderer::new(&site).render("/contact");
        let nodes = page.json_ld.as_ref().unwrap().nodes();
        assert_eq!(nodes[0]["@type"], "SoftwareApplication");
        assert_eq!(nodes[0]["offers"]["url"], "https://dealscale.io/pricing");

        let blog = &nodes[1];
        assert_eq!(blog["@type"], "Blog");
        assert_eq!(blog["name"], "DealScale Blog");
        assert_eq!(blog["url"], "https://dealscale.io/contact");
        assert_eq!(blog["description"], "Contact at DealScale");
        assert_eq!(
            blog["blogPost"][0]["url"],
            "https://dealscale.io/blogs/scale-outbound"
        );
    }

    #[test]
    fn test_knowledge_graph_schema() {
        let site = with_schemas(vec![SchemaKind::KnowledgeGraph]);
        let page = PageRenderer::new(&site).render("/contact");
        let Some(JsonLd::One(graph)) = &page.json_ld else {
            panic!("expected a single node");
        };
        let members = graph["@graph"].as_array().unwrap();
        let types: Vec<_> = members.iter().map(|m| m["@type"].clone()).collect();
        assert_eq!(
            types,
            [
                serde_json::json!(["Organization", "Brand"]),
                "WebSite".into(),
                "SoftwareApplication".into(),
                "FAQPage".into(),
            ]
        );
        // FAQ entries live on the pricing page
        assert_eq!(members[3]["url"], "https://dealscale.io/pricing");
        assert_eq!(page.head.matches("application/ld+json").count(), 1);
    }

    #[test]
    fn test_unknown_route_falls_back() {
        let site = fixture::site();
        let page = PageRenderer::new(&site).render("/nowhere");
        assert!(page.fallback);
        assert!(page.json_ld.is_none());
        assert_eq!(page.metadata.title, "DealScale | AI Sales Automation");
        assert_eq!(page.metadata.alternates.canonical, "https://dealscale.io/");
        assert!(page.head.contains(r#"<meta name="twitter:site" content="@dealscaleio">"#));
        assert!(page.head.contains(r#"<meta property="og:locale" content="en_US">"#));
    }

    #[test]
    fn test_render_all_follows_registry_order() {
        let site = fixture::site();
        let routes: Vec<_> = PageRenderer::new(&site)
            .render_all()
            .into_iter()
            .map(|p| p.route.to_string())
            .collect();
        assert_eq!(
            routes,
            ["/", "/pricing", "/partners", "/about", "/contact", "/legal/terms-of-service"]
        );
    }
}
