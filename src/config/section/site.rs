//! `[site]` configuration.
//!
//! Brand identity and the default page metadata. The defaults double as the
//! fallback `SeoMeta` served for routes missing from the registry.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Brand name (e.g. "DealScale").
    pub name: String,

    /// Registered company name, used as `legalName` on the organization node.
    pub legal_name: Option<String>,

    /// Public site URL. Only the origin is used.
    pub url: Option<String>,

    /// Default page title.
    pub title: String,

    /// Default page description.
    pub description: String,

    /// Default social image, path or absolute URL.
    pub image: String,

    /// Brand logo, path or absolute URL.
    pub logo: String,

    /// Language code (e.g., "en").
    pub language: String,

    /// Open Graph locale (e.g., "en_US").
    pub locale: String,

    /// Keywords appended to every page.
    pub keywords: Vec<String>,

    /// Twitter handle including the `@`.
    pub twitter: Option<String>,

    /// Social and authority profiles for `sameAs`.
    pub same_as: Vec<String>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            name: "DealScale".into(),
            legal_name: None,
            url: None,
            title: String::new(),
            description: String::new(),
            image: "/banners/main.png".into(),
            logo: "/logo.png".into(),
            language: "en".into(),
            locale: "en_US".into(),
            keywords: Vec::new(),
            twitter: None,
            same_as: Vec::new(),
        }
    }
}

pub struct SiteInfoFields {
    pub name: FieldPath,
    pub url: FieldPath,
    pub title: FieldPath,
    pub description: FieldPath,
    pub twitter: FieldPath,
    pub same_as: FieldPath,
}

impl SiteInfoConfig {
    pub const FIELDS: SiteInfoFields = SiteInfoFields {
        name: FieldPath::new("site.name"),
        url: FieldPath::new("site.url"),
        title: FieldPath::new("site.title"),
        description: FieldPath::new("site.description"),
        twitter: FieldPath::new("site.twitter"),
        same_as: FieldPath::new("site.same_as"),
    };

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `name`, `title` and `description` are non-empty (the fallback page is indexable)
    /// - `url` must be a valid URL with scheme (e.g., `https://dealscale.io`)
    /// - `same_as` entries must be absolute `http(s)` URLs
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(Self::FIELDS.name, "brand name must not be empty");
        }
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "default title is empty",
                "unmapped routes fall back to this title",
            );
        }
        if self.description.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.description,
                "default description is empty",
                "unmapped routes fall back to this description",
            );
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://dealscale.io",
                        );
                    } else if parsed.scheme() == "http" {
                        diag.warn(
                            Self::FIELDS.url,
                            "plain http origin, canonicals will not use https",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://dealscale.io",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://dealscale.io",
                    );
                }
            }
        }

        if let Some(handle) = &self.twitter
            && !handle.starts_with('@')
        {
            diag.warn(
                Self::FIELDS.twitter,
                format!("handle '{handle}' should start with '@'"),
            );
        }

        for profile in &self.same_as {
            if !crate::core::is_absolute_url(profile.trim()) {
                diag.error_with_hint(
                    Self::FIELDS.same_as,
                    format!("'{profile}' is not an absolute URL"),
                    "profiles must start with https://",
                );
            }
        }
    }
}
