//! `[seo]` configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::seo::ChangeFrequency;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    /// ISO 4217 currency for every pricing offer.
    pub currency: String,

    /// Sitemap priority for pages that don't set one.
    pub default_priority: f32,

    /// Sitemap change frequency for pages that don't set one.
    pub default_change_frequency: ChangeFrequency,

    /// Overrides the manifesto series name.
    pub manifesto_name: Option<String>,

    /// Site search target for the `SearchAction`, relative to the origin.
    pub search_path: String,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            default_priority: 0.8,
            default_change_frequency: ChangeFrequency::Weekly,
            manifesto_name: None,
            search_path: "/search?q={search_term_string}".into(),
        }
    }
}

pub struct SeoFields {
    pub currency: FieldPath,
    pub default_priority: FieldPath,
    pub search_path: FieldPath,
}

impl SeoConfig {
    pub const FIELDS: SeoFields = SeoFields {
        currency: FieldPath::new("seo.currency"),
        default_priority: FieldPath::new("seo.default_priority"),
        search_path: FieldPath::new("seo.search_path"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let currency_ok =
            self.currency.len() == 3 && self.currency.bytes().all(|b| b.is_ascii_uppercase());
        if !currency_ok {
            diag.error_with_hint(
                Self::FIELDS.currency,
                format!("'{}' is not an ISO 4217 code", self.currency),
                "use an uppercase three-letter code like \"USD\"",
            );
        }

        if !(0.0..=1.0).contains(&self.default_priority) {
            diag.error_with_hint(
                Self::FIELDS.default_priority,
                format!("{} is outside [0, 1]", self.default_priority),
                "sitemap priorities range from 0.0 to 1.0",
            );
        }

        if !self.search_path.contains("{search_term_string}") {
            diag.warn(
                Self::FIELDS.search_path,
                "missing `{search_term_string}` placeholder",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let mut diag = ConfigDiagnostics::new();
        SeoConfig::default().validate(&mut diag);
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_bad_currency_and_priority() {
        let mut diag = ConfigDiagnostics::new();
        let config = SeoConfig {
            currency: "usd".into(),
            default_priority: 1.5,
            ..Default::default()
        };
        config.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_search_path_placeholder() {
        let mut diag = ConfigDiagnostics::new();
        let config = SeoConfig {
            search_path: "/search".into(),
            ..Default::default()
        };
        config.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
