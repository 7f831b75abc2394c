//! `[build]` section configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory holding the content TOML files.
    pub content: PathBuf,

    /// Output directory for rendered heads and the sitemap.
    pub output: PathBuf,

    /// Minify sitemap XML and metadata JSON.
    pub minify: bool,

    /// Remove the output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,

    /// Sitemap generation settings.
    pub sitemap: SitemapConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "public".into(),
            minify: false,
            clean: false,
            sitemap: SitemapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    pub enable: bool,
    /// Output path for the sitemap, relative to the output directory.
    pub path: PathBuf,
    /// Add one entry per partner anchor.
    pub partner_anchors: bool,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
            partner_anchors: true,
        }
    }
}

pub struct BuildFields {
    pub content: FieldPath,
    pub output: FieldPath,
    pub sitemap_path: FieldPath,
}

impl BuildConfig {
    pub const FIELDS: BuildFields = BuildFields {
        content: FieldPath::new("build.content"),
        output: FieldPath::new("build.output"),
        sitemap_path: FieldPath::new("build.sitemap.path"),
    };

    /// Pre-validate raw paths before they are joined onto the root.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        for (field, path) in [
            (Self::FIELDS.content, &self.content),
            (Self::FIELDS.output, &self.output),
            (Self::FIELDS.sitemap_path, &self.sitemap.path),
        ] {
            if path.is_absolute() {
                diag.error_with_hint(
                    field,
                    format!("`{}` must be relative", path.display()),
                    "paths are resolved against the directory holding site.toml",
                );
            }
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.content == self.output {
            diag.error_with_hint(
                Self::FIELDS.output,
                "output directory is the content directory",
                "set build.output to a separate directory like \"public\"",
            );
        }

        if self.sitemap.enable
            && self.sitemap.path.extension().and_then(|e| e.to_str()) != Some("xml")
        {
            diag.warn(
                Self::FIELDS.sitemap_path,
                format!("`{}` has no .xml extension", self.sitemap.path.display()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuildConfig::default();
        assert_eq!(config.content, PathBuf::from("content"));
        assert_eq!(config.output, PathBuf::from("public"));
        assert!(config.sitemap.enable);
        assert!(!config.minify);
    }

    #[test]
    fn test_absolute_paths_rejected() {
        let mut diag = ConfigDiagnostics::new();
        let config = BuildConfig {
            output: std::env::temp_dir(),
            ..Default::default()
        };
        config.validate_paths(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, BuildConfig::FIELDS.output);
    }

    #[test]
    fn test_same_content_and_output() {
        let mut diag = ConfigDiagnostics::new();
        let config = BuildConfig {
            output: "content".into(),
            ..Default::default()
        };
        config.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_sitemap_extension_warning() {
        let mut diag = ConfigDiagnostics::new();
        let mut config = BuildConfig::default();
        config.sitemap.path = "sitemap.txt".into();
        config.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
