//! Sample site files.
//!
//! Writes `site.toml`, the content TOML files and ignore files for a new site.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::content::{
    FAQ_FILE, LEGAL_FILE, MANIFESTO_FILE, PAGES_FILE, PARTNERS_FILE, POSTS_FILE, PRICING_FILE,
    PROFILE_FILE,
};

const SITE_TOML: &str = include_str!("../../../templates/site.toml");

/// Content files, keyed by their name under the content directory.
const CONTENT_FILES: &[(&str, &str)] = &[
    (PAGES_FILE, include_str!("../../../templates/content/pages.toml")),
    (PRICING_FILE, include_str!("../../../templates/content/pricing.toml")),
    (PARTNERS_FILE, include_str!("../../../templates/content/partners.toml")),
    (FAQ_FILE, include_str!("../../../templates/content/faq.toml")),
    (LEGAL_FILE, include_str!("../../../templates/content/legal.toml")),
    (MANIFESTO_FILE, include_str!("../../../templates/content/manifesto.toml")),
    (POSTS_FILE, include_str!("../../../templates/content/posts.toml")),
    (PROFILE_FILE, include_str!("../../../templates/content/profile.toml")),
];

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

/// `site.toml` with a version header.
pub fn generate_config_template() -> String {
    format!(
        "# dealscale-seo configuration file (v{})\n{}",
        env!("CARGO_PKG_VERSION"),
        SITE_TOML.trim_start_matches("# DealScale SEO configuration\n")
    )
}

/// Write the config file. Fails if it already exists.
pub fn write_config(root: &Path, config_file: &Path) -> Result<()> {
    let path = root.join(config_file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .and_then(|mut file| {
            use std::io::Write;
            file.write_all(generate_config_template().as_bytes())
        })
        .with_context(|| format!("Failed to write config file '{}'", path.display()))
}

/// Write sample content files, skipping any that already exist.
///
/// Returns how many files were written.
pub fn write_content(content_dir: &Path) -> Result<usize> {
    fs::create_dir_all(content_dir)
        .with_context(|| format!("Failed to create directory '{}'", content_dir.display()))?;

    let mut written = 0;
    for (name, body) in CONTENT_FILES {
        let path = content_dir.join(name);
        if path.exists() {
            crate::debug!("init"; "keeping existing {}", path.display());
            continue;
        }
        fs::write(&path, body).with_context(|| format!("Failed to write '{}'", path.display()))?;
        written += 1;
    }
    Ok(written)
}

/// Write `.gitignore` ignoring the output directory, unless one exists.
pub fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let patterns = [
        output_pattern.to_string_lossy().into_owned(),
        ".DS_Store".to_string(),
    ];
    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::SiteContent;
    use tempfile::TempDir;

    #[test]
    fn test_config_template_parses_and_validates() {
        let template = generate_config_template();
        assert!(template.starts_with("# dealscale-seo configuration file (v"));

        let config = SiteConfig::from_str(&template).unwrap();
        assert_eq!(config.site.name, "DealScale");
        assert_eq!(config.site.url.as_deref(), Some("https://dealscale.io"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_write_config_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), Path::new("site.toml")).unwrap();
        assert!(temp.path().join("site.toml").exists());
        assert!(write_config(temp.path(), Path::new("site.toml")).is_err());
    }

    #[test]
    fn test_sample_content_loads() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("content");
        assert_eq!(write_content(&dir).unwrap(), CONTENT_FILES.len());

        let content = SiteContent::load(&dir).unwrap();
        assert!(!content.pages.is_empty());
        assert_eq!(content.pricing.plans.len(), 4);
        assert_eq!(content.partners.len(), 3);
        assert_eq!(content.faqs.len(), 3);
        assert_eq!(content.legal.len(), 5);
        assert_eq!(content.manifesto[2].anchor, "beliefs");
        assert_eq!(content.posts.len(), 2);
        assert_eq!(content.blog.name.as_deref(), Some("DealScale Blog"));
        assert_eq!(content.profile.organization.area_served.len(), 2);
        assert!(content.profile.software.rating.is_some());
    }

    #[test]
    fn test_existing_content_kept() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(FAQ_FILE), "# mine\n").unwrap();

        assert_eq!(write_content(temp.path()).unwrap(), CONTENT_FILES.len() - 1);
        assert_eq!(fs::read_to_string(temp.path().join(FAQ_FILE)).unwrap(), "# mine\n");
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        write_ignore_files(temp.path(), Path::new("public")).unwrap();
        let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert!(content.contains("/public"));

        fs::write(temp.path().join(".gitignore"), "custom").unwrap();
        write_ignore_files(temp.path(), Path::new("public")).unwrap();
        assert_eq!(fs::read_to_string(temp.path().join(".gitignore")).unwrap(), "custom");
    }
}
