//! Site initialization module.
//!
//! Writes a sample DealScale site: `site.toml` plus one file per content
//! table.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`files`]: Sample file generation

mod files;
mod validate;

use crate::{config::SiteConfig, log, utils::plural_count};
use anyhow::Result;

pub use validate::InitMode;

/// Create a new site with sample content
///
/// # Steps
/// 1. Validate target directory
/// 2. Write the configuration file
/// 3. Write sample content files (existing ones are kept)
/// 4. Write ignore files
pub fn new_site(site_config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = site_config.get_root();
    let config_file = site_config.root_relative(&site_config.config_path);
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    validate::validate_target(root, &config_file, mode)?;

    files::write_config(root, &config_file)?;
    let written = files::write_content(&site_config.build.content)?;
    let output_dir = site_config.root_relative(&site_config.build.output);
    files::write_ignore_files(root, &output_dir)?;

    log!(
        "init";
        "site initialized with {}",
        plural_count(written, "content file")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use tempfile::TempDir;

    fn init_config(root: &std::path::Path) -> SiteConfig {
        let cli = Cli::parse_from(["dealscale-seo", "init"]);
        let mut config = SiteConfig::default();
        config.set_root(root);
        config.config_path = root.join(&cli.config);
        config.build.content = root.join("content");
        config.build.output = root.join("public");
        config
    }

    #[test]
    fn test_new_site_writes_everything() {
        let temp = TempDir::new().unwrap();
        let config = init_config(temp.path());

        new_site(&config, false).unwrap();

        assert!(temp.path().join("site.toml").is_file());
        assert!(temp.path().join("content/pages.toml").is_file());
        assert!(temp.path().join(".gitignore").is_file());
    }

    #[test]
    fn test_new_site_twice_fails() {
        let temp = TempDir::new().unwrap();
        let config = init_config(temp.path());

        new_site(&config, false).unwrap();
        assert!(new_site(&config, false).is_err());
    }
}
