//! Pre-initialization validation.
//!
//! Validates target directory state before writing the sample site.

use anyhow::{Result, bail};
use std::path::Path;

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `dealscale-seo init` - initialize in current directory
    CurrentDir,
    /// `dealscale-seo init <name>` - create new subdirectory (must not exist)
    NewDir,
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: the directory may hold other files, but not a config file
/// - `NewDir`: directory must not exist
pub fn validate_target(root: &Path, config_file: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            if root.join(config_file).exists() {
                bail!(
                    "'{}' already exists in the current directory.\n\
                     Use `dealscale-seo init <name>` to create in a new subdirectory.",
                    config_file.display()
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}
