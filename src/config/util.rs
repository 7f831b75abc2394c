//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Environment variable consulted for the public site URL.
pub const SITE_URL_ENV: &str = "DEALSCALE_SITE_URL";

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/content/legal/  ← cwd
/// /home/user/site/site.toml       ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Site URL from the environment, ignoring blank values.
pub fn site_url_from_env() -> Option<String> {
    std::env::var(SITE_URL_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_parent() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), "").unwrap();
        let nested = dir.path().join("content/legal");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_file_from(&nested, Path::new("site.toml"));
        assert_eq!(found, Some(dir.path().join("site.toml")));
    }

    #[test]
    fn test_not_found() {
        let dir = TempDir::new().unwrap();
        let found = find_config_file_from(dir.path(), Path::new("missing-dealscale.toml"));
        assert!(found.is_none());
    }

    #[test]
    fn test_absolute_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path));
    }
}
