//! Site origin and route path types.
//!
//! - `SiteOrigin`: scheme + host (+ port) of the public site, never a trailing slash
//! - `RoutePath`: normalized registry key, always starts with `/`, never ends with one
//!   (except the root itself)

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Origin used when no configured candidate parses.
pub const DEFAULT_ORIGIN: &str = "https://dealscale.io";

/// Public origin of the site (e.g. `https://dealscale.io`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteOrigin(String);

impl SiteOrigin {
    /// Pick the origin from an ordered list of candidate URLs.
    ///
    /// The first `https` candidate wins. Without one, the first candidate that
    /// parses at all is used, then `DEFAULT_ORIGIN`.
    pub fn resolve<'a>(candidates: impl IntoIterator<Item = &'a str>) -> Self {
        let parsed: Vec<url::Url> = candidates
            .into_iter()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .filter_map(|c| url::Url::parse(c).ok())
            .filter(|u| matches!(u.scheme(), "http" | "https"))
            .collect();

        parsed
            .iter()
            .find(|u| u.scheme() == "https")
            .or_else(|| parsed.first())
            .map(|u| Self(u.origin().ascii_serialization()))
            .unwrap_or_else(|| Self(DEFAULT_ORIGIN.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Make a path absolute against this origin; absolute URLs pass through.
    ///
    /// ```ignore
    /// origin.absolute("/logo.png")            // https://dealscale.io/logo.png
    /// origin.absolute("logo.png")             // https://dealscale.io/logo.png
    /// origin.absolute("https://cdn.x/a.png")  // unchanged
    /// ```
    pub fn absolute(&self, path_or_url: &str) -> String {
        if is_absolute_url(path_or_url) {
            return path_or_url.to_string();
        }
        if path_or_url.starts_with('/') {
            format!("{}{}", self.0, path_or_url)
        } else {
            format!("{}/{}", self.0, path_or_url)
        }
    }

    /// Canonical URL of a route: origin + path, root keeps its slash.
    pub fn page_url(&self, route: &RoutePath) -> String {
        format!("{}{}", self.0, route.as_str())
    }

    /// Root URL of the site, used for fallback canonicals.
    pub fn root_url(&self) -> String {
        format!("{}/", self.0)
    }

    /// `{origin}#{fragment}` identifiers used for `@id` nodes.
    pub fn node_id(&self, fragment: &str) -> String {
        format!("{}#{}", self.0, fragment)
    }
}

impl Default for SiteOrigin {
    fn default() -> Self {
        Self(DEFAULT_ORIGIN.to_string())
    }
}

impl fmt::Display for SiteOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a string is already an absolute `http(s)` URL.
pub fn is_absolute_url(s: &str) -> bool {
    let lower = s.get(..8).map(str::to_ascii_lowercase).unwrap_or_default();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Normalized route path used as a registry key.
///
/// Invariants:
/// - Always starts with `/`
/// - Never ends with `/` unless it is the root
/// - No empty, `.` or `..` segments, so `output_dir` stays under the output root
/// - Case is preserved (`/GDPR` and `/gdpr` are different routes)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutePath(String);

/// A route from content that cannot be written under the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route `{0}` contains a `..` segment")]
    ParentSegment(String),
    #[error("route `{0}` contains a backslash or NUL")]
    BadCharacter(String),
}

impl RoutePath {
    /// Lexically normalize any path.
    ///
    /// Repeated slashes and `.` segments are dropped, `..` removes the previous
    /// segment and never climbs above the root.
    pub fn new(raw: &str) -> Self {
        let mut segments: Vec<&str> = Vec::new();
        for segment in raw.trim().split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                _ => segments.push(segment),
            }
        }
        Self(format!("/{}", segments.join("/")))
    }

    /// Strict form for routes read from content: `..` is an error rather than
    /// being resolved.
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        if raw.split('/').any(|segment| segment.trim() == "..") {
            return Err(RouteError::ParentSegment(raw.to_string()));
        }
        if raw.contains(['\\', '\0']) {
            return Err(RouteError::BadCharacter(raw.to_string()));
        }
        Ok(Self::new(raw))
    }

    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Output directory relative to the build root.
    ///
    /// The root maps to the build root itself (an empty path), which no other
    /// route can produce; `/legal/tos` maps to `legal/tos`.
    pub fn output_dir(&self) -> PathBuf {
        self.segments().collect()
    }
}

impl TryFrom<String> for RoutePath {
    type Error = RouteError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<&str> for RoutePath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<RoutePath> for String {
    fn from(route: RoutePath) -> Self {
        route.0
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
