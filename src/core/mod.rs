//! Core types - pure abstractions shared across the codebase.

mod site;
mod url;

#[cfg(test)]
pub(crate) use site::test_identity;
pub use site::SiteIdentity;
pub use url::{DEFAULT_ORIGIN, RouteError, RoutePath, SiteOrigin, is_absolute_url};
