//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module  | TOML Section               | Purpose                                 |
//! |---------|----------------------------|-----------------------------------------|
//! | `build` | `[build]`, `[build.sitemap]` | Content/output paths, minify, sitemap |
//! | `seo`   | `[seo]`                    | Currency, sitemap defaults, schema names |
//! | `site`  | `[site]`                   | Brand, origin and default page metadata |

mod build;
mod seo;
mod site;

pub use build::{BuildConfig, SitemapConfig};
pub use seo::SeoConfig;
pub use site::SiteInfoConfig;
