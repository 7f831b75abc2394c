//! DealScale SEO - page metadata, Open Graph tags and schema.org JSON-LD
//! for the DealScale marketing site.
//!
//! # Module Structure
//!
//! - `seo` - static registry, legal documents, metadata mapping, head tags
//! - `schema` - JSON-LD builders and the script injector
//! - `page` - loaded site and per-route rendering
//! - `content` - content TOML files
//! - `config` - `site.toml`
//! - `generator` - sitemap
//! - `cli` - command implementations

pub mod logger;

pub mod cli;
pub mod config;
pub mod content;
pub mod core;
pub mod generator;
pub mod page;
pub mod schema;
pub mod seo;
pub mod utils;
