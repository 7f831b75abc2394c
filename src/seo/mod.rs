//! Page metadata: registry, mapper, head tags and legal documents.
//!
//! # Module Structure
//!
//! | Module     | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `meta`     | `SeoMeta` record and its enums                   |
//! | `registry` | Static route → `SeoMeta` lookup with fallback    |
//! | `metadata` | `SeoMeta` → Open Graph / Twitter / robots shape  |
//! | `head`     | `<head>` tag rendering                           |
//! | `legal`    | Legal document registry, metadata and JSON-LD    |

mod head;
mod legal;
mod meta;
mod metadata;
mod registry;

pub use head::render_head;
pub use legal::{
    LEGAL_PRIORITY, LegalDocument, LegalRegistry, build_legal_json_ld, build_legal_seo_meta,
};
pub use meta::{ChangeFrequency, ManifestoSection, OgType, SchemaKind, SeoMeta, dedup_keywords};
pub use metadata::{
    Alternates, OgImage, OpenGraph, PageMetadata, Robots, TWITTER_CARD, TwitterCard,
    map_seo_meta_to_metadata,
};
pub use registry::{EntrySource, PageEntry, StaticSeoRegistry};
