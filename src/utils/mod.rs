//! Utility modules shared by the builders and the CLI.

pub mod date;
pub mod html;
mod plural;
pub mod slug;

pub use plural::{plural_count, plural_s};
