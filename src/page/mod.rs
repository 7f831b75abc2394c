//! Page assembly: the loaded site and the per-route renderer.

mod render;
mod site;

pub use render::{PageRenderer, RenderedPage};
pub use site::Site;

#[cfg(test)]
pub(crate) use site::fixture;
