//! Turning a session batch into something postable.
//!
//! Produces set summaries and an SVG card; rasterising the SVG is left to
//! whatever posts it.

pub mod card;
pub mod format;

pub use card::render_card;
pub use format::{format_sets, name_stretch, time_ago, DisplayUnit};

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
