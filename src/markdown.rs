//! Markdown handling for blog and project content.
//!
//! This module provides the markdown-to-HTML renderer for the restricted
//! dialect used by content files, plus frontmatter parsing for blog post
//! headers.

mod frontmatter;
mod renderer;

pub use frontmatter::{Frontmatter, parse as parse_frontmatter};
pub use renderer::render;
