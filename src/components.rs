//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across multiple
//! page types (home, projects, blog). Components handle specific UI
//! elements with consistent styling and behavior, eliminating duplication
//! across page generators.

pub mod contact;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod layout;
pub mod nav;
pub mod project_card;
pub mod skills;
pub mod testimonials;
pub mod timeline;
