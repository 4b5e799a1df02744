//! Static site generator for bilingual portfolio websites.

mod assets;
pub mod avatar;
pub mod components;
mod config;
mod content;
mod i18n;
mod markdown;
pub mod pages;
mod sitemap;
mod util;

pub use assets::write_css_assets;
pub use config::Config;
pub use content::{
    BlogPost, ContactForm, ContactInfo, Content, EducationEntry, ExperienceEntry, Localized,
    NavItem, Project, SiteInfo, SkillGroup, SocialLink, Testimonial, TimelineSection, categories,
    load as load_content,
};
pub use i18n::{LANGUAGES, Language, arabic_digits, category_label, ui};
pub use markdown::{Frontmatter, parse_frontmatter, render as render_markdown};
pub use sitemap::generate as generate_sitemap;
pub use util::{absolute_url, root_prefix};
