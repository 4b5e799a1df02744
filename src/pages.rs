//! Page generation modules for different view types
//!
//! This module organizes HTML page generators by page type (home,
//! projects, blog, ...). Each page module handles its specific view
//! logic and utilizes shared components from the components module.

use crate::content::{Content, SiteInfo};
use crate::i18n::Language;

pub mod blog;
pub mod blog_post;
pub mod home;
pub mod not_found;
pub mod project_detail;
pub mod projects;

/// Shared inputs every page generator needs.
#[derive(Clone, Copy)]
pub struct PageContext<'a> {
    pub lang: Language,
    pub content: &'a Content,
    pub base_url: &'a str,
}

impl<'a> PageContext<'a> {
    pub fn site(&self) -> &'a SiteInfo {
        self.content.site.get(self.lang)
    }

    /// Brand mark for the navbar and footer: configured initials, or the
    /// full name when the content does not set initials.
    pub fn brand(&self) -> &'a str {
        let site = self.site();
        if site.initials.is_empty() {
            &site.name
        } else {
            &site.initials
        }
    }

    /// SEO description: the site description, falling back to the bio.
    pub fn description(&self) -> &'a str {
        let site = self.site();
        if site.description.is_empty() {
            &site.bio
        } else {
            &site.description
        }
    }
}

/// Builds the stylesheet link list for a page.
///
/// Every sheet lives under `assets/` at the site root; Arabic pages get
/// the RTL override sheet appended after the page sheets.
pub(crate) fn sheet_paths(prefix: &str, names: &[&str], lang: Language) -> Vec<String> {
    let mut paths: Vec<String> = names
        .iter()
        .map(|name| format!("{prefix}assets/{name}.css"))
        .collect();
    if lang.is_rtl() {
        paths.push(format!("{prefix}assets/rtl.css"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_paths_prefix_and_rtl() {
        let en = sheet_paths("../", &["home"], Language::En);
        assert_eq!(en, vec!["../assets/home.css"]);

        let ar = sheet_paths("../../", &["blog", "markdown"], Language::Ar);
        assert_eq!(
            ar,
            vec![
                "../../assets/blog.css",
                "../../assets/markdown.css",
                "../../assets/rtl.css"
            ]
        );
    }
}
