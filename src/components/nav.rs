//! Top navigation bar component

use maud::{Markup, html};

use crate::content::NavItem;
use crate::i18n::Language;

/// Data container for navigation rendering
pub struct NavData<'a> {
    /// Relative prefix from the current page back to site root
    pub prefix: &'a str,
    pub lang: Language,
    /// Site-relative path of the current page below its language root,
    /// used by the language toggle to land on the same page
    pub page_path: &'a str,
    pub items: &'a [NavItem],
    /// Brand mark shown on the left (site initials)
    pub brand: &'a str,
}

/// Renders the fixed top navigation bar
///
/// Shows the brand link, the localized navigation items and a language
/// toggle pointing at the same page in the other language. Anchor items
/// (`#skills`) resolve into the home page; path items (`/projects`)
/// resolve into section indexes.
///
/// # Arguments
///
/// * `data`: Navigation data container
///
/// # Returns
///
/// Navigation bar markup
pub fn navbar(data: &NavData<'_>) -> Markup {
    let home = format!("{}{}/index.html", data.prefix, data.lang.code());
    let toggle_href = format!(
        "{}{}/{}",
        data.prefix,
        data.lang.other().code(),
        data.page_path
    );
    let toggle_label = match data.lang {
        Language::En => "AR",
        Language::Ar => "EN",
    };

    html! {
        nav class="navbar" {
            div class="navbar-inner" {
                a href=(home) class="brand" { (data.brand) }

                div class="nav-links" {
                    @for item in data.items {
                        a href=(resolve_href(&item.href, data.prefix, data.lang)) class="nav-link" {
                            (item.text)
                        }
                    }
                }

                a href=(toggle_href) class="lang-toggle" {
                    i class="ph ph-globe" {}
                    " " (toggle_label)
                }
            }
        }
    }
}

/// Resolves a content nav href to a generated page link
///
/// Anchors point into the home page of the current language; absolute
/// URLs pass through untouched; path hrefs map onto the section index
/// pages the generator emits.
fn resolve_href(href: &str, prefix: &str, lang: Language) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    if let Some(anchor) = href.strip_prefix('#') {
        return format!("{}{}/index.html#{}", prefix, lang.code(), anchor);
    }

    let path = href.trim_matches('/');
    if path.is_empty() {
        format!("{}{}/index.html", prefix, lang.code())
    } else {
        format!("{}{}/{}/index.html", prefix, lang.code(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<NavItem> {
        serde_json::from_str(
            r##"[
                {"href": "#skills", "text": "Skills"},
                {"href": "/projects", "text": "Projects"},
                {"href": "/blog", "text": "Blog"}
            ]"##,
        )
        .expect("Should parse nav items")
    }

    #[test]
    fn test_resolve_anchor_into_home_page() {
        assert_eq!(
            resolve_href("#skills", "../", Language::En),
            "../en/index.html#skills"
        );
        assert_eq!(
            resolve_href("#contact", "../../", Language::Ar),
            "../../ar/index.html#contact"
        );
    }

    #[test]
    fn test_resolve_section_paths() {
        assert_eq!(
            resolve_href("/projects", "../", Language::En),
            "../en/projects/index.html"
        );
        assert_eq!(
            resolve_href("/blog", "", Language::Ar),
            "ar/blog/index.html"
        );
        assert_eq!(resolve_href("/", "../", Language::En), "../en/index.html");
    }

    #[test]
    fn test_resolve_absolute_url_untouched() {
        assert_eq!(
            resolve_href("https://github.com/x", "../", Language::En),
            "https://github.com/x"
        );
    }

    #[test]
    fn test_navbar_renders_items_and_brand() {
        // Arrange
        let items = items();
        let data = NavData {
            prefix: "../",
            lang: Language::En,
            page_path: "index.html",
            items: &items,
            brand: "JD",
        };

        // Act
        let html = navbar(&data).into_string();

        // Assert
        assert!(html.contains(">JD</a>"), "Should render brand mark");
        assert!(html.contains("Skills"), "Should render nav item text");
        assert!(
            html.contains("href=\"../en/projects/index.html\""),
            "Should resolve section link"
        );
    }

    #[test]
    fn test_navbar_language_toggle_targets_same_page() {
        let items = items();
        let data = NavData {
            prefix: "../../",
            lang: Language::En,
            page_path: "blog/index.html",
            items: &items,
            brand: "JD",
        };

        let html = navbar(&data).into_string();

        assert!(
            html.contains("href=\"../../ar/blog/index.html\""),
            "Toggle should land on the same page in the other language: {}",
            html
        );
        assert!(html.contains(">AR"), "English pages offer the Arabic toggle");
    }
}
