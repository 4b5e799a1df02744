//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use crate::i18n::Language;
use crate::util::absolute_url;

/// Head metadata for one generated page.
///
/// Mirrors the tag set the site manages per page: title, description,
/// Open Graph tags and a canonical link. `page_path` is the page's
/// site-relative output path, used for the canonical URL and the
/// language-alternate link.
pub struct PageMeta<'a> {
    pub title: &'a str,
    pub site_name: &'a str,
    pub description: &'a str,
    pub image: Option<&'a str>,
    pub base_url: &'a str,
    pub page_path: &'a str,
    /// Open Graph object type: "website" or "article"
    pub og_type: &'a str,
}

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and body structure across all
/// page types. The root element carries the page language and its text
/// direction so Arabic pages mirror right-to-left. The caller provides
/// page-specific body content, including nav and footer.
///
/// # Arguments
///
/// * `lang`: Page language, drives `lang`/`dir` attributes and the hreflang alternate
/// * `meta`: Head metadata for the page
/// * `stylesheets`: CSS file paths to include, relative to the page
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(
    lang: Language,
    meta: &PageMeta<'_>,
    stylesheets: &[&str],
    body: Markup,
) -> Markup {
    let canonical = absolute_url(meta.base_url, meta.page_path);
    let alternate = absolute_url(meta.base_url, &swap_language(meta.page_path, lang));

    html! {
        (DOCTYPE)
        html lang=(lang.code()) dir=(lang.dir()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (meta.title) " | " (meta.site_name) }
                meta name="description" content=(meta.description);
                meta property="og:title" content=(meta.title);
                meta property="og:description" content=(meta.description);
                meta property="og:type" content=(meta.og_type);
                meta property="og:url" content=(canonical);
                @if let Some(image) = meta.image {
                    meta property="og:image" content=(image);
                }
                link rel="canonical" href=(canonical);
                link rel="alternate" hreflang=(lang.other().code()) href=(alternate);
                script src="https://unpkg.com/@phosphor-icons/web" {}
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                (body)
            }
        }
    }
}

/// Rewrites a page path's leading language segment to the other language.
///
/// Root-level pages (the redirect stub, 404) have no language segment and
/// are returned unchanged.
fn swap_language(page_path: &str, lang: Language) -> String {
    let lang_seg = format!("{}/", lang.code());
    match page_path.strip_prefix(&lang_seg) {
        Some(rest) => format!("{}/{}", lang.other().code(), rest),
        None => page_path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(page_path: &str) -> PageMeta<'_> {
        PageMeta {
            title: "Home",
            site_name: "John Doe",
            description: "Portfolio",
            image: None,
            base_url: "https://example.com",
            page_path,
            og_type: "website",
        }
    }

    #[test]
    fn test_wrapper_sets_language_and_direction() {
        // Arrange & Act
        let en = page_wrapper(Language::En, &meta("en/index.html"), &[], html! {}).into_string();
        let ar = page_wrapper(Language::Ar, &meta("ar/index.html"), &[], html! {}).into_string();

        // Assert
        assert!(en.contains("lang=\"en\""), "English page lang attribute");
        assert!(en.contains("dir=\"ltr\""), "English page direction");
        assert!(ar.contains("lang=\"ar\""), "Arabic page lang attribute");
        assert!(ar.contains("dir=\"rtl\""), "Arabic page must mirror RTL");
    }

    #[test]
    fn test_wrapper_emits_head_tags() {
        let html = page_wrapper(Language::En, &meta("en/index.html"), &[], html! {}).into_string();

        assert!(html.contains("<title>Home | John Doe</title>"));
        assert!(html.contains("property=\"og:title\""));
        assert!(html.contains("rel=\"canonical\" href=\"https://example.com/en/index.html\""));
    }

    #[test]
    fn test_wrapper_links_language_alternate() {
        let html =
            page_wrapper(Language::En, &meta("en/blog/index.html"), &[], html! {}).into_string();

        assert!(
            html.contains("hreflang=\"ar\" href=\"https://example.com/ar/blog/index.html\""),
            "Should point at the same page in the other language: {}",
            html
        );
    }

    #[test]
    fn test_wrapper_includes_stylesheets() {
        let html = page_wrapper(
            Language::En,
            &meta("en/index.html"),
            &["../assets/home.css", "../assets/rtl.css"],
            html! {},
        )
        .into_string();

        assert!(html.contains("href=\"../assets/home.css\""));
        assert!(html.contains("href=\"../assets/rtl.css\""));
    }

    #[test]
    fn test_swap_language_root_pages_unchanged() {
        assert_eq!(swap_language("404.html", Language::En), "404.html");
        assert_eq!(
            swap_language("ar/projects/index.html", Language::Ar),
            "en/projects/index.html"
        );
    }
}
