//! Project gallery page generation

use maud::{Markup, html};

use crate::components::footer::footer;
use crate::components::layout::{PageMeta, page_wrapper};
use crate::components::nav::{NavData, navbar};
use crate::components::project_card::project_card;
use crate::content::categories;
use crate::i18n::{category_label, ui};
use crate::pages::{PageContext, sheet_paths};
use crate::util::root_prefix;

/// Generates a project gallery page for one language
///
/// The original site filtered the grid client-side; static output emits
/// one page per category instead, with the filter rendered as tabs
/// linking between them. `category` of `None` is the unfiltered gallery
/// at `projects/index.html`; `Some(key)` filters to that category at
/// `projects/<key>.html`.
///
/// # Arguments
///
/// * `ctx`: Page context with language, content and base URL
/// * `category`: Category key to filter by, or None for all projects
///
/// # Returns
///
/// Complete HTML markup for the gallery page
pub fn generate(ctx: PageContext<'_>, category: Option<&str>) -> Markup {
    let lang = ctx.lang;
    let site = ctx.site();
    let prefix = root_prefix(2);

    let file = match category {
        Some(key) => format!("{key}.html"),
        None => "index.html".to_string(),
    };
    let page_path = format!("{}/projects/{}", lang.code(), file);
    let nav_path = format!("projects/{file}");

    let meta = PageMeta {
        title: ui(lang, "projects_title"),
        site_name: &site.name,
        description: ui(lang, "projects_subtitle"),
        image: None,
        base_url: ctx.base_url,
        page_path: &page_path,
        og_type: "website",
    };

    let nav = navbar(&NavData {
        prefix: &prefix,
        lang,
        page_path: &nav_path,
        items: ctx.content.nav.get(lang),
        brand: ctx.brand(),
    });

    let projects = ctx.content.projects.get(lang);
    let filtered: Vec<_> = projects
        .iter()
        .filter(|p| category.is_none_or(|key| p.category == key))
        .collect();

    let sheets = sheet_paths(&prefix, &["projects"], lang);
    let sheet_refs: Vec<&str> = sheets.iter().map(String::as_str).collect();

    page_wrapper(
        lang,
        &meta,
        &sheet_refs,
        html! {
            (nav)
            main {
                div class="section-header" {
                    h1 { (ui(lang, "projects_title")) }
                    p { (ui(lang, "projects_subtitle")) }
                }

                (filter_tabs(ctx, category))

                div class="project-grid" {
                    @for project in &filtered {
                        (project_card(
                            lang,
                            project,
                            &format!("{}/index.html", project.slug),
                        ))
                    }
                }
            }
            (footer(lang, ctx.brand(), &site.name))
        },
    )
}

/// Renders the category filter tab row with the active tab marked.
fn filter_tabs(ctx: PageContext<'_>, active: Option<&str>) -> Markup {
    let lang = ctx.lang;
    let keys = categories(ctx.content.projects.get(lang));

    html! {
        div class="filter-tabs" {
            a href="index.html"
                class=(tab_class(active.is_none())) {
                (category_label(lang, "all"))
            }
            @for key in &keys {
                a href=(format!("{key}.html"))
                    class=(tab_class(active == Some(key.as_str()))) {
                    (category_label(lang, key))
                }
            }
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active { "tab tab-active" } else { "tab" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures;
    use crate::i18n::Language;

    fn ctx(content: &crate::content::Content) -> PageContext<'_> {
        PageContext {
            lang: Language::En,
            content,
            base_url: "https://example.com",
        }
    }

    #[test]
    fn test_gallery_shows_all_projects() {
        // Arrange
        let content = fixtures::content();

        // Act
        let html = generate(ctx(&content), None).into_string();

        // Assert
        assert!(html.contains("Shop Platform"));
        assert!(html.contains("Habit Tracker"));
        assert!(html.contains("href=\"shop/index.html\""), "Detail link");
    }

    #[test]
    fn test_category_page_filters_grid() {
        let content = fixtures::content();

        let html = generate(ctx(&content), Some("mobile")).into_string();

        assert!(html.contains("Habit Tracker"), "Matching project kept");
        assert!(
            !html.contains("Shop Platform"),
            "Non-matching project filtered out"
        );
    }

    #[test]
    fn test_filter_tabs_link_category_pages() {
        let content = fixtures::content();

        let html = generate(ctx(&content), None).into_string();

        assert!(html.contains("href=\"fullstack.html\""));
        assert!(html.contains("href=\"mobile.html\""));
        assert!(html.contains("All Projects"));
    }

    #[test]
    fn test_active_tab_marked() {
        let content = fixtures::content();

        let all = generate(ctx(&content), None).into_string();
        let mobile = generate(ctx(&content), Some("mobile")).into_string();

        assert!(all.contains("href=\"index.html\" class=\"tab tab-active\""));
        assert!(mobile.contains("href=\"mobile.html\" class=\"tab tab-active\""));
    }
}
