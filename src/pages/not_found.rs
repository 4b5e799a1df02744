//! Not-found page generation

use maud::{Markup, html};

use crate::components::layout::{PageMeta, page_wrapper};
use crate::i18n::ui;
use crate::pages::{PageContext, sheet_paths};

/// Generates the 404 page
///
/// Written once at the output root in the default language, with links
/// to the home page of both languages so a lost visitor can recover in
/// either.
///
/// # Arguments
///
/// * `ctx`: Page context in the default language
///
/// # Returns
///
/// Complete HTML markup for the 404 page
pub fn generate(ctx: PageContext<'_>) -> Markup {
    let lang = ctx.lang;
    let site = ctx.site();

    let meta = PageMeta {
        title: ui(lang, "not_found_title"),
        site_name: &site.name,
        description: ui(lang, "not_found_body"),
        image: None,
        base_url: ctx.base_url,
        page_path: "404.html",
        og_type: "website",
    };

    let sheets = sheet_paths("", &["home"], lang);
    let sheet_refs: Vec<&str> = sheets.iter().map(String::as_str).collect();

    page_wrapper(
        lang,
        &meta,
        &sheet_refs,
        html! {
            main class="not-found" {
                h1 { "404" }
                h2 { (ui(lang, "not_found_title")) }
                p { (ui(lang, "not_found_body")) }
                a href=(format!("{}/index.html", lang.code())) class="button button-primary" {
                    (ui(lang, "back_home"))
                }
            }
        },
    )
}
