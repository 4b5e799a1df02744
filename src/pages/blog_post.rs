//! Blog post page generation

use maud::{Markup, PreEscaped, html};

use crate::components::footer::footer;
use crate::components::layout::{PageMeta, page_wrapper};
use crate::components::nav::{NavData, navbar};
use crate::content::BlogPost;
use crate::i18n::ui;
use crate::markdown;
use crate::pages::{PageContext, sheet_paths};
use crate::util::root_prefix;

/// Generates a blog post page for one language
///
/// Cover image, category badge, meta line and the markdown body rendered
/// to an HTML fragment. The body markdown is shared across languages;
/// frontmatter fields localize the chrome around it.
///
/// # Arguments
///
/// * `ctx`: Page context with language, content and base URL
/// * `post`: Blog post being rendered
///
/// # Returns
///
/// Complete HTML markup for the post page
pub fn generate(ctx: PageContext<'_>, post: &BlogPost) -> Markup {
    let lang = ctx.lang;
    let site = ctx.site();
    let prefix = root_prefix(3);

    let page_path = format!("{}/blog/{}/index.html", lang.code(), post.slug);
    let nav_path = format!("blog/{}/index.html", post.slug);

    let meta = PageMeta {
        title: post.title(lang),
        site_name: &site.name,
        description: post.excerpt(lang),
        image: post.cover(),
        base_url: ctx.base_url,
        page_path: &page_path,
        og_type: "article",
    };

    let nav = navbar(&NavData {
        prefix: &prefix,
        lang,
        page_path: &nav_path,
        items: ctx.content.nav.get(lang),
        brand: ctx.brand(),
    });

    let body_html = markdown::render(&post.body);

    let sheets = sheet_paths(&prefix, &["blog", "markdown"], lang);
    let sheet_refs: Vec<&str> = sheets.iter().map(String::as_str).collect();

    page_wrapper(
        lang,
        &meta,
        &sheet_refs,
        html! {
            (nav)
            main {
                a href="../index.html" class="back-link" {
                    i class="ph ph-arrow-left" {}
                    " " (ui(lang, "back_to_blog"))
                }

                article class="post" {
                    @if let Some(cover) = post.cover() {
                        img class="post-cover" src=(cover) alt=(post.title(lang));
                    }

                    div class="post-header" {
                        div class="post-meta" {
                            span class="category-badge" { (post.category(lang)) }
                            span class="meta-date" {
                                i class="ph ph-calendar-blank" {}
                                " " (lang.format_date(post.date()))
                            }
                            span class="meta-read-time" {
                                i class="ph ph-clock" {}
                                " " (post.read_time(lang))
                            }
                        }
                        h1 { (post.title(lang)) }
                    }

                    div class="markdown-body" {
                        (PreEscaped(body_html.as_str()))
                    }
                }
            }
            (footer(lang, ctx.brand(), &site.name))
        },
    )
}
