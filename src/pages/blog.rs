//! Blog index page generation

use maud::{Markup, html};

use crate::components::footer::footer;
use crate::components::layout::{PageMeta, page_wrapper};
use crate::components::nav::{NavData, navbar};
use crate::content::BlogPost;
use crate::i18n::{Language, ui};
use crate::pages::{PageContext, sheet_paths};
use crate::util::root_prefix;

/// Generates the blog index page for one language
///
/// The newest post renders as a wide featured card; the rest fill a
/// grid below it, all in date-descending order from the loader.
///
/// # Arguments
///
/// * `ctx`: Page context with language, content and base URL
///
/// # Returns
///
/// Complete HTML markup for the blog index page
pub fn generate(ctx: PageContext<'_>) -> Markup {
    let lang = ctx.lang;
    let site = ctx.site();
    let prefix = root_prefix(2);
    let page_path = format!("{}/blog/index.html", lang.code());

    let meta = PageMeta {
        title: ui(lang, "blog_title"),
        site_name: &site.name,
        description: ui(lang, "blog_subtitle"),
        image: None,
        base_url: ctx.base_url,
        page_path: &page_path,
        og_type: "website",
    };

    let nav = navbar(&NavData {
        prefix: &prefix,
        lang,
        page_path: "blog/index.html",
        items: ctx.content.nav.get(lang),
        brand: ctx.brand(),
    });

    let posts = &ctx.content.posts;

    let sheets = sheet_paths(&prefix, &["blog"], lang);
    let sheet_refs: Vec<&str> = sheets.iter().map(String::as_str).collect();

    page_wrapper(
        lang,
        &meta,
        &sheet_refs,
        html! {
            (nav)
            main {
                div class="section-header" {
                    h1 { (ui(lang, "blog_title")) }
                    p { (ui(lang, "blog_subtitle")) }
                }

                @if let Some(featured) = posts.first() {
                    (featured_card(lang, featured))
                }

                @if posts.len() > 1 {
                    div class="post-grid" {
                        @for post in &posts[1..] {
                            (post_card(lang, post))
                        }
                    }
                }
            }
            (footer(lang, ctx.brand(), &site.name))
        },
    )
}

/// Renders the wide featured card for the newest post.
fn featured_card(lang: Language, post: &BlogPost) -> Markup {
    let href = format!("{}/index.html", post.slug);

    html! {
        article class="featured-post" {
            @if let Some(cover) = post.cover() {
                a href=(href) class="featured-cover" {
                    img src=(cover) alt=(post.title(lang));
                }
            }
            div class="featured-body" {
                span class="category-badge" { (post.category(lang)) }
                h2 { a href=(href) { (post.title(lang)) } }
                p { (post.excerpt(lang)) }
                (post_meta(lang, post))
                a href=(href) class="read-link" {
                    (ui(lang, "read_more"))
                    " " i class="ph ph-arrow-right" {}
                }
            }
        }
    }
}

/// Renders a grid card for one post.
fn post_card(lang: Language, post: &BlogPost) -> Markup {
    let href = format!("{}/index.html", post.slug);

    html! {
        article class="post-card" {
            @if let Some(cover) = post.cover() {
                a href=(href) class="card-cover" {
                    img src=(cover) alt=(post.title(lang));
                }
            }
            div class="card-body" {
                span class="category-badge" { (post.category(lang)) }
                h3 { a href=(href) { (post.title(lang)) } }
                p { (post.excerpt(lang)) }
                (post_meta(lang, post))
                a href=(href) class="read-link" {
                    (ui(lang, "read"))
                    " " i class="ph ph-arrow-right" {}
                }
            }
        }
    }
}

/// Renders the date and read-time line shared by both card kinds.
fn post_meta(lang: Language, post: &BlogPost) -> Markup {
    html! {
        div class="post-meta" {
            span class="meta-date" {
                i class="ph ph-calendar-blank" {}
                " " (lang.format_date(post.date()))
            }
            span class="meta-read-time" {
                i class="ph ph-clock" {}
                " " (post.read_time(lang))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures;

    #[test]
    fn test_blog_index_features_newest_post() {
        // Arrange
        let content = fixtures::content();
        let ctx = PageContext {
            lang: Language::En,
            content: &content,
            base_url: "https://example.com",
        };

        // Act
        let html = generate(ctx).into_string();

        // Assert
        assert!(html.contains("featured-post"), "Featured card present");
        assert!(html.contains("Getting Started with React"));
        assert!(
            html.contains("href=\"getting-started-with-react/index.html\""),
            "Post link relative to blog index"
        );
        assert!(html.contains("January 15, 2024"), "Formatted date");
    }

    #[test]
    fn test_blog_index_arabic_frontmatter_fields() {
        let content = fixtures::content();
        let ctx = PageContext {
            lang: Language::Ar,
            content: &content,
            base_url: "https://example.com",
        };

        let html = generate(ctx).into_string();

        assert!(html.contains("البدء مع React"), "Localized title");
        assert!(html.contains("يناير"), "Arabic month name in date");
        assert!(html.contains("اقرأ المزيد"), "Localized read-more link");
    }
}
