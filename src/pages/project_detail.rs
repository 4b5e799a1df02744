//! Project detail page generation

use maud::{Markup, PreEscaped, html};

use crate::components::footer::footer;
use crate::components::icons::tech_icon;
use crate::components::layout::{PageMeta, page_wrapper};
use crate::components::nav::{NavData, navbar};
use crate::content::Project;
use crate::i18n::ui;
use crate::markdown;
use crate::pages::{PageContext, sheet_paths};
use crate::util::root_prefix;

/// Generates a project detail page for one language
///
/// Header card with cover, summary, tech badges and external links,
/// followed by the rendered long-form markdown body when the content
/// directory has one for this slug. Projects without a detail file get
/// the header card alone.
///
/// # Arguments
///
/// * `ctx`: Page context with language, content and base URL
/// * `project`: Project record being rendered
///
/// # Returns
///
/// Complete HTML markup for the project detail page
pub fn generate(ctx: PageContext<'_>, project: &Project) -> Markup {
    let lang = ctx.lang;
    let site = ctx.site();
    let prefix = root_prefix(3);

    let page_path = format!("{}/projects/{}/index.html", lang.code(), project.slug);
    let nav_path = format!("projects/{}/index.html", project.slug);

    let meta = PageMeta {
        title: &project.name,
        site_name: &site.name,
        description: &project.summary,
        image: (!project.cover.is_empty()).then_some(project.cover.as_str()),
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

    let body_html = ctx.content.project_body(&project.slug).map(markdown::render);

    let sheets = sheet_paths(&prefix, &["projects", "markdown"], lang);
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
                    " " (ui(lang, "back_to_projects"))
                }

                header class="project-header" {
                    @if !project.cover.is_empty() {
                        img class="project-cover" src=(project.cover) alt=(project.name);
                    }
                    div class="project-intro" {
                        h1 { (project.name) }
                        p class="summary" { (project.summary) }

                        div class="tech-badges" {
                            @for tech in &project.tech {
                                span class="tech-badge" {
                                    (tech_icon(tech, 16))
                                    (tech)
                                }
                            }
                        }

                        div class="project-links" {
                            @if let Some(repo) = &project.repo {
                                a href=(repo) target="_blank" rel="noopener noreferrer"
                                    class="button button-outline" {
                                    i class="ph ph-github-logo" {}
                                    " " (ui(lang, "view_code"))
                                }
                            }
                            @if let Some(demo) = &project.demo {
                                a href=(demo) target="_blank" rel="noopener noreferrer"
                                    class="button button-primary" {
                                    i class="ph ph-arrow-square-out" {}
                                    " " (ui(lang, "live_demo"))
                                }
                            }
                        }
                    }
                }

                @if let Some(body) = &body_html {
                    article class="markdown-body" {
                        (PreEscaped(body.as_str()))
                    }
                }
            }
            (footer(lang, ctx.brand(), &site.name))
        },
    )
}
