//! Project card component

use maud::{Markup, html};

use crate::components::icons::tech_icon;
use crate::content::Project;
use crate::i18n::{Language, ui};

/// Renders a project card for the gallery grid and the home page strip
///
/// Cover image, name linking to the detail page, summary, tech badges
/// and the external repo/demo links when present.
///
/// # Arguments
///
/// * `lang`: Page language for chrome strings
/// * `project`: Project record from the content directory
/// * `detail_href`: Relative link to the project's detail page
pub fn project_card(lang: Language, project: &Project, detail_href: &str) -> Markup {
    html! {
        article class="project-card" {
            @if !project.cover.is_empty() {
                a href=(detail_href) class="card-cover" {
                    img src=(project.cover) alt=(project.name);
                }
            }

            div class="card-body" {
                h3 { a href=(detail_href) { (project.name) } }
                p class="summary" { (project.summary) }

                div class="tech-badges" {
                    @for tech in &project.tech {
                        span class="tech-badge" {
                            (tech_icon(tech, 16))
                            (tech)
                        }
                    }
                }

                div class="card-links" {
                    @if let Some(repo) = &project.repo {
                        a href=(repo) target="_blank" rel="noopener noreferrer" class="card-link" {
                            i class="ph ph-github-logo" {}
                            " " (ui(lang, "view_code"))
                        }
                    }
                    @if let Some(demo) = &project.demo {
                        a href=(demo) target="_blank" rel="noopener noreferrer" class="card-link" {
                            i class="ph ph-arrow-square-out" {}
                            " " (ui(lang, "live_demo"))
                        }
                    }
                    a href=(detail_href) class="card-link card-link-more" {
                        (ui(lang, "read_more"))
                    }
                }
            }
        }
    }
}
