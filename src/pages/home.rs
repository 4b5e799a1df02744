//! Home page generation

use maud::{Markup, html};

use crate::components::contact::contact_section;
use crate::components::footer::footer;
use crate::components::hero::hero;
use crate::components::layout::{PageMeta, page_wrapper};
use crate::components::nav::{NavData, navbar};
use crate::components::project_card::project_card;
use crate::components::skills::skills_section;
use crate::components::testimonials::testimonials_section;
use crate::components::timeline::{education_section, experience_section};
use crate::i18n::ui;
use crate::pages::{PageContext, sheet_paths};
use crate::util::root_prefix;

/// Number of projects featured on the home page before the gallery link.
const FEATURED_PROJECT_COUNT: usize = 3;

/// Generates the home page for one language
///
/// Assembles the landing sections in the original order: hero, skills,
/// education, experience, featured projects, testimonials, contact.
///
/// # Arguments
///
/// * `ctx`: Page context with language, content and base URL
///
/// # Returns
///
/// Complete HTML markup for the home page
pub fn generate(ctx: PageContext<'_>) -> Markup {
    let lang = ctx.lang;
    let site = ctx.site();
    let prefix = root_prefix(1);
    let page_path = format!("{}/index.html", lang.code());

    let meta = PageMeta {
        title: &site.tagline,
        site_name: &site.name,
        description: ctx.description(),
        image: (!site.portrait.is_empty()).then_some(site.portrait.as_str()),
        base_url: ctx.base_url,
        page_path: &page_path,
        og_type: "website",
    };

    let nav = navbar(&NavData {
        prefix: &prefix,
        lang,
        page_path: "index.html",
        items: ctx.content.nav.get(lang),
        brand: ctx.brand(),
    });

    let projects = ctx.content.projects.get(lang);
    let featured = &projects[..projects.len().min(FEATURED_PROJECT_COUNT)];

    let sheets = sheet_paths(&prefix, &["home"], lang);
    let sheet_refs: Vec<&str> = sheets.iter().map(String::as_str).collect();

    page_wrapper(
        lang,
        &meta,
        &sheet_refs,
        html! {
            (nav)
            main {
                (hero(lang, site))
                (skills_section(lang, ctx.content.skills.get(lang)))
                (education_section(ctx.content.education.get(lang)))
                (experience_section(ctx.content.experience.get(lang)))

                @if !featured.is_empty() {
                    section id="projects" class="featured-projects" {
                        div class="section-header" {
                            h2 { (ui(lang, "featured_projects")) }
                        }
                        div class="project-grid" {
                            @for project in featured {
                                (project_card(
                                    lang,
                                    project,
                                    &format!("projects/{}/index.html", project.slug),
                                ))
                            }
                        }
                        div class="see-all" {
                            a href="projects/index.html" class="button button-outline" {
                                (ui(lang, "projects_title"))
                            }
                        }
                    }
                }

                (testimonials_section(lang, ctx.content.testimonials.get(lang)))
                (contact_section(lang, ctx.content.contact.get(lang)))
            }
            (footer(lang, ctx.brand(), &site.name))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures;
    use crate::i18n::Language;

    #[test]
    fn test_home_page_sections_present() {
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
        assert!(html.contains("Full Stack Developer"), "Hero tagline");
        assert!(html.contains("id=\"skills\""), "Skills section anchor");
        assert!(html.contains("id=\"education\""), "Education section");
        assert!(html.contains("id=\"experience\""), "Experience section");
        assert!(html.contains("id=\"projects\""), "Featured projects");
        assert!(html.contains("id=\"testimonials\""), "Testimonials");
        assert!(html.contains("id=\"contact\""), "Contact section");
    }

    #[test]
    fn test_home_page_links_project_details() {
        let content = fixtures::content();
        let ctx = PageContext {
            lang: Language::En,
            content: &content,
            base_url: "https://example.com",
        };

        let html = generate(ctx).into_string();

        assert!(
            html.contains("href=\"projects/shop/index.html\""),
            "Featured card links detail page: {}",
            html
        );
        assert!(html.contains("href=\"projects/index.html\""), "Gallery link");
    }

    #[test]
    fn test_home_page_arabic_mirrored() {
        let content = fixtures::content();
        let ctx = PageContext {
            lang: Language::Ar,
            content: &content,
            base_url: "https://example.com",
        };

        let html = generate(ctx).into_string();

        assert!(html.contains("dir=\"rtl\""), "Arabic home must be RTL");
        assert!(html.contains("مطور ويب شامل"), "Arabic tagline");
        assert!(html.contains("assets/rtl.css"), "RTL override sheet linked");
    }
}
