//! Skills showcase component

use maud::{Markup, html};

use crate::components::icons::tech_icon;
use crate::content::SkillGroup;
use crate::i18n::{Language, ui};

/// Renders the skills section: one card per skill group with a grid of
/// technology icons inside.
pub fn skills_section(lang: Language, groups: &[SkillGroup]) -> Markup {
    html! {
        section id="skills" class="skills" {
            div class="section-header" {
                h2 { (ui(lang, "skills_title")) }
                p { (ui(lang, "skills_subtitle")) }
            }

            div class="skill-groups" {
                @for group in groups {
                    div class="skill-card" {
                        h3 { (group.group) }
                        div class="skill-grid" {
                            @for tech in &group.icons {
                                div class="skill-item" {
                                    (tech_icon(tech, 40))
                                    span { (tech) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
