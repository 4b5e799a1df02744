//! Education and experience timeline components

use maud::{Markup, html};

use crate::content::{EducationEntry, ExperienceEntry, TimelineSection};

/// Renders the education timeline section
pub fn education_section(section: &TimelineSection<EducationEntry>) -> Markup {
    html! {
        section id="education" class="timeline" {
            div class="section-header" {
                h2 { (section.title) }
                p { (section.subtitle) }
            }

            div class="timeline-items" {
                @for entry in &section.entries {
                    (timeline_item(
                        "ph ph-graduation-cap",
                        &entry.degree,
                        &entry.institution,
                        &entry.location,
                        &entry.period,
                        &entry.description,
                    ))
                }
            }
        }
    }
}

/// Renders the work experience timeline section
pub fn experience_section(section: &TimelineSection<ExperienceEntry>) -> Markup {
    html! {
        section id="experience" class="timeline" {
            div class="section-header" {
                h2 { (section.title) }
                p { (section.subtitle) }
            }

            div class="timeline-items" {
                @for entry in &section.entries {
                    (timeline_item(
                        "ph ph-briefcase",
                        &entry.position,
                        &entry.company,
                        &entry.location,
                        &entry.period,
                        &entry.description,
                    ))
                }
            }
        }
    }
}

/// Renders one timeline item: icon badge, connector line, detail card.
///
/// Education and experience entries share this shape; only the headline
/// fields and the badge icon differ.
fn timeline_item(
    icon: &str,
    headline: &str,
    org: &str,
    location: &str,
    period: &str,
    description: &str,
) -> Markup {
    html! {
        div class="timeline-item" {
            div class="timeline-marker" {
                div class="marker-badge" { i class=(icon) {} }
                div class="marker-line" {}
            }
            div class="timeline-card" {
                h3 { (headline) }
                p class="org" { (org) }
                div class="item-meta" {
                    span class="meta-location" {
                        i class="ph ph-map-pin" {}
                        " " (location)
                    }
                    span class="meta-sep" { "•" }
                    span { (period) }
                }
                p class="item-description" { (description) }
            }
        }
    }
}
