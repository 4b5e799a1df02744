//! Testimonials section component

use maud::{Markup, html};

use crate::avatar;
use crate::content::Testimonial;
use crate::i18n::{Language, ui};

/// Renders the testimonials section
///
/// The original site cycled testimonials in a timed carousel; static
/// output renders them all as a grid of quote cards instead. Authors
/// without an avatar URL get a generated one.
pub fn testimonials_section(lang: Language, testimonials: &[Testimonial]) -> Markup {
    html! {
        section id="testimonials" class="testimonials" {
            div class="section-header" {
                h2 { (ui(lang, "testimonials_title")) }
                p { (ui(lang, "testimonials_subtitle")) }
            }

            div class="testimonial-grid" {
                @for testimonial in testimonials {
                    figure class="testimonial-card" {
                        blockquote { "\u{201C}" (testimonial.text) "\u{201D}" }
                        figcaption class="author" {
                            (avatar::render(&testimonial.name, testimonial.avatar.as_deref(), 48))
                            div class="author-meta" {
                                span class="author-name" { (testimonial.name) }
                                span class="author-role" { (testimonial.role) }
                            }
                        }
                    }
                }
            }
        }
    }
}
