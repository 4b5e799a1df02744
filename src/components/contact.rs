//! Contact section component

use maud::{Markup, html};

use crate::components::icons::social_icon;
use crate::content::ContactInfo;
use crate::i18n::{Language, ui};

/// Renders the contact section: form on one side, social links on the
/// other. The static form carries no action; deployments wire it to
/// their form endpoint of choice.
pub fn contact_section(lang: Language, contact: &ContactInfo) -> Markup {
    html! {
        section id="contact" class="contact" {
            div class="section-header" {
                h2 { (contact.title) }
                p { (contact.subtitle) }
            }

            div class="contact-columns" {
                div class="contact-card" {
                    form class="contact-form" method="post" {
                        label for="name" { (contact.form.name) }
                        input type="text" id="name" name="name" required
                            placeholder=(contact.form.name);

                        label for="email" { (contact.form.email) }
                        input type="email" id="email" name="email" required
                            placeholder=(contact.form.email);

                        label for="message" { (contact.form.message) }
                        textarea id="message" name="message" rows="5" required
                            placeholder=(contact.form.message) {}

                        button type="submit" class="button button-primary" {
                            (contact.form.submit)
                        }
                    }
                }

                div class="contact-card" {
                    h3 { (ui(lang, "connect")) }
                    div class="social-links" {
                        @for link in &contact.social {
                            a href=(link.url) target="_blank" rel="noopener noreferrer"
                                class="social-link" {
                                (social_icon(&link.icon))
                                span { (link.name) }
                            }
                        }
                    }
                }
            }
        }
    }
}
