//! Hero section component

use maud::{Markup, html};

use crate::content::SiteInfo;
use crate::i18n::{Language, ui};

/// Renders the landing hero section
///
/// Tagline, bio, the CV download action when the content provides one,
/// a jump link to the contact section, and the portrait. The layout
/// mirrors under RTL purely through CSS logical properties, so the
/// markup is direction-neutral.
pub fn hero(lang: Language, site: &SiteInfo) -> Markup {
    html! {
        section class="hero" {
            div class="hero-copy" {
                h1 class="tagline" { (site.tagline) }
                p class="bio" { (site.bio) }

                div class="hero-actions" {
                    @if let Some(cv) = &site.cv {
                        a href=(cv) class="button button-primary" download {
                            (ui(lang, "download_cv"))
                        }
                    }
                    a href="#contact" class="button button-outline" {
                        (ui(lang, "get_in_touch"))
                    }
                }
            }

            @if !site.portrait.is_empty() {
                div class="hero-portrait" {
                    img src=(site.portrait) alt=(site.name);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(cv: Option<&str>, portrait: &str) -> SiteInfo {
        serde_json::from_str(&format!(
            r#"{{
                "name": "John Doe",
                "tagline": "Full Stack Developer",
                "bio": "I build things for the web.",
                "portrait": "{portrait}"
                {}
            }}"#,
            cv.map(|c| format!(r#", "cv": "{c}""#)).unwrap_or_default()
        ))
        .expect("Should parse site info")
    }

    #[test]
    fn test_hero_renders_copy() {
        let html = hero(Language::En, &site(None, "")).into_string();

        assert!(html.contains("Full Stack Developer"));
        assert!(html.contains("I build things for the web."));
        assert!(html.contains("Get In Touch"));
    }

    #[test]
    fn test_hero_cv_action_only_when_present() {
        let with_cv = hero(Language::En, &site(Some("/cv.pdf"), "")).into_string();
        let without = hero(Language::En, &site(None, "")).into_string();

        assert!(with_cv.contains("href=\"/cv.pdf\""), "Should link the CV");
        assert!(with_cv.contains("Download CV"));
        assert!(!without.contains("Download CV"), "No CV action without a CV");
    }

    #[test]
    fn test_hero_portrait_optional() {
        let with = hero(Language::En, &site(None, "https://example.com/me.jpg")).into_string();
        let without = hero(Language::En, &site(None, "")).into_string();

        assert!(with.contains("hero-portrait"));
        assert!(!without.contains("hero-portrait"));
    }
}
