//! Page footer component

use maud::{Markup, html};

use crate::i18n::{Language, ui};
use crate::util::current_year;

/// Renders the shared footer
///
/// Brand mark, localized strapline, and the copyright line with the
/// owner's name and current year.
pub fn footer(lang: Language, brand: &str, owner: &str) -> Markup {
    html! {
        footer class="site-footer" {
            div class="footer-inner" {
                div class="brand" { (brand) }
                p class="strapline" { (ui(lang, "footer_strapline")) }
                p class="copyright" {
                    "© " (current_year()) " " (owner) ". " (ui(lang, "rights"))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_localized() {
        let en = footer(Language::En, "JD", "John Doe").into_string();
        let ar = footer(Language::Ar, "JD", "John Doe").into_string();

        assert!(en.contains("All rights reserved."));
        assert!(ar.contains("جميع الحقوق محفوظة."));
        assert!(en.contains("John Doe"), "Should carry owner name");
        assert!(en.contains("©"), "Should carry copyright mark");
    }
}
