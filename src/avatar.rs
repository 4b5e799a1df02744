//! Fallback avatar generation for testimonial authors
//!
//! Testimonials without an avatar URL get a deterministic initial-letter
//! avatar: a pastel disc colored from the author's name with the first
//! letter of the name on top. Embedded as a base64 data URI so pages
//! stay self-contained.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use maud::{Markup, html};

const COLORS: &[&str] = &[
    // Pinks
    "#dc8a78", "#dd7878", "#ea76cb", "#f4b8e4", "#eba0ac", "#fcc2d7",
    // Purples
    "#ca9ee6", "#cba6f7", "#b4befe", "#c4a7e7", "#dcc6f0", "#e2d1f5",
    // Blues
    "#8caaee", "#85c1dc", "#89dceb", "#74c7ec", "#89b4fa", "#a4c8f0",
    // Teals
    "#81c8be", "#94e2d5", "#a6e3d8", "#99e9c2", "#afe9e4", "#b8ece7",
    // Greens
    "#a6d189", "#b4e197", "#c6d57e", "#c9e4a5", "#bde0a6", "#cde8b4",
    // Peaches
    "#e5c890", "#ef9f76", "#fab387", "#f9cb8c", "#f9e2af", "#fcebc4",
];

fn hash(s: &str) -> u64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    s.trim()
        .bytes()
        .fold(OFFSET, |h, b| (h ^ b as u64).wrapping_mul(PRIME))
}

/// Generates an SVG avatar from an author name
///
/// Background color is picked from the name hash; the glyph is the first
/// character of the trimmed name (works for Arabic names as well as
/// Latin). Empty names get a colored disc without a glyph.
pub fn generate_svg(name: &str, size: u32) -> String {
    let h = hash(name);
    let bg = COLORS[(h % COLORS.len() as u64) as usize];

    let initial: String = name
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 100 100"><circle cx="50" cy="50" r="50" fill="{bg}"/><text x="50" y="50" dy="0.36em" text-anchor="middle" font-family="system-ui, sans-serif" font-size="44" font-weight="600" fill="#1e1e2e" opacity="0.85">{initial}</text></svg>"##
    )
}

/// Returns the avatar as a base64 `data:` URI suitable for an img src.
pub fn data_uri(name: &str, size: u32) -> String {
    let svg = generate_svg(name, size);
    format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(svg.as_bytes())
    )
}

/// Creates an avatar img element
///
/// Uses the provided avatar URL when the testimonial carries one,
/// otherwise embeds a generated avatar as a data URI.
pub fn render(name: &str, avatar_url: Option<&str>, size: u32) -> Markup {
    match avatar_url {
        Some(url) if !url.is_empty() => html! {
            img class="avatar" src=(url) alt=(name) width=(size) height=(size);
        },
        _ => html! {
            img class="avatar" src=(data_uri(name, size)) alt=(name) width=(size) height=(size);
        },
    }
}
