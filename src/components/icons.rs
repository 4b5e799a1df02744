//! Technology icon lookup and rendering

use maud::{Markup, html};

/// Fallback icon for technologies without a dedicated entry.
const DEFAULT_ICON: &str =
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/devicon/devicon-original.svg";

/// Renders a technology icon image
///
/// Generates an `<img>` for the technology's devicon with the technology
/// name as alt text. Unknown technologies fall back to the generic icon.
///
/// # Arguments
///
/// * `tech`: Technology display name (case insensitive lookup)
/// * `size`: Rendered width and height in pixels
///
/// # Returns
///
/// Icon image markup
pub fn tech_icon(tech: &str, size: u32) -> Markup {
    html! {
        img class="tech-icon" src=(tech_icon_url(tech)) alt=(tech) width=(size) height=(size);
    }
}

/// Returns the devicon URL for a technology name
///
/// Matches lowercased technology names to icon URLs. The mapping is a
/// fixed compile-time table; unknown names return the generic devicon
/// fallback rather than a broken link.
///
/// # Arguments
///
/// * `tech`: Technology display name (case insensitive)
///
/// # Returns
///
/// Icon resource URL
pub fn tech_icon_url(tech: &str) -> &'static str {
    match tech.to_lowercase().as_str() {
        "react" | "react native" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg"
        }
        "node.js" | "nodejs" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-original.svg"
        }
        "typescript" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/typescript/typescript-original.svg"
        }
        "javascript" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/javascript/javascript-original.svg"
        }
        "python" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg"
        }
        "django" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/django/django-plain.svg"
        }
        "flask" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/flask/flask-original.svg",
        "express" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/express/express-original.svg"
        }
        "next.js" | "nextjs" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nextjs/nextjs-original.svg"
        }
        "vue" | "vue.js" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/vuejs/vuejs-original.svg"
        }
        "angular" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/angularjs/angularjs-original.svg"
        }
        "redux" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/redux/redux-original.svg",
        "graphql" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/graphql/graphql-plain.svg"
        }
        "postgresql" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/postgresql/postgresql-original.svg"
        }
        "mongodb" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mongodb/mongodb-original.svg"
        }
        "mysql" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mysql/mysql-original.svg",
        "redis" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/redis/redis-original.svg",
        "firebase" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/firebase/firebase-plain.svg"
        }
        "docker" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/docker/docker-original.svg"
        }
        "kubernetes" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/kubernetes/kubernetes-plain.svg"
        }
        "aws" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/amazonwebservices/amazonwebservices-original-wordmark.svg"
        }
        "linux" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/linux/linux-original.svg",
        "html" | "html5" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/html5/html5-original.svg"
        }
        "css" | "css3" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/css3/css3-original.svg"
        }
        "tailwind" | "tailwind css" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/tailwindcss/tailwindcss-original.svg"
        }
        "sass" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/sass/sass-original.svg",
        "git" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/git/git-original.svg",
        "github" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/github/github-original.svg"
        }
        "figma" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/figma/figma-original.svg",
        "d3.js" => "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/d3js/d3js-original.svg",
        "websocket" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/socketio/socketio-original.svg"
        }
        "stripe" => {
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/stripe/stripe-original.svg"
        }
        _ => DEFAULT_ICON,
    }
}

/// Renders a social platform icon
///
/// Maps social link icon keys from the contact content to Phosphor icon
/// classes. Unknown keys get the generic link icon.
pub fn social_icon(icon: &str) -> Markup {
    let class = match icon {
        "github" => "ph ph-github-logo",
        "linkedin" => "ph ph-linkedin-logo",
        "youtube" => "ph ph-youtube-logo",
        "twitter" | "x" => "ph ph-x-logo",
        _ => "ph ph-link",
    };

    html! {
        i class=(class) {}
    }
}
