//! Sitemap generation
//!
//! Emits `sitemap.xml` covering every generated page in both languages,
//! with hreflang alternate links tying the language variants together.

use crate::content::{Content, categories};
use crate::i18n::LANGUAGES;
use crate::util::{absolute_url, today_iso};

/// One sitemap entry before language expansion.
struct PageRef {
    /// Page path below the language root
    path: String,
    priority: &'static str,
    changefreq: &'static str,
}

/// Generates the sitemap XML document
///
/// Every page appears once per language with its canonical URL, the
/// generation date as lastmod, and alternate links to both language
/// variants.
///
/// # Arguments
///
/// * `content`: Loaded content, used to enumerate project and post pages
/// * `base_url`: Public base URL of the deployed site
///
/// # Returns
///
/// Complete XML document as a string
pub fn generate(content: &Content, base_url: &str) -> String {
    let today = today_iso();
    let pages = site_pages(content);

    let mut xml = String::with_capacity(pages.len() * 400);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for page in &pages {
        for lang in LANGUAGES {
            let loc = absolute_url(base_url, &format!("{}/{}", lang.code(), page.path));
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{loc}</loc>\n"));
            xml.push_str(&format!("    <lastmod>{today}</lastmod>\n"));
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                page.changefreq
            ));
            xml.push_str(&format!("    <priority>{}</priority>\n", page.priority));
            for alt in LANGUAGES {
                let href = absolute_url(base_url, &format!("{}/{}", alt.code(), page.path));
                xml.push_str(&format!(
                    "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{href}\"/>\n",
                    alt.code()
                ));
            }
            xml.push_str("  </url>\n");
        }
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Enumerates every page path the generator writes below a language root.
fn site_pages(content: &Content) -> Vec<PageRef> {
    let mut pages = vec![
        PageRef {
            path: "index.html".to_string(),
            priority: "1.0",
            changefreq: "weekly",
        },
        PageRef {
            path: "projects/index.html".to_string(),
            priority: "0.8",
            changefreq: "weekly",
        },
        PageRef {
            path: "blog/index.html".to_string(),
            priority: "0.8",
            changefreq: "daily",
        },
    ];

    for category in categories(&content.projects.en) {
        pages.push(PageRef {
            path: format!("projects/{category}.html"),
            priority: "0.8",
            changefreq: "weekly",
        });
    }

    for project in &content.projects.en {
        pages.push(PageRef {
            path: format!("projects/{}/index.html", project.slug),
            priority: "0.7",
            changefreq: "monthly",
        });
    }

    for post in &content.posts {
        pages.push(PageRef {
            path: format!("blog/{}/index.html", post.slug),
            priority: "0.6",
            changefreq: "monthly",
        });
    }

    pages
}
