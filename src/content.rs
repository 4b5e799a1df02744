//! Content directory loading.
//!
//! The content directory holds the portfolio's data as JSON files with an
//! `en`/`ar` object per file, markdown blog posts under `blog/`, and
//! long-form project bodies under `projects/`. This module defines the
//! typed model for that data and loads it into memory in one pass.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::i18n::Language;
use crate::markdown::{Frontmatter, parse_frontmatter};

/// A value carried in both site languages.
#[derive(Debug, Clone, Deserialize)]
pub struct Localized<T> {
    pub en: T,
    pub ar: T,
}

impl<T> Localized<T> {
    /// Returns the variant for the given language.
    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

/// Site-wide identity: hero copy, portrait, SEO description.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub tagline: String,
    pub bio: String,
    #[serde(default)]
    pub initials: String,
    #[serde(default)]
    pub portrait: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cv: Option<String>,
}

/// Navigation entry. Anchor hrefs (`#skills`) point into the home page;
/// path hrefs (`/projects`) point at generated section indexes.
#[derive(Debug, Clone, Deserialize)]
pub struct NavItem {
    pub href: String,
    pub text: String,
}

/// Named group of technologies shown in the skills grid.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    pub group: String,
    pub icons: Vec<String>,
}

/// Timeline section header plus its entries.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineSection<T> {
    pub title: String,
    pub subtitle: String,
    pub entries: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceEntry {
    pub position: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: String,
}

/// Portfolio project record.
///
/// The `category` field is a language-independent key (`frontend`,
/// `fullstack`, `mobile`, ...) shared by both language variants so the
/// gallery filter tabs line up across languages.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub slug: String,
    pub name: String,
    pub summary: String,
    pub tech: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactInfo {
    pub title: String,
    pub subtitle: String,
    pub form: ContactForm,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submit: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

/// Blog post: parsed frontmatter plus raw markdown body.
///
/// The body is shared across languages; frontmatter fields localize
/// through `_ar` suffixed keys.
#[derive(Debug, Clone)]
pub struct BlogPost {
    pub slug: String,
    pub front: Frontmatter,
    pub body: String,
}

impl BlogPost {
    pub fn title(&self, lang: Language) -> &str {
        self.front.localized("title", lang).unwrap_or(&self.slug)
    }

    pub fn excerpt(&self, lang: Language) -> &str {
        self.front.localized("excerpt", lang).unwrap_or_default()
    }

    pub fn category(&self, lang: Language) -> &str {
        self.front.localized("category", lang).unwrap_or_default()
    }

    pub fn read_time(&self, lang: Language) -> &str {
        self.front.localized("readTime", lang).unwrap_or_default()
    }

    /// ISO date used for sorting and display formatting.
    pub fn date(&self) -> &str {
        self.front.get("date").unwrap_or_default()
    }

    pub fn cover(&self) -> Option<&str> {
        self.front.get("cover")
    }
}

/// Everything the generator needs, loaded once up front.
#[derive(Debug, Clone)]
pub struct Content {
    pub site: Localized<SiteInfo>,
    pub nav: Localized<Vec<NavItem>>,
    pub skills: Localized<Vec<SkillGroup>>,
    pub education: Localized<TimelineSection<EducationEntry>>,
    pub experience: Localized<TimelineSection<ExperienceEntry>>,
    pub projects: Localized<Vec<Project>>,
    pub testimonials: Localized<Vec<Testimonial>>,
    pub contact: Localized<ContactInfo>,
    pub posts: Vec<BlogPost>,
    pub project_details: HashMap<String, String>,
}

impl Content {
    /// Returns the long-form markdown body for a project slug, if any.
    pub fn project_body(&self, slug: &str) -> Option<&str> {
        self.project_details.get(slug).map(String::as_str)
    }
}

/// Loads the full content directory.
///
/// # Arguments
///
/// * `dir`: Content directory root
///
/// # Errors
///
/// Returns error if a required JSON file is missing or malformed. Blog
/// posts without frontmatter are skipped with a warning rather than
/// failing the whole run.
pub fn load(dir: &Path) -> Result<Content> {
    Ok(Content {
        site: load_json(dir, "site.json")?,
        nav: load_json(dir, "nav.json")?,
        skills: load_json(dir, "skills.json")?,
        education: load_json(dir, "education.json")?,
        experience: load_json(dir, "experience.json")?,
        projects: load_json(dir, "projects.json")?,
        testimonials: load_json(dir, "testimonials.json")?,
        contact: load_json(dir, "contact.json")?,
        posts: load_posts(&dir.join("blog"))?,
        project_details: load_project_details(&dir.join("projects"))?,
    })
}

fn load_json<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T> {
    let path = dir.join(name);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Loads blog posts from `blog/*.md`, newest first.
fn load_posts(blog_dir: &Path) -> Result<Vec<BlogPost>> {
    let mut posts = Vec::new();

    if !blog_dir.is_dir() {
        return Ok(posts);
    }

    for entry in fs::read_dir(blog_dir).context("Failed to read blog directory")? {
        let path = entry.context("Failed to read blog directory entry")?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
            eprintln!("Warning: Skipping blog file with invalid name: {}", path.display());
            continue;
        };

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read blog post: {}", path.display()))?;

        match parse_frontmatter(&raw) {
            Some((front, body)) => posts.push(BlogPost {
                slug: slug.to_string(),
                front,
                body: body.to_string(),
            }),
            None => {
                eprintln!(
                    "Warning: Skipping blog post without frontmatter: {}",
                    path.display()
                );
            }
        }
    }

    // ISO dates sort lexicographically
    posts.sort_by(|a, b| b.date().cmp(a.date()).then_with(|| a.slug.cmp(&b.slug)));

    Ok(posts)
}

/// Loads long-form project bodies from `projects/*.md`, keyed by slug.
fn load_project_details(projects_dir: &Path) -> Result<HashMap<String, String>> {
    let mut details = HashMap::new();

    if !projects_dir.is_dir() {
        return Ok(details);
    }

    for entry in fs::read_dir(projects_dir).context("Failed to read projects directory")? {
        let path = entry
            .context("Failed to read projects directory entry")?
            .path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let body = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read project detail: {}", path.display()))?;
        details.insert(slug.to_string(), body);
    }

    Ok(details)
}

/// Returns distinct project categories in first-seen order.
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut seen = Vec::new();
    for project in projects {
        if !seen.contains(&project.category) {
            seen.push(project.category.clone());
        }
    }
    seen
}
