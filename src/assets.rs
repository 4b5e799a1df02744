//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const NAV: &str = include_str!("../assets/components/nav.css");
const CARDS: &str = include_str!("../assets/components/cards.css");
const FORMS: &str = include_str!("../assets/components/forms.css");

const HOME_PAGE: &str = include_str!("../assets/page-home.css");
const PROJECTS_PAGE: &str = include_str!("../assets/page-projects.css");
const BLOG_PAGE: &str = include_str!("../assets/page-blog.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");
const RTL: &str = include_str!("../assets/rtl.css");

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(
        assets_dir,
        "home.css",
        &[BASE, NAV, CARDS, FORMS, HOME_PAGE],
    )?;
    write_bundled(
        assets_dir,
        "projects.css",
        &[BASE, NAV, CARDS, PROJECTS_PAGE],
    )?;
    write_bundled(assets_dir, "blog.css", &[BASE, NAV, CARDS, BLOG_PAGE])?;
    write_bundled(assets_dir, "markdown.css", &[MARKDOWN])?;
    write_bundled(assets_dir, "rtl.css", &[RTL])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
