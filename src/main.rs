use anyhow::{Context, Result};
use maud::{DOCTYPE, Markup, html};
use nujum::pages::{PageContext, blog, blog_post, home, not_found, project_detail, projects};
use nujum::{Config, LANGUAGES, Language, categories};
use std::fs;
use std::path::Path;

/// Writes one rendered page, creating parent directories as needed.
///
/// # Arguments
///
/// * `path`: Output file path
/// * `markup`: Rendered page markup
///
/// # Errors
///
/// Returns error if directory creation or the write fails
fn write_page(path: &Path, markup: Markup) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, markup.into_string())
        .with_context(|| format!("Failed to write page {}", path.display()))?;
    Ok(())
}

/// Builds the root redirect stub pointing at the default language tree.
///
/// The site root has no content of its own; a meta refresh sends
/// visitors to `<lang>/index.html` immediately, with a plain link as
/// fallback for clients that ignore the refresh.
fn redirect_page(lang: Language) -> Markup {
    let target = format!("{}/index.html", lang.code());

    html! {
        (DOCTYPE)
        html lang=(lang.code()) {
            head {
                meta charset="utf-8";
                meta http-equiv="refresh" content=(format!("0; url={target}"));
                title { "Redirecting…" }
            }
            body {
                p { a href=(target) { (target) } }
            }
        }
    }
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let content = nujum::load_content(&config.content).context("Failed to load content")?;

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    nujum::write_css_assets(&assets_dir).context("Failed to write CSS assets")?;

    let default_lang = config.default_language()?;

    for lang in LANGUAGES {
        let ctx = PageContext {
            lang,
            content: &content,
            base_url: &config.base_url,
        };
        let lang_dir = config.output.join(lang.code());

        let home_path = lang_dir.join("index.html");
        write_page(&home_path, home::generate(ctx))?;
        println!("Generated: {}", home_path.display());

        let gallery_path = lang_dir.join("projects").join("index.html");
        write_page(&gallery_path, projects::generate(ctx, None))?;
        println!("Generated: {}", gallery_path.display());

        let project_list = content.projects.get(lang);

        let mut category_count = 0;
        for category in categories(project_list) {
            let path = lang_dir.join("projects").join(format!("{category}.html"));
            write_page(&path, projects::generate(ctx, Some(&category)))?;
            category_count += 1;
        }

        let mut detail_count = 0;
        for project in project_list {
            let path = lang_dir
                .join("projects")
                .join(&project.slug)
                .join("index.html");
            write_page(&path, project_detail::generate(ctx, project))?;
            detail_count += 1;
        }
        println!(
            "Generated {} project pages ({} categories) for {}",
            detail_count,
            category_count,
            lang.code()
        );

        let blog_path = lang_dir.join("blog").join("index.html");
        write_page(&blog_path, blog::generate(ctx))?;
        println!("Generated: {}", blog_path.display());

        let mut post_count = 0;
        for post in &content.posts {
            let path = lang_dir.join("blog").join(&post.slug).join("index.html");
            write_page(&path, blog_post::generate(ctx, post))?;
            post_count += 1;
        }
        println!("Generated {} blog posts for {}", post_count, lang.code());
    }

    let default_ctx = PageContext {
        lang: default_lang,
        content: &content,
        base_url: &config.base_url,
    };

    let not_found_path = config.output.join("404.html");
    write_page(&not_found_path, not_found::generate(default_ctx))?;
    println!("Generated: {}", not_found_path.display());

    let root_path = config.output.join("index.html");
    write_page(&root_path, redirect_page(default_lang))?;
    println!("Generated: {}", root_path.display());

    let sitemap_path = config.output.join("sitemap.xml");
    fs::write(
        &sitemap_path,
        nujum::generate_sitemap(&content, &config.base_url),
    )
    .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;
    println!("Generated: {}", sitemap_path.display());

    if config.open {
        let index = config
            .output
            .join(default_lang.code())
            .join("index.html");
        if let Err(e) = open::that(&index) {
            eprintln!("Warning: Failed to open {}: {}", index.display(), e);
        }
    }

    Ok(())
}
