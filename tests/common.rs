//! Shared test utilities for integration tests.
//!
//! Provides helper functions for scaffolding a temporary content
//! directory with the JSON and markdown files the generator expects.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SITE_JSON: &str = r#"{
  "en": {
    "name": "John Doe",
    "initials": "JD",
    "tagline": "Full Stack Developer",
    "bio": "I build things for the web.",
    "portrait": "https://example.com/me.jpg",
    "description": "Portfolio of John Doe",
    "cv": "/cv.pdf"
  },
  "ar": {
    "name": "جون دو",
    "initials": "JD",
    "tagline": "مطور ويب شامل",
    "bio": "أبني أشياء للويب.",
    "portrait": "https://example.com/me.jpg",
    "description": "معرض أعمال جون دو"
  }
}"#;

const NAV_JSON: &str = r##"{
  "en": [
    {"href": "#skills", "text": "Skills"},
    {"href": "/projects", "text": "Projects"},
    {"href": "/blog", "text": "Blog"},
    {"href": "#contact", "text": "Contact"}
  ],
  "ar": [
    {"href": "#skills", "text": "المهارات"},
    {"href": "/projects", "text": "المشاريع"},
    {"href": "/blog", "text": "المدونة"},
    {"href": "#contact", "text": "تواصل"}
  ]
}"##;

const SKILLS_JSON: &str = r#"{
  "en": [
    {"group": "Frontend", "icons": ["React", "TypeScript", "CSS"]},
    {"group": "Backend", "icons": ["Node.js", "PostgreSQL"]}
  ],
  "ar": [
    {"group": "الواجهة الأمامية", "icons": ["React", "TypeScript", "CSS"]},
    {"group": "الواجهة الخلفية", "icons": ["Node.js", "PostgreSQL"]}
  ]
}"#;

const EDUCATION_JSON: &str = r#"{
  "en": {
    "title": "Education",
    "subtitle": "My educational background.",
    "entries": [{
      "degree": "Bachelor of Computer Science",
      "institution": "Cairo University",
      "location": "Cairo, Egypt",
      "period": "2018 - 2022",
      "description": "Graduated with honors."
    }]
  },
  "ar": {
    "title": "التعليم",
    "subtitle": "خلفيتي التعليمية.",
    "entries": [{
      "degree": "بكالوريوس علوم الحاسوب",
      "institution": "جامعة القاهرة",
      "location": "القاهرة، مصر",
      "period": "2018 - 2022",
      "description": "تخرجت بامتياز."
    }]
  }
}"#;

const EXPERIENCE_JSON: &str = r#"{
  "en": {
    "title": "Experience",
    "subtitle": "My professional journey.",
    "entries": [{
      "position": "Senior Frontend Developer",
      "company": "TechCorp Solutions",
      "location": "Cairo, Egypt",
      "period": "2023 - Present",
      "description": "Leading frontend development."
    }]
  },
  "ar": {
    "title": "الخبرة",
    "subtitle": "رحلتي المهنية.",
    "entries": [{
      "position": "مطور واجهات أمامية أول",
      "company": "TechCorp Solutions",
      "location": "القاهرة، مصر",
      "period": "2023 - الحاضر",
      "description": "قيادة تطوير الواجهات الأمامية."
    }]
  }
}"#;

const PROJECTS_JSON: &str = r#"{
  "en": [
    {
      "slug": "ecommerce-platform",
      "name": "E-Commerce Platform",
      "summary": "A full-featured online store.",
      "tech": ["React", "Node.js", "PostgreSQL"],
      "category": "fullstack",
      "cover": "https://example.com/shop.jpg",
      "repo": "https://github.com/x/shop",
      "demo": "https://shop.example.com"
    },
    {
      "slug": "habit-tracker",
      "name": "Habit Tracker",
      "summary": "A mobile habit tracking app.",
      "tech": ["React Native", "Firebase"],
      "category": "mobile",
      "cover": "https://example.com/tracker.jpg"
    }
  ],
  "ar": [
    {
      "slug": "ecommerce-platform",
      "name": "منصة تجارة إلكترونية",
      "summary": "متجر إلكتروني متكامل.",
      "tech": ["React", "Node.js", "PostgreSQL"],
      "category": "fullstack",
      "cover": "https://example.com/shop.jpg",
      "repo": "https://github.com/x/shop",
      "demo": "https://shop.example.com"
    },
    {
      "slug": "habit-tracker",
      "name": "متتبع العادات",
      "summary": "تطبيق جوال لتتبع العادات.",
      "tech": ["React Native", "Firebase"],
      "category": "mobile",
      "cover": "https://example.com/tracker.jpg"
    }
  ]
}"#;

const TESTIMONIALS_JSON: &str = r#"{
  "en": [
    {"text": "Outstanding work, delivered on time.", "name": "Sarah Johnson",
     "role": "CTO at StartupXYZ", "avatar": "https://example.com/sarah.jpg"},
    {"text": "A pleasure to work with.", "name": "Omar Khaled", "role": "Product Manager"}
  ],
  "ar": [
    {"text": "عمل متميز وتسليم في الموعد.", "name": "سارة جونسون",
     "role": "مديرة التقنية في StartupXYZ", "avatar": "https://example.com/sarah.jpg"},
    {"text": "من دواعي سروري العمل معه.", "name": "عمر خالد", "role": "مدير منتج"}
  ]
}"#;

const CONTACT_JSON: &str = r#"{
  "en": {
    "title": "Get In Touch",
    "subtitle": "Have a project in mind? Let's talk.",
    "form": {"name": "Name", "email": "Email", "message": "Message", "submit": "Send Message"},
    "social": [
      {"name": "GitHub", "url": "https://github.com/johndoe", "icon": "github"},
      {"name": "LinkedIn", "url": "https://linkedin.com/in/johndoe", "icon": "linkedin"}
    ]
  },
  "ar": {
    "title": "تواصل معي",
    "subtitle": "لديك مشروع؟ لنتحدث.",
    "form": {"name": "الاسم", "email": "البريد الإلكتروني", "message": "الرسالة", "submit": "إرسال الرسالة"},
    "social": [
      {"name": "GitHub", "url": "https://github.com/johndoe", "icon": "github"},
      {"name": "LinkedIn", "url": "https://linkedin.com/in/johndoe", "icon": "linkedin"}
    ]
  }
}"#;

const POST_NEW: &str = "---\n\
title: Getting Started with React\n\
title_ar: البدء مع React\n\
excerpt: Learn the fundamentals of React.\n\
excerpt_ar: تعلم أساسيات React.\n\
date: 2024-01-15\n\
readTime: 5 min read\n\
readTime_ar: 5 دقائق قراءة\n\
category: Web Development\n\
category_ar: تطوير الويب\n\
cover: https://example.com/react.jpg\n\
---\n\
# Introduction\n\
\n\
React is a **popular** library.\n\
\n\
```js\n\
const x = 1;\n\
```\n\
\n\
- components\n\
- hooks\n";

const POST_OLD: &str = "---\n\
title: Responsive Design Tips\n\
date: 2024-01-05\n\
readTime: 6 min read\n\
category: CSS\n\
---\n\
## Media Queries\n\
\n\
Use `min-width` breakpoints.\n";

const PROJECT_DETAIL_MD: &str = "## Overview\n\
\n\
Built with *modern* tooling.\n\
\n\
### Stack\n\
\n\
- React\n\
- Node.js\n";

/// Creates a temporary content directory with a full bilingual content
/// set: all JSON files, two blog posts and one project detail body.
///
/// # Returns
///
/// Temporary directory containing the scaffolded content
///
/// # Errors
///
/// Returns error if directory creation or file writes fail
pub fn create_test_content() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let path = dir.path();

    write_content_files(path)?;

    Ok(dir)
}

/// Writes the standard content files into an existing directory.
///
/// # Arguments
///
/// * `path`: Directory to populate
///
/// # Errors
///
/// Returns error if any write fails
pub fn write_content_files(path: &Path) -> Result<()> {
    fs::write(path.join("site.json"), SITE_JSON)?;
    fs::write(path.join("nav.json"), NAV_JSON)?;
    fs::write(path.join("skills.json"), SKILLS_JSON)?;
    fs::write(path.join("education.json"), EDUCATION_JSON)?;
    fs::write(path.join("experience.json"), EXPERIENCE_JSON)?;
    fs::write(path.join("projects.json"), PROJECTS_JSON)?;
    fs::write(path.join("testimonials.json"), TESTIMONIALS_JSON)?;
    fs::write(path.join("contact.json"), CONTACT_JSON)?;

    let blog_dir = path.join("blog");
    fs::create_dir_all(&blog_dir)?;
    fs::write(blog_dir.join("getting-started-with-react.md"), POST_NEW)?;
    fs::write(blog_dir.join("responsive-design-tips.md"), POST_OLD)?;

    let projects_dir = path.join("projects");
    fs::create_dir_all(&projects_dir)?;
    fs::write(projects_dir.join("ecommerce-platform.md"), PROJECT_DETAIL_MD)?;

    Ok(())
}
