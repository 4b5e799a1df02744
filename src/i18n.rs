//! Language selection and localized chrome strings.

/// Site language.
///
/// Every page is generated once per language. Arabic output is mirrored
/// right-to-left through the `dir` attribute and the RTL stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Ar,
}

/// Both languages in generation order.
pub const LANGUAGES: [Language; 2] = [Language::En, Language::Ar];

impl Language {
    /// Returns BCP 47 language code used for the html `lang` attribute
    /// and the output subtree name.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Returns text direction for the html `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    /// Returns the other language, used by the toggle link in the navbar.
    pub fn other(self) -> Language {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// Parses a language code from CLI input.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    /// Formats an ISO `YYYY-MM-DD` date for display.
    ///
    /// English dates render as "January 15, 2024". Arabic dates render
    /// day-first with Arabic month names and Arabic-Indic digits, matching
    /// the ar-EG convention the original site displayed. Unparseable input
    /// is returned unchanged.
    pub fn format_date(self, iso: &str) -> String {
        let mut parts = iso.splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return iso.to_string();
        };

        let month_idx: usize = match month.parse::<usize>() {
            Ok(m) if (1..=12).contains(&m) => m - 1,
            _ => return iso.to_string(),
        };
        let day_num: u32 = match day.parse() {
            Ok(d) => d,
            Err(_) => return iso.to_string(),
        };

        match self {
            Language::En => {
                format!("{} {}, {}", MONTHS_EN[month_idx], day_num, year)
            }
            Language::Ar => {
                let day_ar = arabic_digits(&day_num.to_string());
                let year_ar = arabic_digits(year);
                format!("{} {} {}", day_ar, MONTHS_AR[month_idx], year_ar)
            }
        }
    }
}

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_AR: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Converts ASCII digits to Arabic-Indic digits, leaving other
/// characters untouched.
pub fn arabic_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0'..='9' => {
                // U+0660 is Arabic-Indic zero
                char::from_u32(0x0660 + (c as u32 - '0' as u32)).unwrap_or(c)
            }
            other => other,
        })
        .collect()
}

/// Returns the fixed chrome string for a UI key.
///
/// These are the strings the page chrome hard-codes per language (section
/// headings, button labels, link text). Content strings live in the content
/// directory; only strings tied to generated structure belong here. Unknown
/// keys return an empty string.
pub fn ui(lang: Language, key: &str) -> &'static str {
    use Language::{Ar, En};

    match (key, lang) {
        ("skills_title", En) => "Technical Skills",
        ("skills_title", Ar) => "المهارات التقنية",
        ("skills_subtitle", En) => "Technologies and tools I work with",
        ("skills_subtitle", Ar) => "التقنيات والأدوات التي أعمل بها",
        ("testimonials_title", En) => "What Clients Say",
        ("testimonials_title", Ar) => "آراء العملاء",
        ("testimonials_subtitle", En) => "Testimonials from satisfied clients and colleagues.",
        ("testimonials_subtitle", Ar) => "شهادات من العملاء والزملاء الراضين.",
        ("connect", En) => "Connect With Me",
        ("connect", Ar) => "تواصل معي",
        ("download_cv", En) => "Download CV",
        ("download_cv", Ar) => "تحميل السيرة الذاتية",
        ("get_in_touch", En) => "Get In Touch",
        ("get_in_touch", Ar) => "تواصل معي",
        ("projects_title", En) => "My Projects",
        ("projects_title", Ar) => "مشاريعي",
        ("projects_subtitle", En) => {
            "A collection of projects that showcase my skills and experience in web development"
        }
        ("projects_subtitle", Ar) => "مجموعة من المشاريع التي تعرض مهاراتي وخبرتي في تطوير المواقع",
        ("featured_projects", En) => "Featured Projects",
        ("featured_projects", Ar) => "مشاريع مميزة",
        ("blog_title", En) => "Blog",
        ("blog_title", Ar) => "المدونة",
        ("blog_subtitle", En) => {
            "Thoughts, tutorials, and insights about web development and technology"
        }
        ("blog_subtitle", Ar) => "أفكار ودروس ورؤى حول تطوير المواقع والتكنولوجيا",
        ("read_more", En) => "Read More",
        ("read_more", Ar) => "اقرأ المزيد",
        ("read", En) => "Read",
        ("read", Ar) => "اقرأ",
        ("back_to_blog", En) => "Back to Blog",
        ("back_to_blog", Ar) => "العودة للمدونة",
        ("back_to_projects", En) => "Back to Projects",
        ("back_to_projects", Ar) => "العودة للمشاريع",
        ("view_code", En) => "View Code",
        ("view_code", Ar) => "عرض الكود",
        ("live_demo", En) => "Live Demo",
        ("live_demo", Ar) => "العرض المباشر",
        ("not_found_title", En) => "Page Not Found",
        ("not_found_title", Ar) => "الصفحة غير موجودة",
        ("not_found_body", En) => "The page you're looking for doesn't exist.",
        ("not_found_body", Ar) => "الصفحة التي تبحث عنها غير موجودة.",
        ("back_home", En) => "Back to Home",
        ("back_home", Ar) => "العودة للرئيسية",
        ("rights", En) => "All rights reserved.",
        ("rights", Ar) => "جميع الحقوق محفوظة.",
        ("footer_strapline", En) => "Building the future, one line of code at a time.",
        ("footer_strapline", Ar) => "بناء المستقبل، سطر برمجي واحد في كل مرة.",
        _ => "",
    }
}

/// Returns the display label for a project category filter tab.
///
/// Known category keys map to fixed labels; unknown keys fall back to the
/// raw key so new categories in the content render without code changes.
pub fn category_label(lang: Language, key: &str) -> String {
    use Language::{Ar, En};

    let label = match (key, lang) {
        ("all", En) => "All Projects",
        ("all", Ar) => "جميع المشاريع",
        ("frontend", En) => "Frontend",
        ("frontend", Ar) => "الواجهة الأمامية",
        ("fullstack", En) => "Full Stack",
        ("fullstack", Ar) => "التطوير الشامل",
        ("mobile", En) => "Mobile",
        ("mobile", Ar) => "تطبيقات الجوال",
        _ => return key.to_string(),
    };

    label.to_string()
}
