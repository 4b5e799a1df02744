//! Frontmatter parsing for markdown content files.
//!
//! Blog posts carry a `---` delimited header of `key: value` lines ahead
//! of the markdown body. Values are plain strings; double quotes are
//! stripped. Localized fields use an `_ar` suffix (`title_ar`) and fall
//! back to the base key when the Arabic variant is absent.

use std::collections::HashMap;

use crate::i18n::Language;

/// Parsed frontmatter header fields.
#[derive(Debug, Default, Clone)]
pub struct Frontmatter {
    fields: HashMap<String, String>,
}

impl Frontmatter {
    /// Returns the raw value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns the value for a key in the given language.
    ///
    /// Arabic looks up `<key>_ar` first and falls back to the base key,
    /// so partially translated headers still render.
    pub fn localized(&self, key: &str, lang: Language) -> Option<&str> {
        if lang == Language::Ar
            && let Some(value) = self.get(&format!("{key}_ar"))
        {
            return Some(value);
        }
        self.get(key)
    }

    /// Number of parsed fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Splits a markdown document into frontmatter and body.
///
/// The header must open the document with `---` on the first line and
/// close with a `---` line. Returns `None` when no header is present;
/// callers decide whether a headerless document is an error.
pub fn parse(source: &str) -> Option<(Frontmatter, &str)> {
    let after_open = source.strip_prefix("---\n")?;
    let close = after_open.find("\n---\n")?;

    let header = &after_open[..close];
    let body = &after_open[close + "\n---\n".len()..];

    let mut fields = HashMap::new();
    for line in header.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        // quotes are decoration in this dialect, not syntax
        let value = value.trim().replace('"', "");
        fields.insert(key.to_string(), value);
    }

    Some((Frontmatter { fields }, body))
}
