//! Markdown subset rendering for blog posts and project detail pages.
//!
//! Converts the restricted markdown dialect used by the content directory
//! into an HTML fragment for direct injection into a page body. The renderer
//! is a pure function over strings: deterministic, total, no error paths.
//! Malformed markdown degrades to best-effort output instead of failing.

/// Block-level token produced by the line tokenizer.
///
/// Inline emphasis is resolved in a second pass that runs only over
/// non-code tokens, so fenced code contents are never re-interpreted as
/// markup.
#[derive(Debug, PartialEq, Eq)]
enum Block {
    Heading { level: u8, text: String },
    CodeFence { lang: Option<String>, code: String },
    List { items: Vec<String> },
    Paragraph { text: String },
}

/// Renders markdown source to an HTML fragment.
///
/// Recognized constructs: `#`/`##`/`###` headings, triple-backtick code
/// fences with an optional language tag (emitted as a `language-*` class,
/// never used for highlighting), `- ` list items with contiguous runs
/// wrapped in one `<ul>`, blank-line separated paragraphs, and the inline
/// spans `` `code` ``, `**bold**` and `*italic*`.
///
/// All literal text is HTML-escaped before structural wrapping; the only
/// markup in the output is markup this function generates. Empty input
/// produces empty output.
pub fn render(source: &str) -> String {
    let blocks = tokenize(source);

    let mut html = String::with_capacity(source.len() + source.len() / 4);
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            html.push('\n');
        }
        match block {
            Block::Heading { level, text } => {
                html.push_str(&format!("<h{level}>{}</h{level}>", render_inline(text)));
            }
            Block::CodeFence { lang, code } => {
                match lang {
                    Some(tag) => html.push_str(&format!(
                        "<pre><code class=\"language-{}\">",
                        escape_html(tag)
                    )),
                    None => html.push_str("<pre><code>"),
                }
                html.push_str(&escape_html(code));
                html.push_str("</code></pre>");
            }
            Block::List { items } => {
                html.push_str("<ul>");
                for item in items {
                    html.push_str("\n<li>");
                    html.push_str(&render_inline(item));
                    html.push_str("</li>");
                }
                html.push_str("\n</ul>");
            }
            Block::Paragraph { text } => {
                html.push_str("<p>");
                html.push_str(&render_inline(text));
                html.push_str("</p>");
            }
        }
    }

    html
}

/// Splits source into block tokens, line by line.
///
/// Headings and list markers are anchored at the start of the raw line.
/// An opening fence swallows lines until the closing fence or end of
/// input, so an unterminated fence turns the rest of the document into
/// one code block.
fn tokenize(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut list: Vec<String> = Vec::new();

    let mut lines = source.lines();
    while let Some(line) = lines.next() {
        if let Some(fence_rest) = line.strip_prefix("```") {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_list(&mut list, &mut blocks);

            let lang = fence_rest
                .trim()
                .split_whitespace()
                .next()
                .map(str::to_string);

            let mut code_lines: Vec<&str> = Vec::new();
            for code_line in lines.by_ref() {
                if code_line.starts_with("```") {
                    break;
                }
                code_lines.push(code_line);
            }

            blocks.push(Block::CodeFence {
                lang,
                code: code_lines.join("\n"),
            });
        } else if let Some(text) = line.strip_prefix("### ") {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_list(&mut list, &mut blocks);
            blocks.push(Block::Heading {
                level: 3,
                text: text.to_string(),
            });
        } else if let Some(text) = line.strip_prefix("## ") {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_list(&mut list, &mut blocks);
            blocks.push(Block::Heading {
                level: 2,
                text: text.to_string(),
            });
        } else if let Some(text) = line.strip_prefix("# ") {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_list(&mut list, &mut blocks);
            blocks.push(Block::Heading {
                level: 1,
                text: text.to_string(),
            });
        } else if let Some(item) = line.strip_prefix("- ") {
            flush_paragraph(&mut paragraph, &mut blocks);
            list.push(item.to_string());
        } else if line.trim().is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_list(&mut list, &mut blocks);
        } else {
            flush_list(&mut list, &mut blocks);
            paragraph.push(line);
        }
    }

    flush_paragraph(&mut paragraph, &mut blocks);
    flush_list(&mut list, &mut blocks);

    blocks
}

fn flush_paragraph(paragraph: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if !paragraph.is_empty() {
        blocks.push(Block::Paragraph {
            text: paragraph.join("\n"),
        });
        paragraph.clear();
    }
}

fn flush_list(list: &mut Vec<String>, blocks: &mut Vec<Block>) {
    if !list.is_empty() {
        blocks.push(Block::List {
            items: std::mem::take(list),
        });
    }
}

/// Renders inline spans within one block of text.
///
/// Code spans are extracted first; their contents are escaped but exempt
/// from emphasis, so backticked asterisks stay literal. Emphasis is then
/// applied to the remaining segments, bold before italic so `**x**` is
/// never half-consumed by the italic rule. Emphasis does not span across
/// an inline code span.
fn render_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('`') {
        let after = &rest[start + 1..];
        match after.find('`') {
            Some(len) if len > 0 => {
                out.push_str(&render_emphasis(&escape_html(&rest[..start])));
                out.push_str("<code>");
                out.push_str(&escape_html(&after[..len]));
                out.push_str("</code>");
                rest = &after[len + 1..];
            }
            _ => {
                // unpaired or empty span: emit the backtick literally
                out.push_str(&render_emphasis(&escape_html(&rest[..start + 1])));
                rest = after;
            }
        }
    }

    out.push_str(&render_emphasis(&escape_html(rest)));
    out
}

/// Applies bold then italic emphasis to escaped text.
fn render_emphasis(text: &str) -> String {
    let bolded = wrap_emphasis(text, "**", "strong");
    wrap_emphasis(&bolded, "*", "em")
}

/// Wraps asterisk-delimited spans in the given tag.
///
/// A span is the delimiter, one or more non-asterisk characters, and the
/// delimiter again. Unpaired delimiters and empty spans pass through as
/// literal text.
fn wrap_emphasis(text: &str, delim: &str, tag: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(delim) {
        let after = &rest[start + delim.len()..];
        match after.find('*') {
            Some(len) if len > 0 && after[len..].starts_with(delim) => {
                out.push_str(&rest[..start]);
                out.push_str(&format!("<{tag}>"));
                out.push_str(&after[..len]);
                out.push_str(&format!("</{tag}>"));
                rest = &after[len + delim.len()..];
            }
            _ => {
                // no well-formed span at this position; step past one
                // asterisk and rescan
                out.push_str(&rest[..start + 1]);
                rest = &rest[start + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Escapes HTML special characters in literal text.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
