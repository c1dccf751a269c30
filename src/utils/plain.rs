//! Conversion of interaction HTML fragments to terminal text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9]*)[^>]*>").expect("valid tag pattern"));

static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").expect("valid blank-line pattern"));

/// Render an HTML fragment as plain terminal text.
///
/// Headings become `## title` lines, paragraphs are separated by blank lines,
/// list items become `  - item` lines and bold text is wrapped in `*`.
/// Unknown tags are dropped, their content kept.
pub fn to_plain_text(html: &str) -> String {
    let text = TAG.replace_all(html, |caps: &Captures<'_>| {
        let closing = !caps[1].is_empty();
        match (caps[2].to_ascii_lowercase().as_str(), closing) {
            ("h1" | "h2" | "h3", false) => "\n## ",
            ("h1" | "h2" | "h3", true) => "\n\n",
            ("p", false) => "",
            ("p", true) => "\n\n",
            ("ul" | "ol", false) => "",
            ("ul" | "ol", true) => "\n",
            ("li", false) => "  - ",
            ("li", true) => "\n",
            ("br", _) => "\n",
            ("b" | "strong", _) => "*",
            _ => "",
        }
    });
    BLANK_RUN.replace_all(&text, "\n\n").trim().to_string()
}
