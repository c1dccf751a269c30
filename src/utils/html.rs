//! Builders for the HTML fragments returned by interactions.
//!
//! Fragments are plain strings meant for direct display. Nothing here escapes
//! its arguments; safe rendering is the host's job.

pub fn heading(text: &str) -> String {
    format!("<h3>{}</h3>", text)
}

pub fn paragraph(text: &str) -> String {
    format!("<p>{}</p>", text)
}

pub fn bold(text: &str) -> String {
    format!("<b>{}</b>", text)
}

pub fn italic(text: &str) -> String {
    format!("<i>{}</i>", text)
}

/// Unordered list, optionally preceded by a title paragraph.
pub fn list<I, S>(title: &str, items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items: String = items
        .into_iter()
        .map(|item| format!("<li>{}</li>", item.as_ref()))
        .collect();
    let title = if title.is_empty() {
        String::new()
    } else {
        paragraph(title)
    };
    format!("{}<ul>{}</ul>", title, items)
}

/// Wrap each item with `wrap` and concatenate.
pub fn each<I, S>(items: I, wrap: fn(&str) -> String) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items.into_iter().map(|item| wrap(item.as_ref())).collect()
}

/// Split text on blank lines into trimmed, non-empty blocks.
pub fn blocks(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .collect()
}
