use crate::config::HELP_TEXT;
use crate::core::capability::HistoryController;
use crate::utils::html;
use crate::utils::template;

pub fn help() -> String {
    let key = html::bold("Tab");
    let text = template::fill(HELP_TEXT, &[("key", key.as_str())]);
    format!(
        "{}{}",
        html::heading("Help"),
        html::each(html::blocks(&text), html::paragraph)
    )
}

pub fn clear(mut history: HistoryController<'_>) -> String {
    history.clear();
    format!(
        "{} {}",
        html::heading("Input Cleared"),
        html::paragraph("Input was cleared...")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_has_three_paragraphs() {
        let out = help();
        assert!(out.starts_with("<h3>Help</h3><p>"));
        assert_eq!(out.matches("<p>").count(), 3);
        assert!(out.contains("<b>Tab</b> key"));
        assert!(!out.contains("{key}"));
    }
}
