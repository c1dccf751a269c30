//! Suggestions and Tab completion for partial input.
//!
//! The input buffer is split into *context* tokens and an optional *partial*
//! word. When the buffer is empty or ends in whitespace every token is
//! context; otherwise the last token is the word still being typed.
//!
//! Context tokens are resolved against the command tree. The candidates are
//! the children of the deepest resolved entity, narrowed by a filter word:
//! the first context token that failed to resolve, or else the partial word.
//! A filter that matches nothing shows every candidate.

use crate::config::SUGGESTION_HEADING;
use crate::core::parser::{tokenize, InputParser};
use crate::models::Entity;
use crate::utils::html;

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AutocompleteResult {
    /// Single match - replace the buffer with this value.
    Single(String),
    /// Multiple matches - (buffer extended to their common prefix, all names).
    Multiple(String, Vec<String>),
    /// Nothing to complete.
    None,
}

/// Where the word narrowing the candidate list came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterSource {
    /// No filter word; all candidates are listed.
    None,
    /// The partial word at the end of the buffer.
    Partial,
    /// A context token that failed to resolve.
    Unresolved,
}

/// Candidate next-entities for a buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Suggestions<'w> {
    /// Resolved context entities, root-to-leaf.
    pub ancestors: Vec<&'w Entity>,
    /// Entities to list, in declaration order.
    pub candidates: Vec<&'w Entity>,
    /// The word used to narrow the candidates, if any.
    pub filter: Option<String>,
    pub source: FilterSource,
    /// `candidates` are genuine prefix matches of `filter` (not the fallback).
    pub matched: bool,
}

// ============================================================================
// Public API
// ============================================================================

/// Compute the suggestions for `input` against the children of `root`.
pub fn suggest<'w>(root: &'w Entity, input: &str) -> Suggestions<'w> {
    let mut tokens = tokenize(input);
    let ends_open = input.is_empty() || input.ends_with(char::is_whitespace);
    let partial = if ends_open { None } else { tokens.pop() };

    let parsed = InputParser::new(root).resolve(tokens);
    let ancestors = parsed.entities(false);
    let parent = ancestors.last().copied().unwrap_or(root);

    let (filter, source) = match (parsed.unconsumed(), partial) {
        (Some(unresolved), _) => (Some(unresolved.to_string()), FilterSource::Unresolved),
        (None, Some(partial)) => (Some(partial), FilterSource::Partial),
        (None, None) => (None, FilterSource::None),
    };

    let all: Vec<&Entity> = parent.children().iter().collect();
    let matching: Vec<&Entity> = match &filter {
        Some(word) => all
            .iter()
            .copied()
            .filter(|c| c.name().starts_with(word.as_str()))
            .collect(),
        None => Vec::new(),
    };

    let matched = !matching.is_empty();
    let candidates = if matched { matching } else { all };

    Suggestions {
        ancestors,
        candidates,
        filter,
        source,
        matched,
    }
}

/// Render suggestions as the HTML fragment shown to the player.
pub fn render(suggestions: &Suggestions<'_>) -> String {
    let path: String = suggestions
        .ancestors
        .iter()
        .map(|a| format!("{} ", html::italic(a.name())))
        .collect();

    let items = suggestions.candidates.iter().map(|c| {
        format!(
            "{}{}: {}",
            path,
            html::bold(c.name()),
            c.description()
        )
    });

    format!(
        "\n{}\n{}\n",
        html::heading(SUGGESTION_HEADING),
        html::list("", items)
    )
}

/// Tab completion of the input buffer.
///
/// Only a partial word with genuine matches is completed. A single match
/// completes to the canonical path plus the name; several matches extend the
/// buffer to their common prefix. The completed word stays the partial word,
/// so suggesting again on the result lists the same candidates.
pub fn complete(suggestions: &Suggestions<'_>, input: &str) -> AutocompleteResult {
    if suggestions.source != FilterSource::Partial || !suggestions.matched {
        return AutocompleteResult::None;
    }
    let Some(filter) = &suggestions.filter else {
        return AutocompleteResult::None;
    };

    let path: String = suggestions
        .ancestors
        .iter()
        .map(|a| format!("{} ", a.name()))
        .collect();
    let names: Vec<String> = suggestions
        .candidates
        .iter()
        .map(|c| c.name().to_string())
        .collect();

    match names.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(format!("{}{}", path, names[0])),
        _ => {
            let common = find_common_prefix(&names);
            let buffer = if common.len() > filter.len() {
                format!("{}{}", path, common)
            } else {
                input.to_string()
            };
            AutocompleteResult::Multiple(buffer, names)
        }
    }
}

/// Ghost-text hint while typing: the suffix completing the partial word to
/// the first candidate that extends it.
pub fn get_hint(root: &Entity, input: &str) -> Option<String> {
    let suggestions = suggest(root, input);
    if suggestions.source != FilterSource::Partial || !suggestions.matched {
        return None;
    }
    let partial = suggestions.filter.as_deref()?;
    suggestions
        .candidates
        .iter()
        .find(|c| c.name() != partial)
        .map(|c| c.name()[partial.len()..].to_string())
}

// ============================================================================
// Utilities
// ============================================================================

/// Find the common prefix of multiple strings (case-sensitive, char-aligned).
fn find_common_prefix(strings: &[String]) -> String {
    let Some(first) = strings.first() else {
        return String::new();
    };

    let mut prefix_len = first.len();
    for s in &strings[1..] {
        prefix_len = first
            .char_indices()
            .zip(s.chars())
            .take_while(|((i, a), b)| *i < prefix_len && a == b)
            .map(|((i, a), _)| i + a.len_utf8())
            .last()
            .unwrap_or(0);
    }

    first[..prefix_len].to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ROOT_ENTITY_ID;
    use crate::models::{EntityKind, EntityStore, SerializedEntity, World};

    fn world() -> World {
        let records = vec![
            SerializedEntity::new(ROOT_ENTITY_ID, EntityKind::Misc, "", "")
                .with_children(["help", "status", "stash", "internet"]),
            SerializedEntity::new("help", EntityKind::Cli, "help", "get help"),
            SerializedEntity::new("status", EntityKind::Cli, "status", "what is up"),
            SerializedEntity::new("stash", EntityKind::Misc, "stash", "hidden things"),
            SerializedEntity::new("internet", EntityKind::Misc, "internet", "browse")
                .with_children(["site", "shop"]),
            SerializedEntity::new("site", EntityKind::Misc, "self-sufficiency", "website"),
            SerializedEntity::new("shop", EntityKind::Misc, "seeds", "seed shop"),
        ];
        let store: EntityStore = records.into_iter().map(|r| (r.id.clone(), r)).collect();
        World::materialize(&store)
    }

    fn candidate_names(s: &Suggestions<'_>) -> Vec<String> {
        s.candidates.iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn test_empty_input_lists_top_level() {
        let world = world();
        let s = suggest(world.root(), "");
        assert_eq!(candidate_names(&s), vec!["help", "status", "stash", "internet"]);
        assert_eq!(s.source, FilterSource::None);
        assert!(!s.matched);
    }

    #[test]
    fn test_partial_word_filters_siblings() {
        let world = world();
        let s = suggest(world.root(), "st");
        assert_eq!(candidate_names(&s), vec!["status", "stash"]);
        assert!(s.ancestors.is_empty());
    }

    #[test]
    fn test_no_match_falls_back_to_all() {
        let world = world();
        let s = suggest(world.root(), "test");
        assert_eq!(candidate_names(&s).len(), 4);
        assert!(!s.matched);
    }

    #[test]
    fn test_trailing_space_descends() {
        let world = world();
        let s = suggest(world.root(), "internet ");
        assert_eq!(candidate_names(&s), vec!["self-sufficiency", "seeds"]);
        assert_eq!(s.ancestors.len(), 1);
    }

    #[test]
    fn test_unresolved_context_token_shows_all_children() {
        let world = world();
        let s = suggest(world.root(), "internet sx y");
        assert_eq!(s.source, FilterSource::Unresolved);
        assert_eq!(s.filter.as_deref(), Some("sx"));
        assert_eq!(candidate_names(&s), vec!["self-sufficiency", "seeds"]);
        assert_eq!(complete(&s, "internet sx y"), AutocompleteResult::None);
    }

    #[test]
    fn test_leaf_has_no_candidates() {
        let world = world();
        let s = suggest(world.root(), "help ");
        assert!(s.candidates.is_empty());
        assert!(render(&s).contains("<ul></ul>"));
    }

    #[test]
    fn test_render_top_level() {
        let world = world();
        let html = render(&suggest(world.root(), "he"));
        assert_eq!(
            html,
            "\n<h3>Here is what I can do right now:</h3>\n<ul><li><b>help</b>: get help</li></ul>\n"
        );
    }

    #[test]
    fn test_render_nested_prefixes_ancestors() {
        let world = world();
        let html = render(&suggest(world.root(), "internet sel"));
        assert!(html.contains("<li><i>internet</i> <b>self-sufficiency</b>: website</li>"));
        assert!(!html.contains("seeds"));
    }

    #[test]
    fn test_complete_single() {
        let world = world();
        let s = suggest(world.root(), "inte");
        assert_eq!(complete(&s, "inte"), AutocompleteResult::Single("internet".to_string()));

        let s = suggest(world.root(), "i  sel");
        assert_eq!(
            complete(&s, "i  sel"),
            AutocompleteResult::Single("internet self-sufficiency".to_string())
        );
    }

    #[test]
    fn test_complete_multiple_extends_common_prefix() {
        let world = world();
        let s = suggest(world.root(), "s");
        match complete(&s, "s") {
            AutocompleteResult::Multiple(buffer, names) => {
                assert_eq!(buffer, "sta");
                assert_eq!(names, vec!["status", "stash"]);
            }
            other => panic!("Expected multiple matches, got {:?}", other),
        }

        let s = suggest(world.root(), "internet se");
        match complete(&s, "internet se") {
            AutocompleteResult::Multiple(buffer, _) => assert_eq!(buffer, "internet se"),
            other => panic!("Expected multiple matches, got {:?}", other),
        }
    }

    #[test]
    fn test_completed_buffer_suggests_the_same() {
        let world = world();
        for input in ["he", "inte", "internet sel", "s"] {
            let first = suggest(world.root(), input);
            let buffer = match complete(&first, input) {
                AutocompleteResult::Single(buffer) | AutocompleteResult::Multiple(buffer, _) => buffer,
                AutocompleteResult::None => input.to_string(),
            };
            let second = suggest(world.root(), &buffer);
            assert_eq!(render(&second), render(&first), "input: {input}");
            assert_eq!(complete(&second, &buffer), complete(&first, input), "input: {input}");
        }
    }

    #[test]
    fn test_complete_nothing_without_partial() {
        let world = world();
        let s = suggest(world.root(), "");
        assert_eq!(complete(&s, ""), AutocompleteResult::None);
        let s = suggest(world.root(), "xyz");
        assert_eq!(complete(&s, "xyz"), AutocompleteResult::None);
    }

    #[test]
    fn test_hint() {
        let world = world();
        assert_eq!(get_hint(world.root(), "he"), Some("lp".to_string()));
        assert_eq!(get_hint(world.root(), "internet sel"), Some("f-sufficiency".to_string()));
        assert_eq!(get_hint(world.root(), "help"), None);
        assert_eq!(get_hint(world.root(), "help "), None);
        assert_eq!(get_hint(world.root(), "zzz"), None);
    }

    #[test]
    fn test_common_prefix() {
        let strings = vec![
            "hello".to_string(),
            "help".to_string(),
            "helicopter".to_string(),
        ];
        assert_eq!(find_common_prefix(&strings), "hel");
        assert_eq!(find_common_prefix(&["abc".to_string(), "xyz".to_string()]), "");
        assert_eq!(find_common_prefix(&["same".to_string()]), "same");
        assert_eq!(find_common_prefix(&[]), "");
    }
}
