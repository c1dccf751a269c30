//! `{placeholder}` substitution for output templates.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid placeholder pattern"));

/// Replace every `{name}` in `template` with its value from `vars`.
///
/// Placeholders without a value are left as written.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let key = &caps[1];
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_single() {
        assert_eq!(
            fill("unknown command: {command}", &[("command", "dance")]),
            "unknown command: dance"
        );
    }

    #[test]
    fn test_fill_repeated_and_missing() {
        assert_eq!(
            fill("{a}-{a}-{b}", &[("a", "x")]),
            "x-x-{b}"
        );
    }

    #[test]
    fn test_value_is_not_reexpanded() {
        assert_eq!(fill("{a}", &[("a", "{a}")]), "{a}");
    }

    #[test]
    fn test_braces_without_name_untouched() {
        assert_eq!(fill("{} { x }", &[("x", "y")]), "{} { x }");
    }
}
