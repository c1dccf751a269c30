//! Application configuration.
//!
//! Centralizes the constants used by the engine and the terminal host.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Opening diary page shown after `init`.
pub const INTRO_TEXT: &str = include_str!("../assets/text/intro.txt");

/// Paragraphs of the `help` entry, separated by blank lines.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

// =============================================================================
// World
// =============================================================================

/// Id of the root record. The root is never addressed by user input.
pub const ROOT_ENTITY_ID: &str = "world";

// =============================================================================
// Engine Output
// =============================================================================

/// Output of an entity without a dedicated interaction.
pub const PLACEHOLDER_OUTPUT: &str = "...";

/// Heading of every suggestion list.
pub const SUGGESTION_HEADING: &str = "Here is what I can do right now:";

/// Output for input that does not fully resolve. `{command}` is the trimmed input.
pub const UNKNOWN_COMMAND_TEMPLATE: &str = "unknown command: {command}";

/// Maximum number of previous outputs kept in the session history.
pub const MAX_HISTORY: usize = 500;

// =============================================================================
// Terminal Host
// =============================================================================

pub mod host {
    use std::fs;
    use std::path::Path;

    use serde::Deserialize;

    use crate::core::error::ConfigError;

    /// Prompt shown before each line of input.
    pub const PROMPT: &str = "diary> ";

    /// Trailing marker that turns a line into a suggestion request.
    pub const SUGGEST_MARKER: char = '?';

    /// Line that ends the session.
    pub const QUIT_COMMAND: &str = ":quit";

    /// Log filter used when `RUST_LOG` is unset and no `-v` is given.
    pub const DEFAULT_LOG_FILTER: &str = "warn";

    /// Optional overrides read from a TOML file given with `--config`.
    ///
    /// ```toml
    /// prompt = "> "
    /// raw = true
    /// log_filter = "diary_shell=debug"
    /// ```
    #[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    pub struct HostConfig {
        pub prompt: String,
        pub raw: bool,
        pub log_filter: String,
    }

    impl Default for HostConfig {
        fn default() -> Self {
            Self {
                prompt: PROMPT.to_string(),
                raw: false,
                log_filter: DEFAULT_LOG_FILTER.to_string(),
            }
        }
    }

    impl HostConfig {
        pub fn load(path: &Path) -> Result<Self, ConfigError> {
            let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Self::parse(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
        }

        pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
            toml::from_str(raw)
        }
    }

}
