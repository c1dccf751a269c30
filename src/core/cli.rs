//! The command line engine: one instance per turn.
//!
//! A [`CommandLineInterface`] copies the transcript out of the session,
//! materializes a fresh world, runs one operation, and writes the transcript
//! back. It is cheap to build and must not be cached across turns; the
//! world it holds goes stale as soon as an interaction changes the records.

use crate::config::UNKNOWN_COMMAND_TEMPLATE;
use crate::core::autocomplete::{self, AutocompleteResult};
use crate::core::interactions::{self, Turn};
use crate::core::parser::InputParser;
use crate::models::{EntityStore, SessionState, Transcript, World};
use crate::utils::template;

pub struct CommandLineInterface {
    transcript: Transcript,
    world: World,
}

impl CommandLineInterface {
    pub fn new(state: &SessionState) -> Self {
        Self {
            transcript: state.transcript(),
            world: World::materialize(&state.entities),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.transcript.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.transcript.input = input.into();
    }

    /// Reset input, output, and history.
    pub fn clear(&mut self) {
        self.transcript.clear();
    }

    /// List what the player can type next and Tab-complete the buffer.
    ///
    /// The previous output always moves to the history first. Does nothing
    /// in an empty world.
    pub fn suggest(&mut self) {
        if self.world.is_empty() {
            return;
        }

        let input = self.transcript.input.clone();
        let suggestions = autocomplete::suggest(self.world.root(), &input);
        let output = autocomplete::render(&suggestions);
        let completed = autocomplete::complete(&suggestions, &input);
        tracing::debug!(
            input = %input,
            candidates = suggestions.candidates.len(),
            matched = suggestions.matched,
            "suggest"
        );

        self.transcript.archive_output();
        self.transcript.output = output;
        match completed {
            AutocompleteResult::Single(buffer) | AutocompleteResult::Multiple(buffer, _) => {
                self.transcript.input = buffer;
            }
            AutocompleteResult::None => {}
        }
    }

    /// Enter the buffered input as a command.
    ///
    /// Empty input is a suggestion request. Input that does not resolve
    /// token-for-token renders the unknown command message. Otherwise the
    /// deepest entity's interaction runs with the capabilities it declares;
    /// `entities` changes only through those. The input is cleared either way.
    pub fn interact(&mut self, entities: &mut EntityStore) {
        if self.world.is_empty() {
            return;
        }

        let command = self.transcript.input.trim().to_string();
        if command.is_empty() {
            self.suggest();
            return;
        }

        let parser = InputParser::new(self.world.root());
        let parsed = parser.parse(&command);
        let resolved = parsed.entities(true);
        let exact = resolved.len() == parsed.token_count();
        let interaction = resolved.last().map(|entity| entity.interaction());

        self.transcript.archive_output();

        let output = match interaction {
            Some(interaction) if exact => {
                tracing::debug!(command = %command, ?interaction, "interact");
                interactions::dispatch(
                    interaction,
                    Turn {
                        transcript: &mut self.transcript,
                        entities,
                    },
                )
            }
            _ => {
                tracing::debug!(command = %command, "unknown command");
                template::fill(UNKNOWN_COMMAND_TEMPLATE, &[("command", command.as_str())])
            }
        };

        self.transcript.output = output;
        self.transcript.input.clear();
    }

    /// Ghost-text hint for the current buffer.
    pub fn hint(&self) -> Option<String> {
        if self.world.is_empty() {
            return None;
        }
        autocomplete::get_hint(self.world.root(), &self.transcript.input)
    }

    /// Copy input, output, and history back into the session.
    pub fn write_back(self, state: &mut SessionState) {
        self.transcript.apply_to(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ids, starting_world};
    use crate::models::EntityId;

    const TOP_LEVEL: &str = "\n<h3>Here is what I can do right now:</h3>\n<ul>\
        <li><b>help</b>: if I forget the sense of direction, this comes in handy</li>\
        <li><b>status</b>: lets me know what is going on in the world</li>\
        <li><b>todo</b>: my todo list</li>\
        <li><b>internet</b>: this is how I browse the internet</li>\
        <li><b>phone</b>: something I use when need to contact somebody</li></ul>\n";

    fn cli_with_input(input: &str) -> CommandLineInterface {
        let mut cli = CommandLineInterface::new(&SessionState::initial());
        cli.set_input(input);
        cli
    }

    #[test]
    fn test_suggest_empty_input() {
        let mut cli = cli_with_input("");
        cli.suggest();
        assert_eq!(cli.transcript().output, TOP_LEVEL);
        assert_eq!(cli.input(), "");
    }

    #[test]
    fn test_suggest_prefix() {
        let mut cli = cli_with_input("he");
        cli.suggest();
        assert_eq!(
            cli.transcript().output,
            "\n<h3>Here is what I can do right now:</h3>\n<ul>\
             <li><b>help</b>: if I forget the sense of direction, this comes in handy</li></ul>\n"
        );
        assert_eq!(cli.input(), "help");
    }

    #[test]
    fn test_suggest_sta() {
        let mut cli = cli_with_input("sta");
        cli.suggest();
        assert!(cli.transcript().output.contains("<b>status</b>"));
        assert!(!cli.transcript().output.contains("<b>help</b>"));
    }

    #[test]
    fn test_suggest_unknown_shows_everything() {
        let mut cli = cli_with_input("test");
        cli.suggest();
        assert_eq!(cli.transcript().output, TOP_LEVEL);
        assert_eq!(cli.input(), "test");
    }

    #[test]
    fn test_suggest_nested() {
        for input in ["internet t", "internet t a", "internet test test test test a"] {
            let mut cli = cli_with_input(input);
            cli.suggest();
            assert_eq!(
                cli.transcript().output,
                "\n<h3>Here is what I can do right now:</h3>\n<ul>\
                 <li><i>internet</i> <b>self-sufficiency</b>: website</li></ul>\n",
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_suggest_is_idempotent() {
        let mut cli = cli_with_input("");
        cli.suggest();
        let first = cli.transcript().output.clone();
        let history = cli.transcript().history.len();
        cli.suggest();
        assert_eq!(cli.transcript().output, first);
        assert_eq!(cli.transcript().history.len(), history + 1);
        assert_eq!(cli.transcript().history.last(), Some(&first));
    }

    #[test]
    fn test_suggest_is_idempotent_after_completion() {
        for (input, completed) in [
            ("he", "help"),
            ("sta", "status"),
            ("internet se", "internet self-sufficiency"),
        ] {
            let mut cli = cli_with_input(input);
            cli.suggest();
            let first = cli.transcript().output.clone();
            let history = cli.transcript().history.len();
            assert_eq!(cli.input(), completed);

            cli.suggest();
            assert_eq!(cli.transcript().output, first, "input: {input}");
            assert_eq!(cli.transcript().history.len(), history + 1);
            assert_eq!(cli.input(), completed);
        }
    }

    #[test]
    fn test_interact_empty_delegates_to_suggest() {
        let mut cli = cli_with_input("   ");
        let mut entities = starting_world();
        cli.interact(&mut entities);
        assert_eq!(cli.transcript().output, TOP_LEVEL);
    }

    #[test]
    fn test_interact_unknown_command() {
        let mut cli = cli_with_input("  internet nowhere ");
        let mut entities = starting_world();
        cli.interact(&mut entities);
        assert_eq!(cli.transcript().output, "unknown command: internet nowhere");
        assert_eq!(cli.input(), "");
        assert_eq!(cli.transcript().history, vec![String::new()]);
    }

    #[test]
    fn test_interact_runs_deepest_entity() {
        let mut cli = cli_with_input("todo");
        let mut entities = starting_world();
        cli.interact(&mut entities);
        assert!(cli.transcript().output.starts_with("<h3>Todo</h3>"));
        assert_eq!(cli.input(), "");

        let mut cli = cli_with_input("to le");
        cli.interact(&mut entities);
        assert!(cli
            .transcript()
            .output
            .starts_with("<h3>Objective: Learn About Self-sufficiency</h3>"));
    }

    #[test]
    fn test_interact_placeholder_for_plain_entity() {
        let mut cli = cli_with_input("phone");
        let mut entities = starting_world();
        cli.interact(&mut entities);
        assert_eq!(cli.transcript().output, "...");
    }

    #[test]
    fn test_interact_clear() {
        let mut state = SessionState::initial();
        state.output = "page one".to_string();
        state.history = vec!["page zero".to_string()];
        state.input = "help clear".to_string();

        let mut cli = CommandLineInterface::new(&state);
        cli.interact(&mut state.entities);
        cli.write_back(&mut state);

        assert!(state.history.is_empty());
        assert!(state.output.starts_with("<h3>Input Cleared</h3>"));
        assert_eq!(state.input, "");
    }

    #[test]
    fn test_interact_mutates_entities_through_capabilities() {
        let mut cli = cli_with_input("internet self");
        let mut entities = starting_world();
        cli.interact(&mut entities);
        assert!(entities[&EntityId::from(ids::INTERNET)]
            .entities
            .contains(&EntityId::from(ids::LAND_WEBSITE_001)));
    }

    #[test]
    fn test_empty_world_is_noop() {
        let mut state = SessionState {
            input: "help".to_string(),
            output: "kept".to_string(),
            ..Default::default()
        };
        let before = state.clone();
        let mut cli = CommandLineInterface::new(&state);
        cli.suggest();
        cli.interact(&mut state.entities);
        assert_eq!(cli.hint(), None);
        cli.write_back(&mut state);
        assert_eq!(state, before);
    }

    #[test]
    fn test_clear_method() {
        let mut cli = cli_with_input("something");
        cli.suggest();
        cli.clear();
        assert_eq!(cli.transcript(), &Transcript::default());
    }

    #[test]
    fn test_hint() {
        let cli = cli_with_input("inter");
        assert_eq!(cli.hint(), Some("net".to_string()));
    }
}
