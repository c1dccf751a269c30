//! Host glue: session events and snapshots.
//!
//! A host owns one [`SessionState`] and folds [`Event`]s into it with
//! [`reduce`]. Every event builds a fresh [`CommandLineInterface`] from the
//! state it is given.

use std::fs;
use std::path::Path;

use crate::config::INTRO_TEXT;
use crate::core::cli::CommandLineInterface;
use crate::core::error::SnapshotError;
use crate::models::SessionState;
use crate::utils::{html, template};

/// Something the host's user did.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// The input buffer now reads this text.
    Change(String),
    /// Enter the buffered input.
    Enter,
    /// Tab: list what can be typed and complete the buffer.
    Suggest,
    /// Start over from the first page of the diary.
    Init,
    /// Replace the session with a saved one.
    Load(SessionState),
}

pub fn reduce(mut state: SessionState, event: Event) -> SessionState {
    match event {
        Event::Change(input) => {
            state.input = input;
            state
        }
        Event::Enter => {
            let mut cli = CommandLineInterface::new(&state);
            cli.interact(&mut state.entities);
            cli.write_back(&mut state);
            state
        }
        Event::Suggest => {
            let mut cli = CommandLineInterface::new(&state);
            cli.suggest();
            cli.write_back(&mut state);
            state
        }
        Event::Init => SessionState {
            output: intro(),
            ..SessionState::initial()
        },
        Event::Load(loaded) => {
            tracing::debug!(entities = loaded.entities.len(), "session loaded");
            loaded
        }
    }
}

/// The opening page shown on [`Event::Init`].
pub fn intro() -> String {
    let help = html::bold("help");
    let text = template::fill(INTRO_TEXT, &[("help", help.as_str())]);
    html::each(html::blocks(&text), html::paragraph)
}

pub fn load_snapshot(path: &Path) -> Result<SessionState, SnapshotError> {
    let raw = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_snapshot(state: &SessionState, path: &Path) -> Result<(), SnapshotError> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json).map_err(|source| SnapshotError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ids;
    use crate::core::capability::StatusView;
    use crate::models::EntityId;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("diary-shell-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_init_shows_intro() {
        let state = reduce(SessionState::default(), Event::Init);
        assert_eq!(state.output.matches("<p>").count(), 3);
        assert!(state.output.contains("<b>help</b>"));
        assert!(state.history.is_empty());
        assert!(state.entities.contains_key(&EntityId::from(ids::WORLD)));
    }

    #[test]
    fn test_change_then_suggest_completes() {
        let state = reduce(SessionState::initial(), Event::Change("he".to_string()));
        let state = reduce(state, Event::Suggest);
        assert_eq!(state.input, "help");
        assert_eq!(state.history, vec![String::new()]);
    }

    #[test]
    fn test_enter_status_skip_advances_day() {
        let state = reduce(SessionState::initial(), Event::Change("status skip".to_string()));
        let state = reduce(state, Event::Enter);
        assert!(state.output.contains("[2020/1/2 Tuesday]"));
        assert_eq!(StatusView::load(&state.entities).unwrap().meta().date.day, 2);
    }

    #[test]
    fn test_load_replaces_state() {
        let saved = SessionState {
            output: "saved".to_string(),
            ..SessionState::initial()
        };
        let state = reduce(SessionState::default(), Event::Load(saved.clone()));
        assert_eq!(state, saved);
    }

    #[test]
    fn test_snapshot_save_and_load() {
        let path = temp_path("snapshot");
        let state = reduce(SessionState::initial(), Event::Change("todo".to_string()));
        let state = reduce(state, Event::Enter);

        save_snapshot(&state, &path).unwrap();
        let loaded = load_snapshot(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, state);
    }

    #[test]
    fn test_load_snapshot_errors() {
        let missing = temp_path("missing");
        assert!(matches!(load_snapshot(&missing), Err(SnapshotError::Read { .. })));

        let garbage = temp_path("garbage");
        fs::write(&garbage, "not json").unwrap();
        let result = load_snapshot(&garbage);
        let _ = fs::remove_file(&garbage);
        assert!(matches!(result, Err(SnapshotError::Parse { .. })));
    }
}
