//! Host-owned session state.

use serde::{Deserialize, Serialize};

use crate::config::MAX_HISTORY;
use crate::content;
use crate::models::EntityStore;

/// Everything the host keeps between turns.
///
/// The engine reads it to build a fresh world each turn and writes back only
/// the [`Transcript`] fields; entity records change solely through
/// interaction capabilities.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SessionState {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub history: Vec<String>,
    #[serde(default)]
    pub entities: EntityStore,
}

impl SessionState {
    /// The starting world with an empty transcript.
    pub fn initial() -> Self {
        Self {
            entities: content::starting_world(),
            ..Default::default()
        }
    }

    pub fn transcript(&self) -> Transcript {
        Transcript {
            input: self.input.clone(),
            output: self.output.clone(),
            history: self.history.clone(),
        }
    }
}

/// The input buffer, current output, and previous outputs of a session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    pub input: String,
    pub output: String,
    pub history: Vec<String>,
}

impl Transcript {
    /// Move the current output onto the history.
    ///
    /// History is capped at `MAX_HISTORY`; the oldest entries go first.
    pub fn archive_output(&mut self) {
        self.history.push(self.output.clone());
        if self.history.len() > MAX_HISTORY {
            let excess = self.history.len() - MAX_HISTORY;
            self.history.drain(..excess);
        }
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.history.clear();
    }

    pub fn apply_to(self, state: &mut SessionState) {
        state.input = self.input;
        state.output = self.output;
        state.history = self.history;
    }
}
