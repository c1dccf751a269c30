//! Core logic of the diary shell.
//!
//! This module provides:
//! - [`InputParser`] resolving typed words against the entity tree
//! - [`CommandLineInterface`] with `suggest` and `interact`
//! - [`interactions`] dispatch and the [`capability`] views handlers receive
//! - [`session`] events and snapshots for hosts

mod autocomplete;
pub mod capability;
mod cli;
pub mod error;
pub mod interactions;
pub mod parser;
pub mod session;

pub use autocomplete::{get_hint, AutocompleteResult};
pub use cli::CommandLineInterface;
pub use interactions::Interaction;
pub use parser::{InputParser, ParsedCommand};
pub use session::{reduce, Event};
