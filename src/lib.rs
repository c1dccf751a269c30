//! Command parser and autocomplete engine for a diary text adventure.
//!
//! The world is a tree of named entities. Typed words select a path through
//! it by case-sensitive prefix, Tab lists and completes what can come next,
//! and Enter runs the interaction of the deepest entity named.
//!
//! Hosts keep a [`SessionState`] and fold [`Event`]s into it with [`reduce`].

pub mod config;
pub mod content;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::error::{ConfigError, MetaError, SnapshotError};
pub use crate::core::{reduce, CommandLineInterface, Event, InputParser, Interaction};
pub use crate::models::{EntityStore, SessionState, World};
