//! The diary world: entity records the game starts from.
//!
//! Every record the game can ever reach is present from the start; quests
//! reveal them by attaching their ids under a parent.

mod entities;
pub mod ids;

pub use entities::{catalogue, starting_world};
