//! Data models for the diary world.
//!
//! Contains domain types for:
//! - [`SerializedEntity`], [`EntityStore`] - the stored entity records
//! - [`Entity`], [`World`] - the tree materialized from them each turn
//! - [`SessionState`], [`Transcript`] - what a host keeps between turns
//! - [`StatusMeta`] - typed metadata of the status entity

mod entity;
mod session;
mod status;

pub use entity::{Entity, EntityId, EntityKind, EntityStore, SerializedEntity, World};
pub use session::{SessionState, Transcript};
pub use status::{
    Account, AccountType, Economics, Expense, Finances, GameDate, Location, Mood, Occupation,
    Personal, Politics, Season, Sentiment, Spectrum, StatusMeta, Temperature, TemperatureScale,
    TimeOfDay, Weather,
};
