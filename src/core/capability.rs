//! Narrow views of the session handed to interaction handlers.
//!
//! A handler never sees the whole [`SessionState`](crate::models::SessionState).
//! The dispatcher builds exactly the views a handler's variant declares, so a
//! website can update the quest log but cannot touch the transcript, and the
//! todo listing cannot write anything at all.

use crate::content::ids;
use crate::core::error::MetaError;
use crate::models::{EntityId, EntityStore, GameDate, Season, SerializedEntity, StatusMeta, Transcript};

// =============================================================================
// Transcript
// =============================================================================

/// Write access to the input, output, and history of the session.
pub struct HistoryController<'a> {
    transcript: &'a mut Transcript,
}

impl<'a> HistoryController<'a> {
    pub fn new(transcript: &'a mut Transcript) -> Self {
        Self { transcript }
    }

    /// Forget the input buffer, current output, and all previous outputs.
    pub fn clear(&mut self) {
        self.transcript.clear();
    }
}

// =============================================================================
// Todo
// =============================================================================

/// Read-only view of the open todo items.
pub struct TodoView<'a> {
    store: &'a EntityStore,
}

impl<'a> TodoView<'a> {
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// Descriptions of the open tasks, in list order.
    pub fn items(&self) -> Vec<&'a str> {
        let store = self.store;
        store
            .get(&EntityId::from(ids::TODO))
            .map(|todo| {
                todo.entities
                    .iter()
                    .filter_map(|id| store.get(id))
                    .map(|task| task.description.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }
}

// =============================================================================
// Status
// =============================================================================

fn decode_status(store: &EntityStore) -> Result<StatusMeta, MetaError> {
    let id = EntityId::from(ids::STATUS);
    let record = store
        .get(&id)
        .ok_or_else(|| MetaError::MissingEntity(id.clone()))?;
    let meta: StatusMeta = serde_json::from_value(record.meta.clone())
        .map_err(|source| MetaError::Decode { id: id.clone(), source })?;
    if !meta.date.is_valid() {
        return Err(MetaError::InvalidDate {
            id,
            day: meta.date.day,
            month: meta.date.month,
            year: meta.date.year,
        });
    }
    Ok(meta)
}

/// Read-only, typed view of the status entity's metadata.
pub struct StatusView {
    meta: StatusMeta,
}

impl StatusView {
    pub fn load(store: &EntityStore) -> Result<Self, MetaError> {
        decode_status(store).map(|meta| Self { meta })
    }

    pub fn meta(&self) -> &StatusMeta {
        &self.meta
    }
}

/// Write access to the calendar and finances in the status metadata.
///
/// Changes are applied to the session only by [`Calendar::commit`].
pub struct Calendar<'a> {
    record: &'a mut SerializedEntity,
    meta: StatusMeta,
}

impl<'a> Calendar<'a> {
    pub fn load(store: &'a mut EntityStore) -> Result<Self, MetaError> {
        let meta = decode_status(store)?;
        let id = EntityId::from(ids::STATUS);
        let record = store
            .get_mut(&id)
            .ok_or(MetaError::MissingEntity(id))?;
        Ok(Self { record, meta })
    }

    pub fn today(&self) -> &GameDate {
        &self.meta.date
    }

    pub fn meta(&self) -> &StatusMeta {
        &self.meta
    }

    /// Let one day pass.
    ///
    /// On a new month the salary is paid, expenses are settled, and the
    /// season follows the month. Returns `true` when the month changed.
    pub fn advance_day(&mut self) -> bool {
        let new_month = self.meta.date.advance();
        if new_month {
            self.meta.finances.settle_month();
            self.meta.weather.season = Season::for_month(self.meta.date.month);
        }
        new_month
    }

    /// Write the updated metadata back into the status record.
    pub fn commit(self) -> Result<(), MetaError> {
        let value = serde_json::to_value(&self.meta).map_err(|source| MetaError::Encode {
            id: self.record.id.clone(),
            source,
        })?;
        self.record.meta = value;
        Ok(())
    }
}

// =============================================================================
// Quest Log
// =============================================================================

/// Write access to the todo list and to which entities the world reveals.
pub struct QuestLog<'a> {
    store: &'a mut EntityStore,
}

impl<'a> QuestLog<'a> {
    pub fn new(store: &'a mut EntityStore) -> Self {
        Self { store }
    }

    /// The task is currently on the todo list.
    pub fn is_open(&self, task: &str) -> bool {
        self.store
            .get(&EntityId::from(ids::TODO))
            .is_some_and(|todo| todo.entities.iter().any(|id| id == task))
    }

    /// Put a task on the todo list. Returns `false` if it was already there
    /// or no such task exists.
    pub fn open(&mut self, task: &str) -> bool {
        self.unlock(ids::TODO, task)
    }

    /// Take a task off the todo list. Returns `false` if it was not open.
    pub fn complete(&mut self, task: &str) -> bool {
        let Some(todo) = self.store.get_mut(&EntityId::from(ids::TODO)) else {
            return false;
        };
        let before = todo.entities.len();
        todo.entities.retain(|id| id != task);
        let removed = todo.entities.len() != before;
        if removed {
            tracing::debug!(task, "quest task completed");
        }
        removed
    }

    /// Attach `child` under `parent` so the player can reach it.
    ///
    /// Both records must exist. Returns `false` if either is missing or the
    /// child is already attached.
    pub fn unlock(&mut self, parent: &str, child: &str) -> bool {
        let child_id = EntityId::from(child);
        if !self.store.contains_key(&child_id) {
            tracing::warn!(parent, child, "cannot unlock unknown entity");
            return false;
        }
        let Some(record) = self.store.get_mut(&EntityId::from(parent)) else {
            tracing::warn!(parent, child, "cannot unlock under unknown parent");
            return false;
        };
        if record.entities.contains(&child_id) {
            return false;
        }
        record.entities.push(child_id);
        tracing::debug!(parent, child, "entity unlocked");
        true
    }
}
