//! Command tree entities: serialized records and the live tree built from them.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::config::ROOT_ENTITY_ID;
use crate::core::Interaction;

// =============================================================================
// Entity Id
// =============================================================================

/// Unique identifier of an entity record.
///
/// Ids are never typed by the user; they key the [`EntityStore`] and select
/// the [`Interaction`] an entity runs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for EntityId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntityId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Serialized Records
// =============================================================================

/// Entity category tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Terminal-level commands (help, status, clear)
    Cli,
    /// Everything else in the world
    #[default]
    Misc,
}

/// Flat, serializable form of an entity as kept in the session state.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SerializedEntity {
    pub id: EntityId,
    #[serde(rename = "type", default)]
    pub kind: EntityKind,
    /// Token users type to select this entity
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Child ids in declaration order
    #[serde(default)]
    pub entities: Vec<EntityId>,
    /// Free-form payload (e.g. status fields)
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub meta: serde_json::Value,
}

impl SerializedEntity {
    pub fn new(
        id: impl Into<EntityId>,
        kind: EntityKind,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            description: description.into(),
            entities: Vec::new(),
            meta: serde_json::Value::Null,
        }
    }

    /// Builder-style child list.
    pub fn with_children<I, T>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<EntityId>,
    {
        self.entities = children.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_meta(mut self, meta: serde_json::Value) -> Self {
        self.meta = meta;
        self
    }
}

/// All entity records of a session, keyed by id.
pub type EntityStore = HashMap<EntityId, SerializedEntity>;

// =============================================================================
// Live Entity
// =============================================================================

/// A node of the materialized command tree.
///
/// Each entity exclusively owns its children. The tree is rebuilt from the
/// [`EntityStore`] every turn and is never written back.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
    name: String,
    description: String,
    children: Vec<Entity>,
    meta: serde_json::Value,
    interaction: Interaction,
}

impl Entity {
    fn from_record(record: &SerializedEntity, children: Vec<Entity>) -> Self {
        Self {
            id: record.id.clone(),
            kind: record.kind,
            name: record.name.nfc().collect(),
            description: record.description.clone(),
            children,
            meta: record.meta.clone(),
            interaction: Interaction::for_id(&record.id),
        }
    }

    /// Root node with no children, used for an empty world.
    fn bare_root() -> Self {
        Self {
            id: EntityId::from(ROOT_ENTITY_ID),
            kind: EntityKind::Misc,
            name: String::new(),
            description: String::new(),
            children: Vec::new(),
            meta: serde_json::Value::Null,
            interaction: Interaction::Placeholder,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn children(&self) -> &[Entity] {
        &self.children
    }

    pub fn meta(&self) -> &serde_json::Value {
        &self.meta
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// First child (declaration order) whose name starts with `token`.
    ///
    /// Names are NFC-normalized at materialization; `token` must be too.
    pub fn child_with_prefix(&self, token: &str) -> Option<&Entity> {
        self.children.iter().find(|c| c.name.starts_with(token))
    }
}

// =============================================================================
// World
// =============================================================================

/// The materialized command tree for one turn.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    root: Entity,
    present: bool,
}

impl World {
    /// A world without a root record. Engines treat it as a no-op.
    pub fn empty() -> Self {
        Self {
            root: Entity::bare_root(),
            present: false,
        }
    }

    /// Rebuild the live tree from the flat record map.
    ///
    /// Never fails: a missing root yields [`World::empty`], dangling child
    /// ids and back-references onto the current ancestor path are skipped.
    pub fn materialize(store: &EntityStore) -> Self {
        let root_id = EntityId::from(ROOT_ENTITY_ID);
        let Some(record) = store.get(&root_id) else {
            tracing::debug!(root = ROOT_ENTITY_ID, "no root record, world is empty");
            return Self::empty();
        };

        let mut path = HashSet::new();
        let root = build_entity(store, record, &mut path);
        Self {
            root,
            present: true,
        }
    }

    pub fn root(&self) -> &Entity {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        !self.present
    }
}

/// Recursively materialize `record`. `path` holds the ids of its ancestors.
fn build_entity<'s>(
    store: &'s EntityStore,
    record: &'s SerializedEntity,
    path: &mut HashSet<&'s EntityId>,
) -> Entity {
    path.insert(&record.id);

    let mut children = Vec::with_capacity(record.entities.len());
    for child_id in &record.entities {
        if path.contains(child_id) {
            tracing::warn!(parent = %record.id, child = %child_id, "skipping cyclic child reference");
            continue;
        }
        match store.get(child_id) {
            Some(child) => children.push(build_entity(store, child, path)),
            None => {
                tracing::warn!(parent = %record.id, child = %child_id, "skipping missing child entity");
            }
        }
    }

    path.remove(&record.id);
    Entity::from_record(record, children)
}
