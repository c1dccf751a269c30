//! Custom error types for the application.
//!
//! Nothing here crosses the parse/interact boundary: the engine recovers
//! locally and renders placeholders. These errors surface from the typed
//! metadata views and from the host's snapshot and config files.
//!
//! - [`MetaError`] - entity metadata missing or not matching its typed view
//! - [`SnapshotError`] - reading or writing a session snapshot
//! - [`ConfigError`] - reading the terminal host's config file

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::EntityId;

/// Typed entity metadata could not be read or written.
#[derive(Debug, Error)]
pub enum MetaError {
    /// No record with this id in the session
    #[error("entity '{0}' not found")]
    MissingEntity(EntityId),
    /// The record's meta does not match the expected shape
    #[error("entity '{id}' has malformed meta: {source}")]
    Decode {
        id: EntityId,
        #[source]
        source: serde_json::Error,
    },
    /// The record's date is outside the calendar
    #[error("entity '{id}' has an invalid date {year}/{month}/{day}")]
    InvalidDate {
        id: EntityId,
        day: u32,
        month: u32,
        year: i32,
    },
    /// The typed meta could not be turned back into JSON
    #[error("failed to encode meta for '{id}': {source}")]
    Encode {
        id: EntityId,
        #[source]
        source: serde_json::Error,
    },
}

/// Session snapshot I/O errors.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write snapshot '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("snapshot '{}' is not a valid session: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Terminal host configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_error_messages() {
        let err = MetaError::MissingEntity(EntityId::from("status"));
        assert_eq!(err.to_string(), "entity 'status' not found");

        let source = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let err = MetaError::Decode {
            id: EntityId::from("status"),
            source,
        };
        assert!(err.to_string().starts_with("entity 'status' has malformed meta: "));
    }

    #[test]
    fn test_snapshot_error_includes_path() {
        let err = SnapshotError::Read {
            path: PathBuf::from("/tmp/save.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read snapshot '/tmp/save.json': gone");
    }
}
