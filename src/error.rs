//! Error handling for the trip planner

use std::path::PathBuf;

/// Failure reported by a key-value storage backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Crate error type
///
/// Controller operations never surface these; they are logged and the
/// planner carries on with defaults. Lower-level helpers (snapshot
/// encoding, store construction) return them so callers can decide.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
