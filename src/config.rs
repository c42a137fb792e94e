//! Planner configuration and logging setup

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::error::{PlannerError, Result};
use crate::storage::{FileStore, KeyValueStore, MemoryStore};

/// Key the draft snapshot is stored under unless overridden
pub const DEFAULT_STORAGE_KEY: &str = "plumtrips_config";

pub const STORAGE_KEY_VAR: &str = "TRIP_PLANNER_STORAGE_KEY";
pub const STORAGE_DIR_VAR: &str = "TRIP_PLANNER_STORAGE_DIR";

/// Planner settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Key for the persisted draft snapshot
    pub storage_key: String,
    /// Directory for file-backed drafts; in-memory when unset
    pub storage_dir: Option<PathBuf>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_dir: None,
        }
    }
}

impl PlannerConfig {
    /// Load from the environment, reading `.env` first if present
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let storage_key = match lookup(STORAGE_KEY_VAR) {
            Some(key) if key.trim().is_empty() => {
                return Err(PlannerError::Config(format!("{} must not be empty", STORAGE_KEY_VAR)));
            }
            Some(key) => key.trim().to_string(),
            None => DEFAULT_STORAGE_KEY.to_string(),
        };

        let storage_dir = lookup(STORAGE_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            storage_key,
            storage_dir,
        })
    }

    /// Open the configured storage backend
    pub fn open_store(&self) -> Result<Box<dyn KeyValueStore>> {
        match &self.storage_dir {
            Some(dir) => Ok(Box::new(FileStore::open(dir)?)),
            None => Ok(Box::new(MemoryStore::new())),
        }
    }
}

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `trip_planner=info`).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trip_planner=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = PlannerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.storage_key, "plumtrips_config");
    }

    #[test]
    fn test_overrides() {
        let config = PlannerConfig::from_lookup(lookup_from(&[
            (STORAGE_KEY_VAR, " planner_draft "),
            (STORAGE_DIR_VAR, "/var/lib/plumtrips"),
        ]))
        .unwrap();
        assert_eq!(config.storage_key, "planner_draft");
        assert_eq!(config.storage_dir, Some(PathBuf::from("/var/lib/plumtrips")));
    }

    #[test]
    fn test_blank_key_rejected() {
        let err = PlannerConfig::from_lookup(lookup_from(&[(STORAGE_KEY_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, PlannerError::Config(_)));
    }

    #[test]
    fn test_blank_dir_means_memory() {
        let config = PlannerConfig::from_lookup(lookup_from(&[(STORAGE_DIR_VAR, "")])).unwrap();
        assert!(config.storage_dir.is_none());
    }

    #[test]
    fn test_open_store_file_backend() {
        let temp_dir = TempDir::new().unwrap();
        let config = PlannerConfig {
            storage_dir: Some(temp_dir.path().to_path_buf()),
            ..PlannerConfig::default()
        };
        let store = config.open_store().unwrap();
        store.set(&config.storage_key, "{}").unwrap();
        assert!(temp_dir.path().join("plumtrips_config.json").exists());
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
    }
}
