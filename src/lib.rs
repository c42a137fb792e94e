//! PlumTrips trip planner engine
//!
//! Deterministic trip pricing and validation ([`pricing`]) plus the stateful
//! form controller that drives it ([`planner`]). Draft persistence goes
//! through the [`storage::KeyValueStore`] capability injected at
//! construction time.

pub mod config;
pub mod error;
pub mod planner;
pub mod pricing;
pub mod storage;

pub use config::{init_tracing, PlannerConfig};
pub use error::{PlannerError, Result, StorageError};
pub use planner::{PlannerView, TripDraft, TripPlanner, WorkflowState};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
