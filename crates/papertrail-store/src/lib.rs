//! Papertrail Store - Append-only persistence for audit log records
//!
//! Provides the durable collaborator of the papertrail audit system:
//! - An append-only native_db store for assembled log records
//! - A builder-style query filter (time range, operation, type, actor)
//! - Per-entity history and last-change lookups
//! - A batch recorder fanning change-tracking entries into the store

mod error;
mod models;
mod queries;
mod recorder;
mod store;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use queries::LogQuery;
pub use recorder::{ChangeEntry, Recorder};
pub use store::LogStore;

// Re-export core types for convenience
pub use papertrail_core::{
    AttributeRecord, Auditable, ChangeTag, LogRecord, Operation, Reconstruction,
};
