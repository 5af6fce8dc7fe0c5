//! Batch recording of entity changes.
//!
//! The recorder is the glue between a caller's change tracking and the
//! store: the caller reports which entities changed in a unit of work, the
//! recorder assembles one log record per entry and appends them. The whole
//! batch is assembled before anything is written, so a precondition
//! violation in any entry surfaces as an error instead of a partly-written
//! batch.

use crate::error::Result;
use crate::store::LogStore;
use papertrail_core::{Assembler, Auditable, IdentityResolver, LogRecord, Operation};

/// One changed entity as reported by the caller's change tracking
pub struct ChangeEntry<'a> {
    /// Kind of change
    pub operation: Operation,
    /// Snapshot before the change; `None` for Create
    pub old: Option<&'a dyn Auditable>,
    /// Snapshot after the change; `None` for Delete
    pub new: Option<&'a dyn Auditable>,
}

impl<'a> ChangeEntry<'a> {
    /// Entry for a newly created entity
    pub fn created(new: &'a dyn Auditable) -> Self {
        Self {
            operation: Operation::Create,
            old: None,
            new: Some(new),
        }
    }

    /// Entry for a modified entity
    pub fn edited(old: &'a dyn Auditable, new: &'a dyn Auditable) -> Self {
        Self {
            operation: Operation::Edit,
            old: Some(old),
            new: Some(new),
        }
    }

    /// Entry for a deleted entity
    pub fn deleted(old: &'a dyn Auditable) -> Self {
        Self {
            operation: Operation::Delete,
            old: Some(old),
            new: None,
        }
    }
}

/// Fans change entries through an assembler into a store
pub struct Recorder<R: IdentityResolver> {
    assembler: Assembler<R>,
}

impl<R: IdentityResolver> Recorder<R> {
    /// Create a recorder around an assembler
    pub fn new(assembler: Assembler<R>) -> Self {
        Self { assembler }
    }

    /// Record a single change, returning the appended record's ID
    pub fn record(&self, store: &LogStore, entry: &ChangeEntry<'_>) -> Result<u64> {
        let record = self.assembler.assemble(entry.old, entry.new, entry.operation)?;
        store.append(&record)
    }

    /// Record a batch of changes, one log record per entry
    ///
    /// Assembly runs for every entry before the first append; an invalid
    /// entry fails the whole batch and nothing is written.
    pub fn record_all(&self, store: &LogStore, entries: &[ChangeEntry<'_>]) -> Result<Vec<u64>> {
        let records: Vec<LogRecord> = entries
            .iter()
            .map(|entry| self.assembler.assemble(entry.old, entry.new, entry.operation))
            .collect::<papertrail_core::Result<_>>()?;

        let mut ids = Vec::with_capacity(records.len());
        for record in &records {
            ids.push(store.append(record)?);
        }
        Ok(ids)
    }
}
