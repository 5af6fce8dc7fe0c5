//! Append-only database store for log records.

use crate::error::{Error, Result};
use crate::models::*;
use crate::queries::LogQuery;
use native_db::*;
use papertrail_core::LogRecord;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

// Static models for the database
static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models.define::<StoredLogRecord>().unwrap();
    models
});

/// Append-only store for audit log records.
///
/// Records are inserted once with a store-assigned monotonic ID and never
/// updated or deleted; the store exposes no mutation surface beyond
/// [`LogStore::append`].
pub struct LogStore {
    pub(crate) db: Database<'static>,
    next_id: AtomicU64,
}

impl LogStore {
    /// Open or create a store at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Builder::new()
            .create(&MODELS, path.as_ref())
            .map_err(|e| Error::Database(e.to_string()))?;
        Self::with_db(db)
    }

    /// Create an in-memory store.
    pub fn in_memory() -> Result<Self> {
        let db = Builder::new()
            .create_in_memory(&MODELS)
            .map_err(|e| Error::Database(e.to_string()))?;
        Self::with_db(db)
    }

    fn with_db(db: Database<'static>) -> Result<Self> {
        let store = Self {
            db,
            next_id: AtomicU64::new(1),
        };
        let max_id = store
            .load_all()?
            .iter()
            .map(|s| s.id)
            .max()
            .unwrap_or(0);
        store.next_id.store(max_id + 1, Ordering::SeqCst);
        Ok(store)
    }

    /// Append a log record, returning its assigned ID.
    ///
    /// The record's own `id` field is ignored; IDs are assigned here and
    /// are strictly increasing for the lifetime of the store.
    pub fn append(&self, record: &LogRecord) -> Result<u64> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut stored = StoredLogRecord::from_record(record)?;
        stored.id = id;

        let rw = self.db.rw_transaction()?;
        rw.insert(stored)?;
        rw.commit()?;
        Ok(id)
    }

    /// Load a log record by ID.
    pub fn get(&self, id: u64) -> Result<Option<LogRecord>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredLogRecord> = r.get().primary(id)?;
        stored.map(|s| s.to_record()).transpose()
    }

    /// Load all log records in append order.
    pub fn all(&self) -> Result<Vec<LogRecord>> {
        let mut records = self
            .load_all()?
            .iter()
            .map(|s| s.to_record())
            .collect::<Result<Vec<LogRecord>>>()?;
        records.sort_by_key(|r| r.id);
        Ok(records)
    }

    /// Load log records matching a query, in append order.
    pub fn query(&self, query: &LogQuery) -> Result<Vec<LogRecord>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|r| query.matches(r))
            .collect())
    }

    /// Load the change history of one entity, in append order.
    pub fn by_subject(&self, subject_key: i64, subject_type: &str) -> Result<Vec<LogRecord>> {
        let r = self.db.r_transaction()?;
        let scan = r
            .scan()
            .secondary::<StoredLogRecord>(StoredLogRecordKey::subject_key)?;
        let iter = scan.start_with(subject_key)?;
        let stored: std::result::Result<Vec<StoredLogRecord>, _> = iter.collect();
        let stored = stored.map_err(|e| Error::Database(e.to_string()))?;

        let mut records = stored
            .into_iter()
            .filter(|s| s.subject_type == subject_type)
            .map(|s| s.to_record())
            .collect::<Result<Vec<LogRecord>>>()?;
        records.sort_by_key(|r| r.id);
        Ok(records)
    }

    /// Load the most recent log record for one entity.
    pub fn last_for_subject(
        &self,
        subject_key: i64,
        subject_type: &str,
    ) -> Result<Option<LogRecord>> {
        Ok(self.by_subject(subject_key, subject_type)?.pop())
    }

    /// Number of stored records.
    pub fn len(&self) -> Result<usize> {
        Ok(self.load_all()?.len())
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn load_all(&self) -> Result<Vec<StoredLogRecord>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredLogRecord>()?;
        let iter = scan.all()?;
        let stored: std::result::Result<Vec<StoredLogRecord>, _> = iter.collect();
        stored.map_err(|e| Error::Database(e.to_string()))
    }
}

impl From<native_db::db_type::Error> for Error {
    fn from(err: native_db::db_type::Error) -> Self {
        Error::Database(err.to_string())
    }
}
