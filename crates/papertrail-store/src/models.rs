//! Database models for persisted log records.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use native_db::*;
use native_model::{native_model, Model};
use papertrail_core::{AttributeRecord, LogRecord, Operation};
use serde::{Deserialize, Serialize};

/// Stored log record in the database.
///
/// Attribute records travel inside their parent row as a serialized blob;
/// they are owned by the record and never addressed independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct StoredLogRecord {
    /// Primary key - store-assigned record ID.
    #[primary_key]
    pub id: u64,
    /// Primary-key value of the audited entity.
    #[secondary_key]
    pub subject_key: i64,
    /// Logical type name of the audited entity.
    #[secondary_key]
    pub subject_type: String,
    /// Capture time in RFC 3339 form, full precision.
    pub timestamp: String,
    /// Who made the change.
    pub actor: String,
    /// Operation kind (see `operation_to_u8`).
    pub operation: u8,
    /// Serialized attribute records.
    pub attributes: Vec<u8>,
}

impl StoredLogRecord {
    /// Create from a papertrail LogRecord.
    pub fn from_record(record: &LogRecord) -> Result<Self> {
        let attributes = bincode::serialize(&record.attributes)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        Ok(Self {
            id: record.id,
            subject_key: record.subject_key,
            subject_type: record.subject_type.clone(),
            timestamp: record.timestamp.to_rfc3339(),
            actor: record.actor.clone(),
            operation: operation_to_u8(record.operation),
            attributes,
        })
    }

    /// Convert to a papertrail LogRecord.
    ///
    /// A row that no longer deserializes is a corrupt audit record; it is
    /// surfaced as [`Error::Serialization`] rather than returned empty.
    pub fn to_record(&self) -> Result<LogRecord> {
        let attributes: Vec<AttributeRecord> = bincode::deserialize(&self.attributes)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        let timestamp = DateTime::parse_from_rfc3339(&self.timestamp)
            .map_err(|e| Error::Serialization(e.to_string()))?
            .with_timezone(&Utc);
        Ok(LogRecord {
            id: self.id,
            timestamp,
            actor: self.actor.clone(),
            operation: operation_from_u8(self.operation)?,
            subject_type: self.subject_type.clone(),
            subject_key: self.subject_key,
            attributes,
        })
    }
}

pub(crate) fn operation_to_u8(operation: Operation) -> u8 {
    match operation {
        Operation::Create => 0,
        Operation::Edit => 1,
        Operation::Delete => 2,
    }
}

pub(crate) fn operation_from_u8(raw: u8) -> Result<Operation> {
    match raw {
        0 => Ok(Operation::Create),
        1 => Ok(Operation::Edit),
        2 => Ok(Operation::Delete),
        other => Err(Error::Serialization(format!(
            "unknown operation tag: {}",
            other
        ))),
    }
}
