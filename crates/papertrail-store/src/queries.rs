//! Query criteria for filtering stored log records.

use chrono::{DateTime, Utc};
use papertrail_core::{LogRecord, Operation};

/// Builder-style filter over stored log records
///
/// Every unset field matches everything, so an empty query returns the
/// whole log.
#[derive(Debug, Clone, Default)]
pub struct LogQuery {
    /// Earliest timestamp (inclusive)
    pub start: Option<DateTime<Utc>>,
    /// Latest timestamp (inclusive)
    pub end: Option<DateTime<Utc>>,
    /// Filter by operation kind
    pub operation: Option<Operation>,
    /// Filter by subject type name
    pub subject_type: Option<String>,
    /// Filter by actor
    pub actor: Option<String>,
}

impl LogQuery {
    /// Create a new empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by timestamp range (inclusive)
    pub fn between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Filter by operation kind
    pub fn by_operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Filter by subject type name
    pub fn by_subject_type(mut self, subject_type: impl Into<String>) -> Self {
        self.subject_type = Some(subject_type.into());
        self
    }

    /// Filter by actor
    pub fn by_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Check whether a record passes every set filter
    pub fn matches(&self, record: &LogRecord) -> bool {
        if let Some(start) = self.start {
            if record.timestamp < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if record.timestamp > end {
                return false;
            }
        }
        if let Some(operation) = self.operation {
            if record.operation != operation {
                return false;
            }
        }
        if let Some(ref subject_type) = self.subject_type {
            if &record.subject_type != subject_type {
                return false;
            }
        }
        if let Some(ref actor) = self.actor {
            if &record.actor != actor {
                return false;
            }
        }
        true
    }
}
