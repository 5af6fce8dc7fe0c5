//! Log record and attribute record types

use crate::error::Result;
use crate::reconstruct::{self, Reconstruction};
use crate::schema::Auditable;
use crate::value::FieldType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which side of a change an attribute record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeTag {
    /// State before the change
    Old,
    /// State after the change
    New,
}

/// The kind of change a log record describes
///
/// Determines which snapshots are required and which tags are captured:
/// Create records New only, Delete records Old only, Edit records both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Create,
    Edit,
    Delete,
}

/// One scalar field's value at one point in time
///
/// `value` is the canonical string encoding; `None` is the null sentinel.
/// A record is owned by exactly one [`LogRecord`] and never shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeRecord {
    /// Old or New side of the change
    pub tag: ChangeTag,
    /// Field name on the subject type
    pub field_name: String,
    /// Declared type at capture time, used to decode `value` later
    pub field_type: FieldType,
    /// Canonical string encoding of the value
    pub value: Option<String>,
}

/// The persisted unit of audit data for one entity change event
///
/// Assembled once at write time and immutable thereafter. `id` is zero
/// until the store assigns one at append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Store-assigned identifier
    pub id: u64,
    /// When the change was captured
    pub timestamp: DateTime<Utc>,
    /// Who made the change
    pub actor: String,
    /// Kind of change
    pub operation: Operation,
    /// Stable logical type name of the subject entity
    pub subject_type: String,
    /// Primary-key value of the subject, captured at write time
    pub subject_key: i64,
    /// Attribute records, Old block first, then New block
    pub attributes: Vec<AttributeRecord>,
}

impl LogRecord {
    /// Iterate the attributes carrying a given tag, in capture order
    pub fn attributes_for(&self, tag: ChangeTag) -> impl Iterator<Item = &AttributeRecord> {
        self.attributes.iter().filter(move |a| a.tag == tag)
    }

    /// Look up one attribute by tag and field name
    pub fn attribute(&self, tag: ChangeTag, field_name: &str) -> Option<&AttributeRecord> {
        self.attributes_for(tag).find(|a| a.field_name == field_name)
    }

    /// Rebuild the subject entity from one side of this record
    ///
    /// Equivalent to [`reconstruct::reconstruct`] over the record's
    /// attributes.
    pub fn rebuild<T: Auditable + Default>(&self, tag: ChangeTag) -> Result<Reconstruction<T>> {
        reconstruct::reconstruct(&self.attributes, tag)
    }
}
