//! Attribute-level diff capture
//!
//! [`capture`] turns a pair of entity snapshots into the flat, ordered
//! attribute records a log record carries. The operation kind decides which
//! snapshots are required: Create reads the new state only, Delete the old
//! state only, Edit both. Output order is fixed: the whole Old block in
//! schema declaration order, then the whole New block.

use crate::codec;
use crate::error::{Error, Result};
use crate::record::{AttributeRecord, ChangeTag, Operation};
use crate::schema::Auditable;

/// Capture-time configuration
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Whether the identity field is itself captured
    ///
    /// When `true` (the default) the identity appears identically on both
    /// sides of an edit; when `false` it is omitted from the attribute
    /// records and survives only as the record's subject key.
    pub include_identity: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            include_identity: true,
        }
    }
}

/// Capture the attribute records for one entity change
///
/// Pure function over already-detached snapshots; the caller guarantees the
/// objects are not mutated concurrently. Missing required snapshots fail
/// with [`Error::MissingState`]; snapshots of different types fail with
/// [`Error::TypeMismatch`].
pub fn capture(
    old: Option<&dyn Auditable>,
    new: Option<&dyn Auditable>,
    operation: Operation,
    config: &CaptureConfig,
) -> Result<Vec<AttributeRecord>> {
    if let (Some(old), Some(new)) = (old, new) {
        if old.type_name() != new.type_name() {
            return Err(Error::TypeMismatch {
                left: old.type_name().to_string(),
                right: new.type_name().to_string(),
            });
        }
    }

    let mut records = Vec::new();
    if operation != Operation::Create {
        let old = old.ok_or(Error::MissingState {
            side: "old",
            operation,
        })?;
        capture_side(old, ChangeTag::Old, config, &mut records)?;
    }
    if operation != Operation::Delete {
        let new = new.ok_or(Error::MissingState {
            side: "new",
            operation,
        })?;
        capture_side(new, ChangeTag::New, config, &mut records)?;
    }
    Ok(records)
}

fn capture_side(
    subject: &dyn Auditable,
    tag: ChangeTag,
    config: &CaptureConfig,
    records: &mut Vec<AttributeRecord>,
) -> Result<()> {
    for field in &subject.schema().fields {
        if field.identity && !config.include_identity {
            continue;
        }
        // a declared field the impl cannot answer for is drift between the
        // schema and the type, not a null value
        let value = subject
            .get_field(&field.name)
            .ok_or_else(|| Error::UnknownProperty {
                type_name: subject.type_name().to_string(),
                field: field.name.clone(),
            })?;
        records.push(AttributeRecord {
            tag,
            field_name: field.name.clone(),
            field_type: field.field_type,
            value: codec::encode(&value, field.field_type)?,
        });
    }
    Ok(())
}

/// Compare two snapshots field by field over their encoded values
///
/// Snapshots of different types are never equal. Fields the schema does not
/// declare are not compared, mirroring what capture would record.
pub fn entities_equal(a: &dyn Auditable, b: &dyn Auditable) -> bool {
    if a.type_name() != b.type_name() {
        return false;
    }
    a.schema().fields.iter().all(|field| {
        let left = codec::encode(&a.get_field(&field.name).unwrap_or_default(), field.field_type);
        let right = codec::encode(&b.get_field(&field.name).unwrap_or_default(), field.field_type);
        matches!((left, right), (Ok(l), Ok(r)) if l == r)
    })
}
