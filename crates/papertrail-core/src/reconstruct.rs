//! Rebuilding entities from attribute records
//!
//! Reconstruction is the read-side inverse of capture: filter a record's
//! attributes to one side of the change, decode each value by its recorded
//! type tag, and assign it through the target's [`Auditable`] setter.
//!
//! Reconstruction tolerates schema drift. A field present in the records
//! but gone from the target type is skipped and reported as a warning, so
//! legacy records remain replayable after the type evolves. Fields the
//! records do not mention stay at their `Default` value.

use crate::codec;
use crate::error::{Error, Result};
use crate::record::{AttributeRecord, ChangeTag};
use crate::schema::Auditable;

/// Non-fatal condition met while rebuilding an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconstructWarning {
    /// A recorded field no longer exists on the target type
    UnknownProperty { field: String },
}

/// A rebuilt entity together with the warnings collected on the way
#[derive(Debug, Clone)]
pub struct Reconstruction<T> {
    /// The rebuilt entity
    pub entity: T,
    /// Warnings for skipped fields; empty on a clean rebuild
    pub warnings: Vec<ReconstructWarning>,
}

/// Apply one side of a set of attribute records onto an existing target
///
/// Decode failures are hard errors: a value that no longer parses as its
/// recorded type means the record or descriptor is corrupt, and a silently
/// wrong replay is worse than a failed one. Unknown fields are collected as
/// warnings and returned.
pub fn reconstruct_into(
    target: &mut dyn Auditable,
    records: &[AttributeRecord],
    tag: ChangeTag,
) -> Result<Vec<ReconstructWarning>> {
    let mut warnings = Vec::new();
    for record in records.iter().filter(|r| r.tag == tag) {
        let value = codec::decode(record.value.as_deref(), record.field_type)?;
        match target.set_field(&record.field_name, value) {
            Ok(()) => {}
            Err(Error::UnknownProperty { field, .. }) => {
                warnings.push(ReconstructWarning::UnknownProperty { field });
            }
            Err(other) => return Err(other),
        }
    }
    Ok(warnings)
}

/// Rebuild a fresh entity from one side of a set of attribute records
pub fn reconstruct<T: Auditable + Default>(
    records: &[AttributeRecord],
    tag: ChangeTag,
) -> Result<Reconstruction<T>> {
    let mut entity = T::default();
    let warnings = reconstruct_into(&mut entity, records, tag)?;
    Ok(Reconstruction { entity, warnings })
}
