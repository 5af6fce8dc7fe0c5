//! Papertrail Core - Attribute-level entity change capture and replay
//!
//! This crate provides the pure engine of the papertrail audit system:
//! - Scalar value and field type tags (`ScalarValue`, `FieldType`)
//! - The string codec every captured value round-trips through
//! - Registration-time type schemas and the `Auditable` capability trait
//! - Diff capture with create/edit/delete inclusion rules
//! - Entity reconstruction from stored attribute records
//! - Log record assembly with identity-key extraction
//!
//! The crate performs no I/O. Persistence lives in `papertrail-store`;
//! change detection (which entities changed in a unit of work) belongs to
//! the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use papertrail_core::{capture, reconstruct, CaptureConfig, ChangeTag, Operation};
//!
//! let records = capture(Some(&before), Some(&after), Operation::Edit,
//!     &CaptureConfig::default())?;
//!
//! // Later: rebuild the post-edit state from the stored records
//! let rebuilt = reconstruct::<Invoice>(&records, ChangeTag::New)?;
//! assert!(rebuilt.warnings.is_empty());
//! ```

mod assembler;
mod capture;
pub mod codec;
mod error;
mod reconstruct;
mod record;
mod schema;
mod value;

#[cfg(test)]
mod testing;

pub use assembler::{Assembler, IdentityResolver, RegistryIdentityResolver};
pub use capture::{capture, entities_equal, CaptureConfig};
pub use error::{Error, Result};
pub use reconstruct::{reconstruct, reconstruct_into, Reconstruction, ReconstructWarning};
pub use record::{AttributeRecord, ChangeTag, LogRecord, Operation};
pub use schema::{Auditable, FieldDef, SchemaRegistry, TypeSchema};
pub use value::{FieldType, ScalarValue};
