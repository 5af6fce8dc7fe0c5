//! Error types for papertrail-core

use crate::record::Operation;
use crate::value::FieldType;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// A snapshot required by the operation kind was not supplied
    #[error("missing {side} snapshot for {operation:?} capture")]
    MissingState {
        /// Which snapshot was absent ("old" or "new")
        side: &'static str,
        /// The operation being captured
        operation: Operation,
    },

    /// Old and new snapshots are of different types
    #[error("cannot diff snapshots of different types: {left} vs {right}")]
    TypeMismatch { left: String, right: String },

    /// An encoded value could not be converted to or from its declared type
    #[error("cannot convert {value:?} as {expected}")]
    TypeConversion { value: String, expected: FieldType },

    /// No unique identity field could be resolved for a type
    #[error("no unique identity for {type_name}: {reason}")]
    MissingIdentity { type_name: String, reason: String },

    /// A field name does not exist on the target type
    #[error("unknown property {field} on {type_name}")]
    UnknownProperty { type_name: String, field: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
