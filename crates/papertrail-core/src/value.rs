//! Scalar value types for captured attributes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar value read from or written to an audited field
///
/// Only flat scalar data is representable. Composite values (nested
/// structs, collections, references) are excluded from auditing entirely,
/// so the enum has no variant for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum ScalarValue {
    /// No value / null
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value (counts, keys, etc.)
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    Str(String),
    /// Timestamp value
    DateTime(DateTime<Utc>),
    /// Enum value, carried as the variant name
    Enum(String),
}

/// Type tag for an audited field
///
/// Stored with every attribute record so a value can be decoded long after
/// the process that captured it is gone. A stable logical tag rather than
/// any runtime type identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Bool,
    Int,
    Float,
    String,
    DateTime,
    Enum,
}

impl ScalarValue {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// Try to get this value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScalarValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ScalarValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ScalarValue::Float(f) => Some(*f),
            ScalarValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::Str(s) => Some(s),
            ScalarValue::Enum(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a timestamp
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            ScalarValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// The field type this value belongs to, if it is not null
    pub fn field_type(&self) -> Option<FieldType> {
        match self {
            ScalarValue::Null => None,
            ScalarValue::Bool(_) => Some(FieldType::Bool),
            ScalarValue::Int(_) => Some(FieldType::Int),
            ScalarValue::Float(_) => Some(FieldType::Float),
            ScalarValue::Str(_) => Some(FieldType::String),
            ScalarValue::DateTime(_) => Some(FieldType::DateTime),
            ScalarValue::Enum(_) => Some(FieldType::Enum),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Bool => "bool",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::String => "string",
            FieldType::DateTime => "datetime",
            FieldType::Enum => "enum",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => write!(f, "null"),
            ScalarValue::Bool(b) => write!(f, "{}", b),
            ScalarValue::Int(i) => write!(f, "{}", i),
            ScalarValue::Float(fl) => write!(f, "{}", fl),
            ScalarValue::Str(s) => write!(f, "\"{}\"", s),
            ScalarValue::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            ScalarValue::Enum(s) => write!(f, "{}", s),
        }
    }
}

// Convenient From implementations
impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        ScalarValue::Bool(b)
    }
}

impl From<i64> for ScalarValue {
    fn from(i: i64) -> Self {
        ScalarValue::Int(i)
    }
}

impl From<i32> for ScalarValue {
    fn from(i: i32) -> Self {
        ScalarValue::Int(i as i64)
    }
}

impl From<f64> for ScalarValue {
    fn from(f: f64) -> Self {
        ScalarValue::Float(f)
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        ScalarValue::Str(s)
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::Str(s.to_string())
    }
}

impl From<DateTime<Utc>> for ScalarValue {
    fn from(dt: DateTime<Utc>) -> Self {
        ScalarValue::DateTime(dt)
    }
}

impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(ScalarValue::Null)
    }
}
