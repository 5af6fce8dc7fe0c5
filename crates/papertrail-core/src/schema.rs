//! Schema descriptors for auditable types
//!
//! Each auditable type declares, once, an ordered list of its scalar fields
//! plus a stable logical type name. The descriptor replaces runtime
//! reflection: capture iterates the declared fields, reconstruction assigns
//! through the [`Auditable`] capability trait, and stored records carry the
//! logical name rather than any runtime type identity.

use crate::error::{Error, Result};
use crate::value::{FieldType, ScalarValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Descriptor for one scalar field of an auditable type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name, unique within the schema
    pub name: String,
    /// Declared scalar type
    pub field_type: FieldType,
    /// Whether this field is the primary-key/identity field
    pub identity: bool,
}

impl FieldDef {
    /// Create a field definition
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            identity: false,
        }
    }

    /// Create a bool field
    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Bool)
    }

    /// Create an int field
    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Int)
    }

    /// Create a float field
    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Float)
    }

    /// Create a string field
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String)
    }

    /// Create a datetime field
    pub fn datetime(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::DateTime)
    }

    /// Create an enum field
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Enum)
    }

    /// Mark this field as the identity field
    pub fn identity(mut self) -> Self {
        self.identity = true;
        self
    }
}

/// Ordered field layout of one auditable type
///
/// Field order is declaration order and is part of the capture contract:
/// attribute records come out in exactly this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSchema {
    /// Stable, fully-qualified logical type name (e.g. "billing.Invoice")
    pub type_name: String,
    /// Scalar fields in declaration order
    pub fields: Vec<FieldDef>,
}

impl TypeSchema {
    /// Create an empty schema for a type
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field definition
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The identity field, if the schema declares exactly one
    ///
    /// Returns an error when zero or more than one field is flagged as
    /// identity; an ambiguous key is rejected rather than guessed.
    pub fn identity_field(&self) -> Result<&FieldDef> {
        let mut found = self.fields.iter().filter(|f| f.identity);
        match (found.next(), found.next()) {
            (Some(field), None) => Ok(field),
            (None, _) => Err(Error::MissingIdentity {
                type_name: self.type_name.clone(),
                reason: "no field is flagged as identity".to_string(),
            }),
            (Some(_), Some(_)) => Err(Error::MissingIdentity {
                type_name: self.type_name.clone(),
                reason: "more than one field is flagged as identity".to_string(),
            }),
        }
    }
}

/// Capability trait implemented by every auditable type
///
/// Field access goes through names rather than reflection; a type opts in
/// by declaring its schema and mapping names to its own fields.
pub trait Auditable {
    /// Stable logical type name, identical to the schema's
    fn type_name(&self) -> &'static str;

    /// The schema describing this type's scalar fields
    fn schema(&self) -> &'static TypeSchema;

    /// Read a scalar field by name; `None` for unknown names
    fn get_field(&self, name: &str) -> Option<ScalarValue>;

    /// Write a scalar field by name
    ///
    /// Errors with [`Error::UnknownProperty`] for names the type does not
    /// have and [`Error::TypeConversion`] for values the field cannot hold.
    fn set_field(&mut self, name: &str, value: ScalarValue) -> Result<()>;
}

/// Registry of type schemas keyed by logical type name
///
/// An explicit registry decouples stored records from any runtime type
/// representation: the identity resolver and query tooling look schemas up
/// by the same string the records carry.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: IndexMap<String, TypeSchema>,
}

impl SchemaRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema, replacing any previous one for the same name
    pub fn register(&mut self, schema: TypeSchema) {
        self.schemas.insert(schema.type_name.clone(), schema);
    }

    /// Look up a schema by logical type name
    pub fn get(&self, type_name: &str) -> Option<&TypeSchema> {
        self.schemas.get(type_name)
    }

    /// Check whether a type is registered
    pub fn contains(&self, type_name: &str) -> bool {
        self.schemas.contains_key(type_name)
    }

    /// Number of registered schemas
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
