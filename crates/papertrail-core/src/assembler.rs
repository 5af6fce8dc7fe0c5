//! Assembly of persistable log records

use crate::capture::{capture, CaptureConfig};
use crate::error::{Error, Result};
use crate::record::{LogRecord, Operation};
use crate::schema::{Auditable, SchemaRegistry};
use chrono::Utc;

/// Resolver from a logical type name to its identity field name
///
/// Abstracted behind a trait so the core never depends on a particular
/// persistence framework's metadata API. Implementations must return
/// exactly one field name or fail; an absent or ambiguous primary key is
/// rejected rather than guessed.
pub trait IdentityResolver {
    /// The name of the single identity field of `type_name`
    fn identity_field(&self, type_name: &str) -> Result<String>;
}

/// Identity resolver backed by a [`SchemaRegistry`]
#[derive(Debug, Clone)]
pub struct RegistryIdentityResolver {
    registry: SchemaRegistry,
}

impl RegistryIdentityResolver {
    /// Create a resolver over a registry
    pub fn new(registry: SchemaRegistry) -> Self {
        Self { registry }
    }
}

impl IdentityResolver for RegistryIdentityResolver {
    fn identity_field(&self, type_name: &str) -> Result<String> {
        let schema = self.registry.get(type_name).ok_or_else(|| Error::MissingIdentity {
            type_name: type_name.to_string(),
            reason: "type is not registered".to_string(),
        })?;
        Ok(schema.identity_field()?.name.clone())
    }
}

/// Builds immutable [`LogRecord`]s from entity change snapshots
///
/// Holds only constructor-injected collaborators, so one assembler can be
/// shared across concurrent captures.
#[derive(Debug, Clone)]
pub struct Assembler<R: IdentityResolver> {
    resolver: R,
    actor: String,
    config: CaptureConfig,
}

impl<R: IdentityResolver> Assembler<R> {
    /// Create an assembler writing records attributed to `actor`
    pub fn new(resolver: R, actor: impl Into<String>) -> Self {
        Self {
            resolver,
            actor: actor.into(),
            config: CaptureConfig::default(),
        }
    }

    /// Override the capture configuration
    pub fn with_config(mut self, config: CaptureConfig) -> Self {
        self.config = config;
        self
    }

    /// Assemble one log record for an entity change
    ///
    /// Delegates attribute production to [`capture`], then resolves the
    /// subject's identity field and reads its integer value for the
    /// record's foreign key. The record is immutable once returned; its
    /// `id` stays zero until the store assigns one.
    pub fn assemble(
        &self,
        old: Option<&dyn Auditable>,
        new: Option<&dyn Auditable>,
        operation: Operation,
    ) -> Result<LogRecord> {
        let attributes = capture(old, new, operation, &self.config)?;

        let subject = new.or(old).ok_or(Error::MissingState {
            side: "new",
            operation,
        })?;
        let identity = self.resolver.identity_field(subject.type_name())?;
        let subject_key = subject
            .get_field(&identity)
            .and_then(|v| v.as_int())
            .ok_or_else(|| Error::MissingIdentity {
                type_name: subject.type_name().to_string(),
                reason: format!("identity field {} holds no integer value", identity),
            })?;

        Ok(LogRecord {
            id: 0,
            timestamp: Utc::now(),
            actor: self.actor.clone(),
            operation,
            subject_type: subject.type_name().to_string(),
            subject_key,
            attributes,
        })
    }
}
