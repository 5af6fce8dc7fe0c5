//! Shared fixtures for the crate's tests

use papertrail_core::{
    Assembler, Auditable, Error, FieldDef, FieldType, LogRecord, Operation,
    RegistryIdentityResolver, Result, ScalarValue, SchemaRegistry, TypeSchema,
};
use std::sync::LazyLock;

/// Minimal auditable entity used across the store tests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Account {
    pub id: i64,
    pub balance: f64,
    pub owner: String,
}

static ACCOUNT_SCHEMA: LazyLock<TypeSchema> = LazyLock::new(|| {
    TypeSchema::new("bank.Account")
        .with_field(FieldDef::int("id").identity())
        .with_field(FieldDef::float("balance"))
        .with_field(FieldDef::string("owner"))
});

impl Auditable for Account {
    fn type_name(&self) -> &'static str {
        "bank.Account"
    }

    fn schema(&self) -> &'static TypeSchema {
        &ACCOUNT_SCHEMA
    }

    fn get_field(&self, name: &str) -> Option<ScalarValue> {
        match name {
            "id" => Some(self.id.into()),
            "balance" => Some(self.balance.into()),
            "owner" => Some(self.owner.clone().into()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: ScalarValue) -> Result<()> {
        let conversion = |value: &ScalarValue, expected: FieldType| Error::TypeConversion {
            value: value.to_string(),
            expected,
        };
        match name {
            "id" => {
                self.id = value.as_int().ok_or_else(|| conversion(&value, FieldType::Int))?
            }
            "balance" => {
                self.balance = value
                    .as_float()
                    .ok_or_else(|| conversion(&value, FieldType::Float))?
            }
            "owner" => {
                self.owner = value
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| conversion(&value, FieldType::String))?
            }
            _ => {
                return Err(Error::UnknownProperty {
                    type_name: self.type_name().to_string(),
                    field: name.to_string(),
                })
            }
        }
        Ok(())
    }
}

pub fn account(id: i64, balance: f64, owner: &str) -> Account {
    Account {
        id,
        balance,
        owner: owner.to_string(),
    }
}

pub fn account_assembler() -> Assembler<RegistryIdentityResolver> {
    let mut registry = SchemaRegistry::new();
    registry.register(ACCOUNT_SCHEMA.clone());
    Assembler::new(RegistryIdentityResolver::new(registry), "auditor")
}

/// Assemble a single-sided record for `subject` (Create or Delete)
pub fn account_record(subject: &Account, operation: Operation) -> LogRecord {
    let assembler = account_assembler();
    match operation {
        Operation::Create => assembler.assemble(None, Some(subject), operation),
        Operation::Delete => assembler.assemble(Some(subject), None, operation),
        Operation::Edit => assembler.assemble(Some(subject), Some(subject), operation),
    }
    .unwrap()
}
