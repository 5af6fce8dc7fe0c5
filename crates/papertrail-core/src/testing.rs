//! Shared fixtures for the crate's tests

use crate::error::{Error, Result};
use crate::schema::{Auditable, FieldDef, SchemaRegistry, TypeSchema};
use crate::value::{FieldType, ScalarValue};
use chrono::{DateTime, Utc};
use std::sync::LazyLock;

/// The invoice entity from the audit scenario tests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invoice {
    pub id: i64,
    pub amount: f64,
    pub status: String,
}

static INVOICE_SCHEMA: LazyLock<TypeSchema> = LazyLock::new(|| {
    TypeSchema::new("billing.Invoice")
        .with_field(FieldDef::int("id").identity())
        .with_field(FieldDef::float("amount"))
        .with_field(FieldDef::string("status"))
});

impl Auditable for Invoice {
    fn type_name(&self) -> &'static str {
        "billing.Invoice"
    }

    fn schema(&self) -> &'static TypeSchema {
        &INVOICE_SCHEMA
    }

    fn get_field(&self, name: &str) -> Option<ScalarValue> {
        match name {
            "id" => Some(self.id.into()),
            "amount" => Some(self.amount.into()),
            "status" => Some(self.status.clone().into()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: ScalarValue) -> Result<()> {
        match name {
            "id" => self.id = expect_value(value, FieldType::Int, ScalarValue::as_int)?,
            "amount" => {
                self.amount = expect_value(value, FieldType::Float, ScalarValue::as_float)?
            }
            "status" => {
                self.status =
                    expect_value(value, FieldType::String, |v| v.as_str().map(str::to_string))?
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

/// A second entity type exercising bool, enum, datetime, and null fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Widget {
    pub id: i64,
    pub active: bool,
    pub state: WidgetState,
    pub built_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WidgetState {
    #[default]
    Idle,
    Busy,
}

impl WidgetState {
    fn as_str(self) -> &'static str {
        match self {
            WidgetState::Idle => "Idle",
            WidgetState::Busy => "Busy",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        match name {
            "Idle" => Some(WidgetState::Idle),
            "Busy" => Some(WidgetState::Busy),
            _ => None,
        }
    }
}

static WIDGET_SCHEMA: LazyLock<TypeSchema> = LazyLock::new(|| {
    TypeSchema::new("factory.Widget")
        .with_field(FieldDef::int("id").identity())
        .with_field(FieldDef::bool("active"))
        .with_field(FieldDef::enumeration("state"))
        .with_field(FieldDef::datetime("built_at"))
});

impl Auditable for Widget {
    fn type_name(&self) -> &'static str {
        "factory.Widget"
    }

    fn schema(&self) -> &'static TypeSchema {
        &WIDGET_SCHEMA
    }

    fn get_field(&self, name: &str) -> Option<ScalarValue> {
        match name {
            "id" => Some(self.id.into()),
            "active" => Some(self.active.into()),
            "state" => Some(ScalarValue::Enum(self.state.as_str().to_string())),
            "built_at" => Some(self.built_at.into()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: ScalarValue) -> Result<()> {
        match name {
            "id" => self.id = expect_value(value, FieldType::Int, ScalarValue::as_int)?,
            "active" => self.active = expect_value(value, FieldType::Bool, ScalarValue::as_bool)?,
            "state" => {
                self.state = expect_value(value, FieldType::Enum, |v| {
                    v.as_str().and_then(WidgetState::parse)
                })?
            }
            "built_at" => {
                self.built_at = match value {
                    ScalarValue::Null => None,
                    other => {
                        Some(expect_value(other, FieldType::DateTime, ScalarValue::as_datetime)?)
                    }
                }
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

/// A registry with both fixture types registered
pub fn invoice_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    registry.register(INVOICE_SCHEMA.clone());
    registry.register(WIDGET_SCHEMA.clone());
    registry
}

fn expect_value<T>(
    value: ScalarValue,
    expected: FieldType,
    convert: impl FnOnce(&ScalarValue) -> Option<T>,
) -> Result<T> {
    convert(&value).ok_or_else(|| Error::TypeConversion {
        value: value.to_string(),
        expected,
    })
}
