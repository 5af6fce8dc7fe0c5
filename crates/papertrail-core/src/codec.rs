//! String codec for scalar field values
//!
//! Every captured value crosses the storage boundary as a canonical string
//! (or the null sentinel), paired with its [`FieldType`] tag. Encoding and
//! decoding are exact inverses for every representable value, so a record
//! written today decodes to the same value years later regardless of what
//! the runtime type looked like in between.

use crate::error::{Error, Result};
use crate::value::{FieldType, ScalarValue};
use chrono::DateTime;

/// Encode a scalar value to its canonical string form
///
/// `Null` encodes to `None`. A value whose variant does not match the
/// declared type is a schema violation and fails with
/// [`Error::TypeConversion`].
pub fn encode(value: &ScalarValue, field_type: FieldType) -> Result<Option<String>> {
    let encoded = match (value, field_type) {
        (ScalarValue::Null, _) => return Ok(None),
        (ScalarValue::Bool(b), FieldType::Bool) => b.to_string(),
        (ScalarValue::Int(i), FieldType::Int) => i.to_string(),
        // `{}` on f64 is the shortest representation that parses back exactly
        (ScalarValue::Float(f), FieldType::Float) => f.to_string(),
        (ScalarValue::Str(s), FieldType::String) => s.clone(),
        (ScalarValue::DateTime(dt), FieldType::DateTime) => dt.to_rfc3339(),
        (ScalarValue::Enum(name), FieldType::Enum) => name.clone(),
        (other, expected) => {
            return Err(Error::TypeConversion {
                value: other.to_string(),
                expected,
            })
        }
    };
    Ok(Some(encoded))
}

/// Decode a canonical string back to a scalar value of the declared type
///
/// `None` decodes to `Null` for every type. A string that does not parse as
/// the declared type (stale descriptor, corrupted record, or a source field
/// whose type changed since capture) fails with [`Error::TypeConversion`].
pub fn decode(encoded: Option<&str>, field_type: FieldType) -> Result<ScalarValue> {
    let Some(raw) = encoded else {
        return Ok(ScalarValue::Null);
    };

    let conversion_error = || Error::TypeConversion {
        value: raw.to_string(),
        expected: field_type,
    };

    let value = match field_type {
        FieldType::Bool => ScalarValue::Bool(raw.parse().map_err(|_| conversion_error())?),
        FieldType::Int => ScalarValue::Int(raw.parse().map_err(|_| conversion_error())?),
        FieldType::Float => ScalarValue::Float(raw.parse().map_err(|_| conversion_error())?),
        FieldType::String => ScalarValue::Str(raw.to_string()),
        FieldType::DateTime => {
            let dt = DateTime::parse_from_rfc3339(raw).map_err(|_| conversion_error())?;
            ScalarValue::DateTime(dt.with_timezone(&chrono::Utc))
        }
        FieldType::Enum => ScalarValue::Enum(raw.to_string()),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn round_trip(value: ScalarValue, field_type: FieldType) {
        let encoded = encode(&value, field_type).unwrap();
        let decoded = decode(encoded.as_deref(), field_type).unwrap();
        assert_eq!(decoded, value, "round trip failed for {:?}", field_type);
    }

    #[test]
    fn test_round_trip_all_types() {
        round_trip(ScalarValue::Bool(true), FieldType::Bool);
        round_trip(ScalarValue::Bool(false), FieldType::Bool);
        round_trip(ScalarValue::Int(0), FieldType::Int);
        round_trip(ScalarValue::Int(i64::MIN), FieldType::Int);
        round_trip(ScalarValue::Int(i64::MAX), FieldType::Int);
        round_trip(ScalarValue::Float(0.1), FieldType::Float);
        round_trip(ScalarValue::Float(-1234.5678), FieldType::Float);
        round_trip(ScalarValue::Str("".into()), FieldType::String);
        round_trip(ScalarValue::Str("hello, world".into()), FieldType::String);
        round_trip(ScalarValue::Enum("Open".into()), FieldType::Enum);
        round_trip(
            ScalarValue::DateTime(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap()),
            FieldType::DateTime,
        );
    }

    #[test]
    fn test_round_trip_null() {
        for ty in [
            FieldType::Bool,
            FieldType::Int,
            FieldType::Float,
            FieldType::String,
            FieldType::DateTime,
            FieldType::Enum,
        ] {
            assert_eq!(encode(&ScalarValue::Null, ty).unwrap(), None);
            assert_eq!(decode(None, ty).unwrap(), ScalarValue::Null);
        }
    }

    #[test]
    fn test_encode_rejects_mismatched_variant() {
        let err = encode(&ScalarValue::Str("7".into()), FieldType::Int).unwrap_err();
        assert!(matches!(err, Error::TypeConversion { .. }));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode(Some("not-a-number"), FieldType::Int),
            Err(Error::TypeConversion { .. })
        ));
        assert!(matches!(
            decode(Some("yes"), FieldType::Bool),
            Err(Error::TypeConversion { .. })
        ));
        assert!(matches!(
            decode(Some("2024-13-99"), FieldType::DateTime),
            Err(Error::TypeConversion { .. })
        ));
    }
}
