//! Building [`DataType`] values from JSON documents.
//!
//! Booleans become [`Boolean`], integer numbers become [`FieldElement`],
//! strings become [`TextValue`], arrays become [`FixedArray`] and objects
//! become [`StructMap`]. `null` and fractional numbers have no circuit
//! representation and are rejected with `E500_UnsupportedValueType`.

use serde_json::Value;

use super::data::{DataType, StructMap};
use crate::container::FixedArray;
use crate::error::{ErrorCode, InputResult};
use crate::field::FieldElement;
use crate::scalar::{Boolean, TextValue};

impl TryFrom<&Value> for DataType {
    type Error = ErrorCode;

    fn try_from(value: &Value) -> InputResult<Self> {
        match value {
            Value::Null => Err(ErrorCode::E500_UnsupportedValueType("null".to_string())),
            Value::Bool(b) => Ok(DataType::Bool(Boolean::new(*b))),
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Ok(DataType::Field(FieldElement::from(u)))
                } else if let Some(i) = n.as_i64() {
                    Ok(DataType::Field(FieldElement::from(i)))
                } else {
                    Err(ErrorCode::E500_UnsupportedValueType(format!(
                        "non-integer number {n}"
                    )))
                }
            }
            Value::String(s) => Ok(DataType::Text(TextValue::new(s.as_str()))),
            Value::Array(items) => {
                let items = items
                    .iter()
                    .map(DataType::try_from)
                    .collect::<InputResult<Vec<_>>>()?;
                Ok(DataType::Array(FixedArray::from_vec(items)))
            }
            Value::Object(map) => {
                let mut record = StructMap::new();
                for (key, item) in map {
                    record.insert(key.as_str(), DataType::try_from(item)?);
                }
                Ok(DataType::Struct(record))
            }
        }
    }
}

impl TryFrom<Value> for DataType {
    type Error = ErrorCode;

    fn try_from(value: Value) -> InputResult<Self> {
        DataType::try_from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_import_record() {
        let data = DataType::try_from(&json!({"x": 5, "ok": true, "name": "n", "xs": [1, 2]}))
            .unwrap();
        let DataType::Struct(record) = data else {
            panic!("expected struct");
        };
        assert_eq!(record.get("x"), Some(&DataType::Field(FieldElement::from(5u8))));
        assert_eq!(record.get("ok"), Some(&DataType::from(true)));
        assert_eq!(record.get("name"), Some(&DataType::Text(TextValue::new("n"))));
        match record.get("xs") {
            Some(DataType::Array(xs)) => assert_eq!(xs.len(), 2),
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_reduces() {
        let data = DataType::try_from(&json!(-1)).unwrap();
        assert_eq!(data, DataType::Field(-FieldElement::one()));
    }

    #[test]
    fn test_unsupported_shapes() {
        assert_eq!(
            DataType::try_from(&json!(null)),
            Err(ErrorCode::E500_UnsupportedValueType("null".to_string()))
        );
        assert_eq!(
            DataType::try_from(&json!({"a": [1.5]})).map_err(|e| e.code()),
            Err(500)
        );
    }
}
