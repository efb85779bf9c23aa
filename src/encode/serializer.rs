//! Recursive encoder from [`DataType`] to [`InputValue`].
//!
//! # Encoded shapes
//!
//! | Value        | Encoded as                                   |
//! |--------------|----------------------------------------------|
//! | field        | `"0x…"` lowercase hex, no padding            |
//! | integer      | signed decimal string                        |
//! | bool         | native boolean                               |
//! | text         | raw string                                   |
//! | array        | sequence                                     |
//! | vec          | `{"storage": [all max_len slots], "len": n}` |
//! | struct       | mapping with the same keys                   |
//!
//! Bounded vectors are never truncated: unused default slots are emitted.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::data::DataType;
use super::limits::Limits;
use super::value::InputValue;
use crate::error::{ErrorCode, InputResult};

/// Encode `value` under the default [`Limits`].
pub fn encode(value: &DataType) -> InputResult<InputValue> {
    encode_with_limits(value, &Limits::default())
}

/// Encode `value`, rejecting shapes that exceed `limits`.
pub fn encode_with_limits(value: &DataType, limits: &Limits) -> InputResult<InputValue> {
    let encoded = Encoder { limits }.visit(value, 0)?;
    debug!(root = value.type_name(), "encoded circuit input");
    Ok(encoded)
}

struct Encoder<'a> {
    limits: &'a Limits,
}

impl Encoder<'_> {
    /// `depth` counts the composites enclosing `value`.
    fn visit(&self, value: &DataType, depth: u64) -> InputResult<InputValue> {
        match value {
            DataType::Field(f) => Ok(InputValue::String(f.to_hex())),
            DataType::Integer(i) => Ok(InputValue::String(i.to_decimal())),
            DataType::Bool(b) => Ok(b.encode()),
            DataType::Text(t) => Ok(t.encode()),
            DataType::Array(items) => {
                let depth = self.enter(depth)?;
                self.check_len(items.len())?;
                let encoded = items
                    .iter()
                    .map(|item| self.visit(item, depth))
                    .collect::<InputResult<Vec<_>>>()?;
                Ok(InputValue::Array(encoded))
            }
            DataType::Vec(v) => {
                let depth = self.enter(depth)?;
                self.check_len(v.max_len())?;
                let storage = v
                    .storage()
                    .iter()
                    .map(|slot| self.visit(slot, depth))
                    .collect::<InputResult<Vec<_>>>()?;
                let mut out = BTreeMap::new();
                out.insert("storage".to_string(), InputValue::Array(storage));
                out.insert("len".to_string(), InputValue::Number(v.len() as u64));
                Ok(InputValue::Object(out))
            }
            DataType::Struct(record) => {
                let depth = self.enter(depth)?;
                trace!(depth, fields = record.len(), "encoding record");
                let mut out = BTreeMap::new();
                for (key, field) in record {
                    out.insert(key.clone(), self.visit(field, depth)?);
                }
                Ok(InputValue::Object(out))
            }
        }
    }

    fn enter(&self, depth: u64) -> InputResult<u64> {
        let depth = depth + 1;
        if depth > self.limits.max_nesting_depth {
            return Err(ErrorCode::E501_NestingTooDeep {
                depth,
                limit: self.limits.max_nesting_depth,
            });
        }
        Ok(depth)
    }

    fn check_len(&self, len: usize) -> InputResult<()> {
        if len as u64 > self.limits.max_container_len {
            return Err(ErrorCode::E502_ContainerTooLarge {
                len: len as u64,
                limit: self.limits.max_container_len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{BoundedVec, FixedArray};
    use crate::encode::StructMap;
    use crate::field::FieldElement;
    use crate::integer::I8;
    use crate::scalar::TextValue;

    #[test]
    fn test_leaves() {
        assert_eq!(
            encode(&FieldElement::from(255u32).into()).unwrap(),
            InputValue::String("0xff".to_string())
        );
        assert_eq!(
            encode(&FieldElement::zero().into()).unwrap(),
            InputValue::String("0x0".to_string())
        );
        assert_eq!(
            encode(&I8::new(-5).unwrap().into()).unwrap(),
            InputValue::String("-5".to_string())
        );
        assert_eq!(encode(&true.into()).unwrap(), InputValue::Bool(true));
        assert_eq!(
            encode(&TextValue::new("abc").into()).unwrap(),
            InputValue::String("abc".to_string())
        );
    }

    #[test]
    fn test_vec_exposes_all_slots() {
        let mut v = BoundedVec::<FieldElement>::with_default(3);
        v.push(FieldElement::from(5u8)).unwrap();
        let encoded = encode(&v.into()).unwrap();
        assert_eq!(encoded.get("len"), Some(&InputValue::Number(1)));
        let storage = encoded.get("storage").and_then(|s| s.as_array()).unwrap();
        assert_eq!(storage.len(), 3);
        assert_eq!(storage[0].as_str(), Some("0x5"));
        assert_eq!(storage[2].as_str(), Some("0x0"));
    }

    #[test]
    fn test_nesting_limit() {
        let inner = StructMap::new().with("x", true);
        let outer = StructMap::new().with("inner", inner);
        let limits = Limits {
            max_nesting_depth: 1,
            max_container_len: 8,
        };
        assert_eq!(
            encode_with_limits(&outer.clone().into(), &limits),
            Err(ErrorCode::E501_NestingTooDeep { depth: 2, limit: 1 })
        );
        let relaxed = Limits {
            max_nesting_depth: 2,
            ..limits
        };
        assert!(encode_with_limits(&outer.into(), &relaxed).is_ok());
    }

    #[test]
    fn test_container_limit_counts_capacity() {
        let limits = Limits {
            max_nesting_depth: 4,
            max_container_len: 2,
        };
        let v = BoundedVec::<FieldElement>::with_default(3);
        assert_eq!(
            encode_with_limits(&v.into(), &limits),
            Err(ErrorCode::E502_ContainerTooLarge { len: 3, limit: 2 })
        );
        let arr = FixedArray::from([true, false]);
        assert!(encode_with_limits(&arr.into(), &limits).is_ok());
    }
}
