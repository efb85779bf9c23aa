//! The closed set of values that can be encoded as circuit input.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::container::{BoundedVec, FixedArray};
use crate::field::FieldElement;
use crate::integer::{BoundedInt, IntegerValue, IntegerWidth};
use crate::scalar::{Boolean, TextValue};

/// Any encodable value.
///
/// Containers hold `DataType` elements, so records and sequences nest to
/// any depth the encoder limits allow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// Field element; encodes as `0x` hex.
    Field(FieldElement),
    /// Bounded integer of any width; encodes as signed decimal.
    Integer(IntegerValue),
    /// Boolean; encodes as a native boolean.
    Bool(Boolean),
    /// Text; encodes as the raw string.
    Text(TextValue),
    /// Fixed-length array; encodes as a sequence.
    Array(FixedArray<DataType>),
    /// Bounded vector; encodes as `{storage, len}`.
    Vec(BoundedVec<DataType>),
    /// Named record; encodes as a mapping.
    Struct(StructMap),
}

impl DataType {
    /// Variant name for logs and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataType::Field(_) => "field",
            DataType::Integer(_) => "integer",
            DataType::Bool(_) => "bool",
            DataType::Text(_) => "text",
            DataType::Array(_) => "array",
            DataType::Vec(_) => "vec",
            DataType::Struct(_) => "struct",
        }
    }
}

impl From<FieldElement> for DataType {
    fn from(value: FieldElement) -> Self {
        DataType::Field(value)
    }
}

impl From<IntegerValue> for DataType {
    fn from(value: IntegerValue) -> Self {
        DataType::Integer(value)
    }
}

impl<W: IntegerWidth> From<BoundedInt<W>> for DataType {
    fn from(value: BoundedInt<W>) -> Self {
        DataType::Integer(value.into())
    }
}

impl From<Boolean> for DataType {
    fn from(value: Boolean) -> Self {
        DataType::Bool(value)
    }
}

impl From<bool> for DataType {
    fn from(value: bool) -> Self {
        DataType::Bool(value.into())
    }
}

impl From<TextValue> for DataType {
    fn from(value: TextValue) -> Self {
        DataType::Text(value)
    }
}

impl From<StructMap> for DataType {
    fn from(value: StructMap) -> Self {
        DataType::Struct(value)
    }
}

impl<T: Into<DataType>> From<FixedArray<T>> for DataType {
    fn from(value: FixedArray<T>) -> Self {
        let items = value.into_vec().into_iter().map(Into::into).collect();
        DataType::Array(FixedArray::from_vec(items))
    }
}

impl<T: Into<DataType> + 'static> From<BoundedVec<T>> for DataType {
    fn from(value: BoundedVec<T>) -> Self {
        DataType::Vec(value.map_into(Into::into))
    }
}

/// A named record: field name to value, iterated in key order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructMap(BTreeMap<String, DataType>);

impl StructMap {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, returning any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<DataType>) -> Option<DataType> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<DataType>) -> Self {
        self.insert(key, value);
        self
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&DataType> {
        self.0.get(key)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fields in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, DataType> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<DataType>> FromIterator<(K, V)> for StructMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        StructMap(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'a> IntoIterator for &'a StructMap {
    type Item = (&'a String, &'a DataType);
    type IntoIter = btree_map::Iter<'a, String, DataType>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::{IntegerKind, U8};

    #[test]
    fn test_leaf_conversions() {
        assert_eq!(DataType::from(true).type_name(), "bool");
        assert_eq!(DataType::from(FieldElement::from(3u8)).type_name(), "field");
        match DataType::from(U8::new(7).unwrap()) {
            DataType::Integer(v) => assert_eq!(v.kind(), IntegerKind::U8),
            other => panic!("expected integer, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_container_conversions() {
        let arr = FixedArray::from([FieldElement::from(1u8), FieldElement::from(2u8)]);
        match DataType::from(arr) {
            DataType::Array(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(*items.get(1).unwrap(), DataType::Field(FieldElement::from(2u8)));
            }
            other => panic!("expected array, got {}", other.type_name()),
        }

        let mut vec = BoundedVec::<FieldElement>::with_default(3);
        vec.push(FieldElement::from(9u8)).unwrap();
        match DataType::from(vec) {
            DataType::Vec(mut v) => {
                assert_eq!(v.len(), 1);
                assert_eq!(v.max_len(), 3);
                v.pop().unwrap();
                assert_eq!(v.storage()[0], DataType::Field(FieldElement::zero()));
            }
            other => panic!("expected vec, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_struct_map_keys_are_ordered() {
        let record = StructMap::new()
            .with("b", true)
            .with("a", FieldElement::one())
            .with("c", TextValue::new("x"));
        let keys: Vec<&str> = record.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("b"), Some(&DataType::from(true)));
        assert!(record.get("z").is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let mut record = StructMap::new();
        assert!(record.insert("k", false).is_none());
        assert_eq!(record.insert("k", true), Some(DataType::from(false)));
        assert_eq!(record.len(), 1);
    }
}
