//! Encoded circuit input values.
//!
//! This is the plain structured value handed to witness execution and file
//! emission: mappings, sequences, strings, booleans and the integer `len`
//! of bounded vectors. Objects use `BTreeMap`; serialization emits their
//! keys in UTF-16 code unit order, the same order as [`canonicalize`].
//!
//! [`canonicalize`]: super::canonicalize

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use super::jcs::compare_keys_utf16;

/// A circuit input value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputValue {
    /// Native boolean.
    Bool(bool),
    /// Unsigned integer; used for the `len` of bounded vectors.
    Number(u64),
    /// String: field hex, integer decimal, or raw text.
    String(String),
    /// Ordered sequence.
    Array(Vec<InputValue>),
    /// Mapping with ordered keys.
    Object(BTreeMap<String, InputValue>),
}

impl InputValue {
    /// Returns the boolean value if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            InputValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a Number, None otherwise.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            InputValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            InputValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the array if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&Vec<InputValue>> {
        match self {
            InputValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get a value from an object by key.
    pub fn get(&self, key: &str) -> Option<&InputValue> {
        match self {
            InputValue::Object(map) => map.get(key),
            _ => None,
        }
    }
}

impl Serialize for InputValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            InputValue::Bool(b) => serializer.serialize_bool(*b),
            InputValue::Number(n) => serializer.serialize_u64(*n),
            InputValue::String(s) => serializer.serialize_str(s),
            InputValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            InputValue::Object(map) => {
                let mut entries: Vec<(&String, &InputValue)> = map.iter().collect();
                entries.sort_by(|(a, _), (b, _)| compare_keys_utf16(a, b));
                let mut out = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}
