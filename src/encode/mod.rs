//! Circuit input encoding.
//!
//! # Architecture
//!
//! - [`DataType`]: closed sum of every encodable value, with [`StructMap`] records
//! - [`encode`]: exhaustive recursive serializer producing [`InputValue`]
//! - [`canonicalize`]: deterministic JSON text for an [`InputValue`]
//! - [`Limits`]: nesting and container size bounds enforced while encoding
//!
//! JSON documents convert into [`DataType`] through `TryFrom<&serde_json::Value>`.

mod data;
mod import;
mod jcs;
mod limits;
mod serializer;
mod value;

pub use data::{DataType, StructMap};
pub use jcs::{canonicalize, compare_keys_utf16};
pub use limits::Limits;
pub use serializer::{encode, encode_with_limits};
pub use value::InputValue;
