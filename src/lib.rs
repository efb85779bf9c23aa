//! Circuit Input - typed values for zero-knowledge circuit inputs.
//!
//! This crate provides exact arithmetic over the BN254 scalar field, fixed-width
//! integers layered on it, fixed and bounded containers, and an encoder that
//! turns any composition of them into the structured "circuit input" consumed
//! by witness execution and input file emission.
//!
//! # Architecture
//!
//! - [`field`] - BN254 scalar field elements, decomposition, modulus tables
//! - [`integer`] - `u8`..`u64` / `i8`..`i64` bounded integers
//! - [`scalar`] - boolean and text inputs
//! - [`container`] - fixed-length arrays and bounded vectors
//! - [`encode`] - the `DataType` sum, serializer and canonical JSON
//! - [`error`] - numbered error codes
//!
//! # Example
//!
//! ```
//! use circuit_input::{encode, BoundedVec, DataType, FieldElement, StructMap, U8};
//!
//! let mut xs = BoundedVec::<FieldElement>::with_default(3);
//! xs.push(FieldElement::from(5u8)).unwrap();
//!
//! let record = StructMap::new()
//!     .with("count", U8::new(7).unwrap())
//!     .with("xs", xs);
//! let input = encode(&DataType::from(record)).unwrap();
//!
//! assert_eq!(input.get("count").and_then(|v| v.as_str()), Some("7"));
//! ```
//!
//! The field modulus and its byte/bit tables are generated by build.rs from
//! `field_params.json`.

// Library code must avoid unwrap/expect/panic.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod container;
pub mod encode;
pub mod error;
pub mod field;
pub mod integer;
pub mod scalar;

// Re-export commonly used types
pub use container::{BoundedVec, FixedArray};
pub use encode::{canonicalize, encode, encode_with_limits, DataType, InputValue, Limits, StructMap};
pub use error::{ErrorCode, InputResult};
pub use field::FieldElement;
pub use integer::{BoundedInt, IntegerKind, IntegerValue, I16, I32, I64, I8, U16, U32, U64, U8};
pub use scalar::{Boolean, TextValue};
