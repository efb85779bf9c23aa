//! Fixed-width signed and unsigned integers.
//!
//! [`BoundedInt<W>`] pairs an integer value with a compile-time width tag.
//! Construction validates the value against the width's static bounds;
//! the aliases [`U8`] through [`I64`] name the supported widths.
//! [`IntegerValue`] erases the tag so integers of any width fit in one
//! encodable sum type.

mod bounded;
mod kind;
mod value;

pub use bounded::BoundedInt;
pub use kind::{
    I16Kind, I32Kind, I64Kind, I8Kind, IntegerKind, IntegerWidth, U16Kind, U32Kind, U64Kind,
    U8Kind,
};
pub use value::IntegerValue;

/// Unsigned 8-bit integer, `[0, 255]`.
pub type U8 = BoundedInt<U8Kind>;
/// Unsigned 16-bit integer.
pub type U16 = BoundedInt<U16Kind>;
/// Unsigned 32-bit integer.
pub type U32 = BoundedInt<U32Kind>;
/// Unsigned 64-bit integer.
pub type U64 = BoundedInt<U64Kind>;
/// Signed 8-bit integer, `[-128, 127]`.
pub type I8 = BoundedInt<I8Kind>;
/// Signed 16-bit integer.
pub type I16 = BoundedInt<I16Kind>;
/// Signed 32-bit integer.
pub type I32 = BoundedInt<I32Kind>;
/// Signed 64-bit integer.
pub type I64 = BoundedInt<I64Kind>;
