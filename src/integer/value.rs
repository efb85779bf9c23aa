//! Width-erased integer for heterogeneous records.

use std::fmt;

use num_bigint::BigInt;

use super::bounded::BoundedInt;
use super::kind::{IntegerKind, IntegerWidth};
use crate::error::InputResult;
use crate::field::FieldElement;

/// An integer of any supported width.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntegerValue {
    kind: IntegerKind,
    value: BigInt,
}

impl IntegerValue {
    /// Validate `value` against `kind`'s bounds.
    pub fn new(kind: IntegerKind, value: impl Into<BigInt>) -> InputResult<Self> {
        let value = value.into();
        kind.check(&value)?;
        Ok(Self { kind, value })
    }

    /// Width of the integer.
    pub fn kind(&self) -> IntegerKind {
        self.kind
    }

    /// The integer value.
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// The value reduced modulo `P`.
    pub fn to_field(&self) -> FieldElement {
        FieldElement::from_bigint(&self.value)
    }

    /// Decimal string of the value, signed when negative.
    pub fn to_decimal(&self) -> String {
        self.value.to_string()
    }
}

impl fmt::Display for IntegerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<W: IntegerWidth> From<BoundedInt<W>> for IntegerValue {
    fn from(value: BoundedInt<W>) -> Self {
        Self {
            kind: W::KIND,
            value: value.value().clone(),
        }
    }
}

impl<W: IntegerWidth> From<&BoundedInt<W>> for IntegerValue {
    fn from(value: &BoundedInt<W>) -> Self {
        Self {
            kind: W::KIND,
            value: value.value().clone(),
        }
    }
}
