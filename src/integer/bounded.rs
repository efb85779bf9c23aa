//! Fixed-width integers layered on the field.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive};

use super::kind::{
    I16Kind, I32Kind, I64Kind, I8Kind, IntegerKind, IntegerWidth, U16Kind, U32Kind, U64Kind,
    U8Kind,
};
use crate::error::{ErrorCode, InputResult};
use crate::field::{integer_from_f64, parse_integer, FieldElement};

/// An integer constrained to `[W::KIND.min(), W::KIND.max()]` at construction.
///
/// The value keeps its sign (`I8(-1)` holds `-1`); its field projection is
/// `value mod P`.
///
/// Two families of arithmetic are provided:
///
/// - `+`, `-`, `*`, [`div`](Self::div), [`modulo`](Self::modulo) and
///   [`pow32`](Self::pow32) work on the field projections modulo `P` and
///   re-wrap the residue as the same type without range validation, so a
///   result may leave `[min, max]`. Signed widths read a residue above
///   `(P - 1) / 2` as negative, so `I8(-3) + I8(1)` is `I8(-2)`.
/// - `wrapping_*` work modulo the type's own range and always stay in bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundedInt<W: IntegerWidth> {
    value: BigInt,
    _width: PhantomData<W>,
}

impl<W: IntegerWidth> BoundedInt<W> {
    /// Validate `value` against the type's bounds.
    pub fn new(value: impl Into<BigInt>) -> InputResult<Self> {
        let value = value.into();
        W::KIND.check(&value)?;
        Ok(Self::unchecked(value))
    }

    /// Parse a decimal or `0x` hex string, then validate bounds.
    pub fn parse(input: &str) -> InputResult<Self> {
        Self::new(parse_integer(input)?)
    }

    /// Convert an integral `f64`, then validate bounds.
    pub fn from_f64(value: f64) -> InputResult<Self> {
        Self::new(integer_from_f64(value)?)
    }

    /// Validate a field residue against the type's bounds.
    ///
    /// Signed widths accept `P - k` as `-k`.
    pub fn from_field(element: &FieldElement) -> InputResult<Self> {
        Self::new(Self::representative(element))
    }

    fn unchecked(value: BigInt) -> Self {
        Self {
            value,
            _width: PhantomData,
        }
    }

    /// The width of this type.
    pub fn kind() -> IntegerKind {
        W::KIND
    }

    /// Smallest valid value.
    pub fn min_value() -> Self {
        Self::unchecked(BigInt::from(W::KIND.min()))
    }

    /// Largest valid value.
    pub fn max_value() -> Self {
        Self::unchecked(BigInt::from(W::KIND.max()))
    }

    /// The integer value.
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// The value as `i128`, if it fits.
    pub fn to_i128(&self) -> Option<i128> {
        self.value.to_i128()
    }

    /// Whether the value still lies within the type's bounds.
    ///
    /// Always true for constructed and `wrapping_*` values; field arithmetic
    /// may produce values for which it is false.
    pub fn is_in_range(&self) -> bool {
        W::KIND.contains(&self.value)
    }

    /// The value reduced modulo `P`.
    pub fn to_field(&self) -> FieldElement {
        FieldElement::from_bigint(&self.value)
    }

    /// Hex form of the field projection.
    pub fn to_hex(&self) -> String {
        self.to_field().to_hex()
    }

    /// The integer a residue stands for in this type.
    ///
    /// Signed widths read residues above `(P - 1) / 2` as `r - P`, so a
    /// negative result keeps its sign. Unsigned widths take `r` as is.
    fn representative(element: &FieldElement) -> BigInt {
        let negated = -element;
        if W::KIND.is_signed() && negated < *element {
            -negated.to_bigint()
        } else {
            element.to_bigint()
        }
    }

    fn from_residue(element: FieldElement) -> Self {
        Self::unchecked(Self::representative(&element))
    }

    /// Field division of the projections, re-wrapped as this type.
    pub fn div(&self, other: &Self) -> InputResult<Self> {
        self.to_field().div(&other.to_field()).map(Self::from_residue)
    }

    /// Field remainder of the projections, re-wrapped as this type.
    pub fn modulo(&self, other: &Self) -> InputResult<Self> {
        self.to_field().modulo(&other.to_field()).map(Self::from_residue)
    }

    /// Field exponentiation; the exponent must lie in `[0, 2^32)`.
    pub fn pow32(&self, exponent: &Self) -> InputResult<Self> {
        if exponent.value.is_negative() {
            return Err(ErrorCode::E204_NegativeExponent(exponent.value.to_string()));
        }
        self.to_field()
            .pow32(&exponent.to_field())
            .map(Self::from_residue)
    }

    /// Apply `op` to the values and wrap the result into `[min, max]`.
    fn wrapping(&self, other: &Self, op: impl Fn(&BigInt, &BigInt) -> BigInt) -> Self {
        let min = BigInt::from(W::KIND.min());
        let shifted = op(&self.value, &other.value) - &min;
        Self::unchecked(shifted.mod_floor(&W::KIND.range()) + min)
    }

    /// Addition modulo the type's range.
    pub fn wrapping_add(&self, other: &Self) -> Self {
        self.wrapping(other, |a, b| a + b)
    }

    /// Subtraction modulo the type's range.
    pub fn wrapping_sub(&self, other: &Self) -> Self {
        self.wrapping(other, |a, b| a - b)
    }

    /// Multiplication modulo the type's range.
    pub fn wrapping_mul(&self, other: &Self) -> Self {
        self.wrapping(other, |a, b| a * b)
    }
}

impl<'a, 'b, W: IntegerWidth> Add<&'b BoundedInt<W>> for &'a BoundedInt<W> {
    type Output = BoundedInt<W>;
    fn add(self, rhs: &'b BoundedInt<W>) -> BoundedInt<W> {
        BoundedInt::from_residue(&self.to_field() + &rhs.to_field())
    }
}

impl<'a, 'b, W: IntegerWidth> Sub<&'b BoundedInt<W>> for &'a BoundedInt<W> {
    type Output = BoundedInt<W>;
    fn sub(self, rhs: &'b BoundedInt<W>) -> BoundedInt<W> {
        BoundedInt::from_residue(&self.to_field() - &rhs.to_field())
    }
}

impl<'a, 'b, W: IntegerWidth> Mul<&'b BoundedInt<W>> for &'a BoundedInt<W> {
    type Output = BoundedInt<W>;
    fn mul(self, rhs: &'b BoundedInt<W>) -> BoundedInt<W> {
        BoundedInt::from_residue(&self.to_field() * &rhs.to_field())
    }
}

impl<W: IntegerWidth> Add for BoundedInt<W> {
    type Output = BoundedInt<W>;
    fn add(self, rhs: BoundedInt<W>) -> BoundedInt<W> {
        &self + &rhs
    }
}

impl<W: IntegerWidth> Sub for BoundedInt<W> {
    type Output = BoundedInt<W>;
    fn sub(self, rhs: BoundedInt<W>) -> BoundedInt<W> {
        &self - &rhs
    }
}

impl<W: IntegerWidth> Mul for BoundedInt<W> {
    type Output = BoundedInt<W>;
    fn mul(self, rhs: BoundedInt<W>) -> BoundedInt<W> {
        &self * &rhs
    }
}

impl<W: IntegerWidth> Default for BoundedInt<W> {
    fn default() -> Self {
        // zero is in range for every width
        Self::unchecked(BigInt::from(0))
    }
}

impl<W: IntegerWidth> fmt::Display for BoundedInt<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<W: IntegerWidth> FromStr for BoundedInt<W> {
    type Err = ErrorCode;
    fn from_str(s: &str) -> InputResult<Self> {
        Self::parse(s)
    }
}

impl<W: IntegerWidth> TryFrom<&str> for BoundedInt<W> {
    type Error = ErrorCode;
    fn try_from(s: &str) -> InputResult<Self> {
        Self::parse(s)
    }
}

impl<W: IntegerWidth> TryFrom<&FieldElement> for BoundedInt<W> {
    type Error = ErrorCode;
    fn try_from(element: &FieldElement) -> InputResult<Self> {
        Self::from_field(element)
    }
}

macro_rules! impl_from_native {
    ($($t:ty => $w:ty),* $(,)?) => {
        $(
            impl From<$t> for BoundedInt<$w> {
                fn from(value: $t) -> Self {
                    BoundedInt::unchecked(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_native!(
    u8 => U8Kind,
    u16 => U16Kind,
    u32 => U32Kind,
    u64 => U64Kind,
    i8 => I8Kind,
    i16 => I16Kind,
    i32 => I32Kind,
    i64 => I64Kind,
);

impl<W: IntegerWidth> From<BoundedInt<W>> for FieldElement {
    fn from(value: BoundedInt<W>) -> Self {
        value.to_field()
    }
}
