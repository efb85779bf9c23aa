//! BN254 scalar field element.
//!
//! Wraps a `BigUint` that is always reduced into `[0, P)`.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use super::arith::mod_inverse;
use super::parse::{integer_from_f64, parse_integer};
use super::{
    modulus, modulus_int, MODULUS_BE_BITS, MODULUS_BE_BYTES, MODULUS_BIT_SIZE, MODULUS_LE_BITS,
    MODULUS_LE_BYTES,
};
use crate::error::{ErrorCode, InputResult};

/// A BN254 scalar field element.
///
/// Immutable: every operation returns a new element. The inner value is
/// always the canonical residue in `[0, P)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FieldElement(BigUint);

impl FieldElement {
    /// The additive identity.
    pub fn zero() -> Self {
        FieldElement(BigUint::zero())
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        FieldElement(BigUint::one())
    }

    /// Reduce an unsigned integer modulo `P`.
    pub fn from_biguint(value: &BigUint) -> Self {
        FieldElement(value % modulus())
    }

    /// Reduce a signed integer modulo `P` into `[0, P)`.
    pub fn from_bigint(value: &BigInt) -> Self {
        let (_, magnitude) = value.mod_floor(modulus_int()).into_parts();
        FieldElement(magnitude)
    }

    /// Parse a decimal or `0x` hex string, optionally negative, and reduce it.
    pub fn parse(input: &str) -> InputResult<Self> {
        parse_integer(input).map(|v| Self::from_bigint(&v))
    }

    /// Convert an integral `f64`; fractional or non-finite input fails.
    pub fn from_f64(value: f64) -> InputResult<Self> {
        integer_from_f64(value).map(|v| Self::from_bigint(&v))
    }

    /// Interpret big-endian bytes as an integer and reduce it.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self::from_biguint(&BigUint::from_bytes_be(bytes))
    }

    /// Interpret little-endian bytes as an integer and reduce it.
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        Self::from_biguint(&BigUint::from_bytes_le(bytes))
    }

    /// Borrow the canonical residue.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Copy out the canonical residue.
    pub fn to_biguint(&self) -> BigUint {
        self.0.clone()
    }

    /// The canonical residue as a (non-negative) signed integer.
    pub fn to_bigint(&self) -> BigInt {
        BigInt::from_biguint(Sign::Plus, self.0.clone())
    }

    /// Returns true for the zero residue.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Number of bits needed to represent the residue (0 for zero).
    pub fn bit_len(&self) -> u64 {
        self.0.bits()
    }

    /// Parity of the residue: 1 if odd, 0 if even.
    pub fn sgn0(&self) -> u8 {
        if self.0.is_odd() {
            1
        } else {
            0
        }
    }

    /// Fail with `E205_BitSizeExceeded` if the residue needs more than `bits` bits.
    pub fn assert_max_bit_size(&self, bits: u64) -> InputResult<()> {
        let len = self.bit_len();
        if len > bits {
            return Err(ErrorCode::E205_BitSizeExceeded { bits: len, limit: bits });
        }
        Ok(())
    }

    /// Multiplicative inverse.
    pub fn inverse(&self) -> InputResult<Self> {
        if self.is_zero() {
            return Err(ErrorCode::E200_DivisionByZero);
        }
        let inv = mod_inverse(&self.to_bigint(), modulus_int())?;
        Ok(Self::from_bigint(&inv))
    }

    /// `self * other^-1 mod P`.
    pub fn div(&self, other: &FieldElement) -> InputResult<Self> {
        let inv = other.inverse()?;
        Ok(self * &inv)
    }

    /// Non-negative remainder of the residues, `((a % b) + b) % b`.
    pub fn modulo(&self, other: &FieldElement) -> InputResult<Self> {
        if other.is_zero() {
            return Err(ErrorCode::E201_ModuloByZero);
        }
        let a = self.to_bigint();
        let b = other.to_bigint();
        Ok(Self::from_bigint(&(((&a % &b) + &b) % &b)))
    }

    /// `self^exponent mod P` for exponents below 2^32.
    pub fn pow32(&self, exponent: &FieldElement) -> InputResult<Self> {
        let e = exponent
            .0
            .to_u32()
            .ok_or_else(|| ErrorCode::E203_ExponentTooLarge(exponent.to_string()))?;
        Ok(self.pow_u32(e))
    }

    /// `self^exponent mod P`.
    pub fn pow_u32(&self, exponent: u32) -> Self {
        FieldElement(self.0.modpow(&BigUint::from(exponent), modulus()))
    }

    /// `0x`-prefixed lowercase hex without padding (`0x0` for zero).
    pub fn to_hex(&self) -> String {
        format!("0x{:x}", self.0)
    }

    /// Canonical decimal representation.
    pub fn to_decimal(&self) -> String {
        self.0.to_str_radix(10)
    }

    /// Compare with any value convertible into a field element.
    ///
    /// The other side is normalized through the same constructor, so
    /// `FieldElement::from(5u64).equals("0x5")` holds. Inputs that fail to
    /// convert are never equal.
    pub fn equals<V>(&self, other: V) -> bool
    where
        V: TryInto<FieldElement>,
    {
        other.try_into().map(|o| o == *self).unwrap_or(false)
    }

    /// The field modulus `P`.
    pub fn modulus() -> &'static BigUint {
        modulus()
    }

    /// Number of bits in `P`.
    pub fn modulus_bit_size() -> usize {
        MODULUS_BIT_SIZE
    }

    /// Bits of `P`, most significant first.
    pub fn modulus_be_bits() -> &'static [u8] {
        &MODULUS_BE_BITS
    }

    /// Bits of `P`, least significant first.
    pub fn modulus_le_bits() -> &'static [u8] {
        &MODULUS_LE_BITS
    }

    /// Bytes of `P`, most significant first.
    pub fn modulus_be_bytes() -> &'static [u8] {
        &MODULUS_BE_BYTES
    }

    /// Bytes of `P`, least significant first.
    pub fn modulus_le_bytes() -> &'static [u8] {
        &MODULUS_LE_BYTES
    }
}

impl<'a, 'b> Add<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn add(self, rhs: &'b FieldElement) -> FieldElement {
        FieldElement((&self.0 + &rhs.0) % modulus())
    }
}

impl<'a, 'b> Sub<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn sub(self, rhs: &'b FieldElement) -> FieldElement {
        // (a - b + P) mod P keeps the intermediate non-negative
        FieldElement((&self.0 + modulus() - &rhs.0) % modulus())
    }
}

impl<'a, 'b> Mul<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn mul(self, rhs: &'b FieldElement) -> FieldElement {
        FieldElement((&self.0 * &rhs.0) % modulus())
    }
}

impl Add for FieldElement {
    type Output = FieldElement;
    fn add(self, rhs: FieldElement) -> FieldElement {
        &self + &rhs
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;
    fn sub(self, rhs: FieldElement) -> FieldElement {
        &self - &rhs
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;
    fn mul(self, rhs: FieldElement) -> FieldElement {
        &self * &rhs
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;
    fn neg(self) -> FieldElement {
        if self.is_zero() {
            FieldElement::zero()
        } else {
            FieldElement(modulus() - &self.0)
        }
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;
    fn neg(self) -> FieldElement {
        -&self
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl FromStr for FieldElement {
    type Err = ErrorCode;
    fn from_str(s: &str) -> InputResult<Self> {
        FieldElement::parse(s)
    }
}

impl TryFrom<&str> for FieldElement {
    type Error = ErrorCode;
    fn try_from(s: &str) -> InputResult<Self> {
        FieldElement::parse(s)
    }
}

impl TryFrom<String> for FieldElement {
    type Error = ErrorCode;
    fn try_from(s: String) -> InputResult<Self> {
        FieldElement::parse(&s)
    }
}

impl TryFrom<f64> for FieldElement {
    type Error = ErrorCode;
    fn try_from(value: f64) -> InputResult<Self> {
        FieldElement::from_f64(value)
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FieldElement {
                fn from(value: $t) -> Self {
                    FieldElement::from_bigint(&BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl From<bool> for FieldElement {
    fn from(value: bool) -> Self {
        FieldElement::from(u8::from(value))
    }
}

impl From<BigUint> for FieldElement {
    fn from(value: BigUint) -> Self {
        FieldElement::from_biguint(&value)
    }
}

impl From<&BigUint> for FieldElement {
    fn from(value: &BigUint) -> Self {
        FieldElement::from_biguint(value)
    }
}

impl From<BigInt> for FieldElement {
    fn from(value: BigInt) -> Self {
        FieldElement::from_bigint(&value)
    }
}

impl From<&BigInt> for FieldElement {
    fn from(value: &BigInt) -> Self {
        FieldElement::from_bigint(value)
    }
}
