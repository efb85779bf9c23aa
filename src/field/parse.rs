//! Integer parsing shared by field elements and bounded integers.

use num_bigint::{BigInt, BigUint};
use num_traits::FromPrimitive;

use crate::error::{ErrorCode, InputResult};

/// Parse a decimal or `0x`-prefixed hexadecimal integer with an optional
/// leading `-`.
///
/// The result is the exact signed integer; no reduction happens here.
pub fn parse_integer(input: &str) -> InputResult<BigInt> {
    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (radix, digits) = match body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, body),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ErrorCode::E100_InvalidInput(format!(
            "'{}' is not an integer",
            input
        )));
    }

    let magnitude = BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| {
        ErrorCode::E100_InvalidInput(format!("'{}' is not an integer", input))
    })?;

    let value = BigInt::from(magnitude);
    Ok(if negative { -value } else { value })
}

/// Convert a floating point number to an integer, rejecting fractional and
/// non-finite values.
pub fn integer_from_f64(value: f64) -> InputResult<BigInt> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ErrorCode::E100_InvalidInput(format!(
            "{} is not an integer",
            value
        )));
    }
    BigInt::from_f64(value)
        .ok_or_else(|| ErrorCode::E100_InvalidInput(format!("{} is not an integer", value)))
}
