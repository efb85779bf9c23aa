//! Modular inverse by extended Euclid.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{ErrorCode, InputResult};

/// Compute `a^-1 mod m` with the extended Euclidean algorithm.
///
/// Returns `E202_NotInvertible` when `gcd(a, m) != 1`.
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> InputResult<BigInt> {
    let (mut old_r, mut r) = (a.mod_floor(m), m.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return Err(ErrorCode::E202_NotInvertible(a.to_string()));
    }
    Ok(old_s.mod_floor(m))
}
