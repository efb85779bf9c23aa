//! BN254 scalar field arithmetic.
//!
//! [`FieldElement`] is a canonical residue in `[0, P)` where `P` is the
//! 254-bit BN254 scalar field prime. Every constructor reduces its input
//! modulo `P`; every operation returns a fresh element.
//!
//! The modulus itself is generated at build time from `field_params.json`
//! as decimal/hex strings plus byte and bit tables in both orders.

mod arith;
mod decompose;
mod element;
mod parse;

pub use arith::mod_inverse;
pub use decompose::{MAX_RADIX_LEN, MAX_RADIX};
pub use element::FieldElement;
pub use parse::{integer_from_f64, parse_integer};

use num_bigint::{BigInt, BigUint};
use once_cell::sync::Lazy;

// Include generated modulus constants
include!(concat!(env!("OUT_DIR"), "/modulus_generated.rs"));

static MODULUS: Lazy<BigUint> = Lazy::new(|| BigUint::from_bytes_be(&MODULUS_BE_BYTES));

static MODULUS_INT: Lazy<BigInt> = Lazy::new(|| BigInt::from(MODULUS.clone()));

/// The field modulus `P`.
pub fn modulus() -> &'static BigUint {
    &MODULUS
}

/// The field modulus as a signed integer, for reductions of signed input.
pub(crate) fn modulus_int() -> &'static BigInt {
    &MODULUS_INT
}
