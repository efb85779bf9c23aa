//! Bit, byte and radix decomposition of field elements.
//!
//! Each decomposition accepts a caller-chosen `length` that must lie
//! between the minimum lossless length of the value and a fixed maximum:
//!
//! | kind  | minimum                                         | maximum |
//! |-------|-------------------------------------------------|---------|
//! | bits  | bit length of the value                         | 254     |
//! | bytes | `ceil(bit_len / 8)`                             | 32      |
//! | radix | `ceil(bit_len / log2(radix))`, next power of two | 256     |
//!
//! The power-of-two rounding for radix digits is part of the circuit
//! calling convention and must not be relaxed.

use super::element::FieldElement;
use super::{MODULUS_BIT_SIZE, MODULUS_BYTE_SIZE};
use crate::error::{ErrorCode, InputResult};

/// Largest accepted radix.
pub const MAX_RADIX: u32 = 256;

/// Largest accepted radix digit count.
pub const MAX_RADIX_LEN: usize = 256;

fn check_length(length: usize, min: usize, max: usize) -> InputResult<()> {
    if length < min || length > max {
        return Err(ErrorCode::E300_LengthOutOfRange {
            length: length as u64,
            min: min as u64,
            max: max as u64,
        });
    }
    Ok(())
}

/// Number of bits per digit, or `E301_InvalidRadix`.
fn radix_bits(radix: u32) -> InputResult<usize> {
    if !(2..=MAX_RADIX).contains(&radix) || !radix.is_power_of_two() {
        return Err(ErrorCode::E301_InvalidRadix(radix));
    }
    Ok(radix.trailing_zeros() as usize)
}

impl FieldElement {
    /// Little-endian bytes of the residue, with no trailing zero bytes.
    fn significant_le_bytes(&self) -> Vec<u8> {
        if self.is_zero() {
            Vec::new()
        } else {
            self.as_biguint().to_bytes_le()
        }
    }

    /// Bit `index` of the residue, counting from the least significant bit.
    fn bit_at(bytes: &[u8], index: usize) -> u8 {
        bytes
            .get(index / 8)
            .map(|byte| (byte >> (index % 8)) & 1)
            .unwrap_or(0)
    }

    /// Smallest bit count that represents the value losslessly.
    pub fn min_bits_len(&self) -> usize {
        self.bit_len() as usize
    }

    /// Smallest byte count that represents the value losslessly.
    pub fn min_bytes_len(&self) -> usize {
        self.min_bits_len().div_ceil(8)
    }

    /// Smallest digit count for `radix`, rounded up to a power of two.
    pub fn min_radix_len(&self, radix: u32) -> InputResult<usize> {
        let digit_bits = radix_bits(radix)?;
        let raw = self.min_bits_len().div_ceil(digit_bits);
        Ok(if raw == 0 { 0 } else { raw.next_power_of_two() })
    }

    /// `length` bits, least significant first.
    pub fn to_le_bits(&self, length: usize) -> InputResult<Vec<u8>> {
        check_length(length, self.min_bits_len(), MODULUS_BIT_SIZE)?;
        let bytes = self.significant_le_bytes();
        Ok((0..length).map(|i| Self::bit_at(&bytes, i)).collect())
    }

    /// `length` bits, most significant first.
    pub fn to_be_bits(&self, length: usize) -> InputResult<Vec<u8>> {
        let mut bits = self.to_le_bits(length)?;
        bits.reverse();
        Ok(bits)
    }

    /// `length` bytes, least significant first.
    pub fn to_le_bytes(&self, length: usize) -> InputResult<Vec<u8>> {
        check_length(length, self.min_bytes_len(), MODULUS_BYTE_SIZE)?;
        let mut out = self.significant_le_bytes();
        out.resize(length, 0);
        Ok(out)
    }

    /// `length` bytes, most significant first.
    pub fn to_be_bytes(&self, length: usize) -> InputResult<Vec<u8>> {
        let mut bytes = self.to_le_bytes(length)?;
        bytes.reverse();
        Ok(bytes)
    }

    /// `length` base-`radix` digits, least significant first.
    pub fn to_le_radix(&self, radix: u32, length: usize) -> InputResult<Vec<u8>> {
        let digit_bits = radix_bits(radix)?;
        check_length(length, self.min_radix_len(radix)?, MAX_RADIX_LEN)?;

        let bytes = self.significant_le_bytes();
        let digits = (0..length)
            .map(|d| {
                (0..digit_bits).fold(0u8, |acc, j| {
                    acc | (Self::bit_at(&bytes, d * digit_bits + j) << j)
                })
            })
            .collect();
        Ok(digits)
    }

    /// `length` base-`radix` digits, most significant first.
    pub fn to_be_radix(&self, radix: u32, length: usize) -> InputResult<Vec<u8>> {
        let mut digits = self.to_le_radix(radix, length)?;
        digits.reverse();
        Ok(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_of_300() {
        let v = FieldElement::from(300u64);
        assert_eq!(v.min_bits_len(), 9);
        assert_eq!(v.to_le_bits(9).unwrap(), vec![0, 0, 1, 1, 0, 1, 0, 0, 1]);
        assert_eq!(v.to_be_bits(9).unwrap(), vec![1, 0, 0, 1, 0, 1, 1, 0, 0]);
        assert_eq!(v.to_le_bits(12).unwrap(), vec![0, 0, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_bits_length_window() {
        let v = FieldElement::from(300u64);
        assert_eq!(
            v.to_le_bits(8),
            Err(ErrorCode::E300_LengthOutOfRange { length: 8, min: 9, max: 254 })
        );
        assert!(v.to_le_bits(254).is_ok());
        assert!(v.to_le_bits(255).is_err());
        assert_eq!(FieldElement::zero().to_le_bits(0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_bytes() {
        let v = FieldElement::from(0x0102u64);
        assert_eq!(v.to_le_bytes(2).unwrap(), vec![0x02, 0x01]);
        assert_eq!(v.to_be_bytes(4).unwrap(), vec![0, 0, 0x01, 0x02]);
        assert!(v.to_le_bytes(1).is_err());
        assert!(v.to_le_bytes(33).is_err());
        assert_eq!(FieldElement::zero().to_be_bytes(0).unwrap(), Vec::<u8>::new());
        assert_eq!(FieldElement::zero().to_be_bytes(2).unwrap(), vec![0, 0]);
    }

    #[test]
    fn test_full_width_bytes_of_minus_one() {
        let v = -FieldElement::one();
        let be = v.to_be_bytes(32).unwrap();
        let mut expected = FieldElement::modulus_be_bytes().to_vec();
        expected[31] -= 1;
        assert_eq!(be, expected);
    }

    #[test]
    fn test_radix_minimum_rounds_to_power_of_two() {
        // 300 has 9 bits: 5 base-4 digits, rounded up to 8
        let v = FieldElement::from(300u64);
        assert_eq!(v.min_radix_len(4).unwrap(), 8);
        assert!(v.to_le_radix(4, 5).is_err());
        assert_eq!(v.to_le_radix(4, 8).unwrap(), vec![0, 3, 2, 0, 1, 0, 0, 0]);

        // 3 base-16 digits round up to 4
        assert_eq!(v.min_radix_len(16).unwrap(), 4);
        assert_eq!(v.to_be_radix(16, 4).unwrap(), vec![0, 1, 2, 12]);

        assert_eq!(FieldElement::zero().min_radix_len(256).unwrap(), 0);
        assert_eq!(FieldElement::one().min_radix_len(256).unwrap(), 1);
    }

    #[test]
    fn test_radix_256_matches_bytes() {
        let v = FieldElement::from(0xdeadbeefu64);
        assert_eq!(v.to_le_radix(256, 4).unwrap(), v.to_le_bytes(4).unwrap());
        assert!(v.to_le_radix(256, 256).is_ok());
        assert!(v.to_le_radix(256, 257).is_err());
    }

    #[test]
    fn test_invalid_radix() {
        let v = FieldElement::from(5u64);
        for radix in [0, 1, 3, 10, 512] {
            assert_eq!(v.to_le_radix(radix, 8), Err(ErrorCode::E301_InvalidRadix(radix)));
        }
    }
}
