//! Error handling for circuit input construction and encoding.
//!
//! Every fallible operation in the crate returns [`InputResult`]. Codes are
//! grouped by subsystem:
//!
//! - 1xx: parsing and range validation
//! - 2xx: field arithmetic
//! - 3xx: bit/byte/radix decomposition
//! - 4xx: containers
//! - 5xx: encoding

use thiserror::Error;

/// All error codes raised by this crate.
///
/// Errors are local to the failing call. Nothing is mutated when one is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    /// Input is not an integer (unparseable, fractional, non-finite).
    #[error("invalid integer input: {0}")]
    E100_InvalidInput(String),

    /// Value lies outside a bounded integer type's static range.
    #[error("{value} is out of range for {kind}: expected [{min}, {max}]")]
    E101_OutOfRange {
        /// Integer type name, e.g. `u8`.
        kind: &'static str,
        /// The rejected value in decimal.
        value: String,
        /// Inclusive lower bound.
        min: String,
        /// Inclusive upper bound.
        max: String,
    },

    /// Division by the zero residue.
    #[error("division by zero")]
    E200_DivisionByZero,

    /// Modulo by the zero residue.
    #[error("modulo by zero")]
    E201_ModuloByZero,

    /// Extended Euclid found no inverse.
    #[error("{0} has no inverse modulo the field prime")]
    E202_NotInvertible(String),

    /// Exponent is not below 2^32.
    #[error("exponent {0} must be less than 2^32")]
    E203_ExponentTooLarge(String),

    /// Exponent is negative.
    #[error("exponent {0} must not be negative")]
    E204_NegativeExponent(String),

    /// Value needs more bits than allowed.
    #[error("value needs {bits} bits, exceeding the limit of {limit}")]
    E205_BitSizeExceeded {
        /// Bit length of the value.
        bits: u64,
        /// Requested maximum.
        limit: u64,
    },

    /// Decomposition length outside `[min, max]`.
    #[error("length {length} is outside the valid range [{min}, {max}]")]
    E300_LengthOutOfRange {
        /// Requested length.
        length: u64,
        /// Minimum lossless length.
        min: u64,
        /// Maximum permitted length.
        max: u64,
    },

    /// Radix is not a power of two in `[2, 256]`.
    #[error("radix {0} must be a power of two in [2, 256]")]
    E301_InvalidRadix(u32),

    /// Item count differs from the fixed container length.
    #[error("expected {expected} items, got {got}")]
    E400_LengthMismatch {
        /// Declared container length.
        expected: u64,
        /// Number of items supplied.
        got: u64,
    },

    /// Index outside the container's logical length.
    #[error("index {index} out of bounds for length {len}")]
    E401_IndexOutOfBounds {
        /// Requested index (may be negative for `at`).
        index: i64,
        /// Current logical length.
        len: u64,
    },

    /// Push onto a full bounded container.
    #[error("container is full (capacity {0})")]
    E402_ContainerFull(u64),

    /// Pop from an empty bounded container.
    #[error("container is empty")]
    E403_ContainerEmpty,

    /// Extension would exceed the bounded container's capacity.
    #[error("cannot append {extra} items to length {len}: capacity is {capacity}")]
    E404_ContainerOverflow {
        /// Current logical length.
        len: u64,
        /// Number of items to append.
        extra: u64,
        /// Maximum capacity.
        capacity: u64,
    },

    /// Value shape outside the encodable set.
    #[error("unsupported value type: {0}")]
    E500_UnsupportedValueType(String),

    /// Nesting exceeds the encoder limit.
    #[error("nesting depth {depth} exceeds limit {limit}")]
    E501_NestingTooDeep {
        /// Depth reached.
        depth: u64,
        /// Configured limit.
        limit: u64,
    },

    /// Container exceeds the encoder's slot limit.
    #[error("container with {len} slots exceeds limit {limit}")]
    E502_ContainerTooLarge {
        /// Slot count of the container.
        len: u64,
        /// Configured limit.
        limit: u64,
    },
}

impl ErrorCode {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::E100_InvalidInput(_) => 100,
            ErrorCode::E101_OutOfRange { .. } => 101,
            ErrorCode::E200_DivisionByZero => 200,
            ErrorCode::E201_ModuloByZero => 201,
            ErrorCode::E202_NotInvertible(_) => 202,
            ErrorCode::E203_ExponentTooLarge(_) => 203,
            ErrorCode::E204_NegativeExponent(_) => 204,
            ErrorCode::E205_BitSizeExceeded { .. } => 205,
            ErrorCode::E300_LengthOutOfRange { .. } => 300,
            ErrorCode::E301_InvalidRadix(_) => 301,
            ErrorCode::E400_LengthMismatch { .. } => 400,
            ErrorCode::E401_IndexOutOfBounds { .. } => 401,
            ErrorCode::E402_ContainerFull(_) => 402,
            ErrorCode::E403_ContainerEmpty => 403,
            ErrorCode::E404_ContainerOverflow { .. } => 404,
            ErrorCode::E500_UnsupportedValueType(_) => 500,
            ErrorCode::E501_NestingTooDeep { .. } => 501,
            ErrorCode::E502_ContainerTooLarge { .. } => 502,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::E100_InvalidInput(_) => "E100_InvalidInput",
            ErrorCode::E101_OutOfRange { .. } => "E101_OutOfRange",
            ErrorCode::E200_DivisionByZero => "E200_DivisionByZero",
            ErrorCode::E201_ModuloByZero => "E201_ModuloByZero",
            ErrorCode::E202_NotInvertible(_) => "E202_NotInvertible",
            ErrorCode::E203_ExponentTooLarge(_) => "E203_ExponentTooLarge",
            ErrorCode::E204_NegativeExponent(_) => "E204_NegativeExponent",
            ErrorCode::E205_BitSizeExceeded { .. } => "E205_BitSizeExceeded",
            ErrorCode::E300_LengthOutOfRange { .. } => "E300_LengthOutOfRange",
            ErrorCode::E301_InvalidRadix(_) => "E301_InvalidRadix",
            ErrorCode::E400_LengthMismatch { .. } => "E400_LengthMismatch",
            ErrorCode::E401_IndexOutOfBounds { .. } => "E401_IndexOutOfBounds",
            ErrorCode::E402_ContainerFull(_) => "E402_ContainerFull",
            ErrorCode::E403_ContainerEmpty => "E403_ContainerEmpty",
            ErrorCode::E404_ContainerOverflow { .. } => "E404_ContainerOverflow",
            ErrorCode::E500_UnsupportedValueType(_) => "E500_UnsupportedValueType",
            ErrorCode::E501_NestingTooDeep { .. } => "E501_NestingTooDeep",
            ErrorCode::E502_ContainerTooLarge { .. } => "E502_ContainerTooLarge",
        }
    }
}

/// Result type for circuit input operations.
pub type InputResult<T> = Result<T, ErrorCode>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_names_bounds() {
        let err = ErrorCode::E101_OutOfRange {
            kind: "u8",
            value: "256".to_string(),
            min: "0".to_string(),
            max: "255".to_string(),
        };
        assert_eq!(err.to_string(), "256 is out of range for u8: expected [0, 255]");
        assert_eq!(err.code(), 101);
        assert_eq!(err.name(), "E101_OutOfRange");
    }

    #[test]
    fn test_codes_are_grouped() {
        assert_eq!(ErrorCode::E200_DivisionByZero.code(), 200);
        assert_eq!(ErrorCode::E403_ContainerEmpty.code(), 403);
        assert_eq!(
            ErrorCode::E500_UnsupportedValueType("null".into()).name(),
            "E500_UnsupportedValueType"
        );
    }
}
