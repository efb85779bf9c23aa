//! Encoder limits.
//!
//! Bound the shape of values accepted by the serializer so that a
//! pathological record cannot produce an unbounded circuit input.
//!
//! - E501_NestingTooDeep: maximum record/container nesting
//! - E502_ContainerTooLarge: maximum slots in one container

/// Limits applied while encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth of records and containers (E501)
    pub max_nesting_depth: u64,
    /// Maximum number of slots in one array or bounded vector (E502)
    pub max_container_len: u64,
}

impl Limits {
    /// Default limits, sized for realistic circuit ABIs.
    pub const fn strict() -> Self {
        Self {
            max_nesting_depth: 32,       // 32 levels
            max_container_len: 1 << 16,  // 65,536 slots
        }
    }

    /// Lenient limits for large generated inputs.
    pub const fn lenient() -> Self {
        Self {
            max_nesting_depth: 128,      // 128 levels
            max_container_len: 1 << 20,  // ~1M slots
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::strict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_limits() {
        let limits = Limits::strict();
        assert_eq!(limits.max_nesting_depth, 32);
        assert_eq!(limits.max_container_len, 65_536);
        assert_eq!(Limits::default(), limits);
    }

    #[test]
    fn test_lenient_limits() {
        let limits = Limits::lenient();
        assert!(limits.max_nesting_depth > Limits::strict().max_nesting_depth);
        assert!(limits.max_container_len > Limits::strict().max_container_len);
    }
}
