//! Integer widths and their static bounds.

use std::fmt;
use std::hash::Hash;

use num_bigint::BigInt;

use crate::error::{ErrorCode, InputResult};

/// Width and signedness of a bounded integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerKind {
    /// Unsigned 8-bit.
    U8,
    /// Unsigned 16-bit.
    U16,
    /// Unsigned 32-bit.
    U32,
    /// Unsigned 64-bit.
    U64,
    /// Signed 8-bit.
    I8,
    /// Signed 16-bit.
    I16,
    /// Signed 32-bit.
    I32,
    /// Signed 64-bit.
    I64,
}

impl IntegerKind {
    /// Bit width.
    pub const fn bits(self) -> u32 {
        match self {
            IntegerKind::U8 | IntegerKind::I8 => 8,
            IntegerKind::U16 | IntegerKind::I16 => 16,
            IntegerKind::U32 | IntegerKind::I32 => 32,
            IntegerKind::U64 | IntegerKind::I64 => 64,
        }
    }

    /// Whether the type admits negative values.
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            IntegerKind::I8 | IntegerKind::I16 | IntegerKind::I32 | IntegerKind::I64
        )
    }

    /// Inclusive lower bound.
    pub const fn min(self) -> i128 {
        if self.is_signed() {
            -(1i128 << (self.bits() - 1))
        } else {
            0
        }
    }

    /// Inclusive upper bound.
    pub const fn max(self) -> i128 {
        if self.is_signed() {
            (1i128 << (self.bits() - 1)) - 1
        } else {
            (1i128 << self.bits()) - 1
        }
    }

    /// Type name as written in circuit ABIs, e.g. `u8` or `i64`.
    pub const fn name(self) -> &'static str {
        match self {
            IntegerKind::U8 => "u8",
            IntegerKind::U16 => "u16",
            IntegerKind::U32 => "u32",
            IntegerKind::U64 => "u64",
            IntegerKind::I8 => "i8",
            IntegerKind::I16 => "i16",
            IntegerKind::I32 => "i32",
            IntegerKind::I64 => "i64",
        }
    }

    /// Number of representable values, `max - min + 1`.
    pub fn range(self) -> BigInt {
        BigInt::from(self.max()) - BigInt::from(self.min()) + 1
    }

    /// Whether `value` lies within `[min, max]`.
    pub fn contains(self, value: &BigInt) -> bool {
        *value >= BigInt::from(self.min()) && *value <= BigInt::from(self.max())
    }

    /// Fail with `E101_OutOfRange` unless `value` lies within `[min, max]`.
    pub fn check(self, value: &BigInt) -> InputResult<()> {
        if !self.contains(value) {
            return Err(ErrorCode::E101_OutOfRange {
                kind: self.name(),
                value: value.to_string(),
                min: self.min().to_string(),
                max: self.max().to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for IntegerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compile-time tag selecting an [`IntegerKind`] for `BoundedInt`.
pub trait IntegerWidth:
    Copy + Clone + fmt::Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// The width this tag stands for.
    const KIND: IntegerKind;
}

macro_rules! integer_widths {
    ($($marker:ident => $kind:ident),* $(,)?) => {
        $(
            #[doc = concat!("Width tag for `", stringify!($kind), "`.")]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $marker;

            impl IntegerWidth for $marker {
                const KIND: IntegerKind = IntegerKind::$kind;
            }
        )*
    };
}

integer_widths!(
    U8Kind => U8,
    U16Kind => U16,
    U32Kind => U32,
    U64Kind => U64,
    I8Kind => I8,
    I16Kind => I16,
    I32Kind => I32,
    I64Kind => I64,
);
