//! Boolean and text scalars.

use crate::encode::InputValue;
use crate::integer::U8;

/// An immutable boolean input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Boolean(bool);

impl Boolean {
    /// Wrap a boolean.
    pub fn new(value: bool) -> Self {
        Boolean(value)
    }

    /// The wrapped boolean.
    pub fn value(&self) -> bool {
        self.0
    }

    /// Circuit input form: a native boolean.
    pub fn encode(&self) -> InputValue {
        InputValue::Bool(self.0)
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Boolean(value)
    }
}

/// An immutable text input.
///
/// Encodes as the raw string; circuits that want byte access read it as a
/// sequence of `u8` via [`TextValue::as_bytes`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TextValue(String);

impl TextValue {
    /// Wrap a string.
    pub fn new(value: impl Into<String>) -> Self {
        TextValue(value.into())
    }

    /// The wrapped string.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// UTF-8 bytes as `u8` integers.
    pub fn as_bytes(&self) -> Vec<U8> {
        self.0.bytes().map(U8::from).collect()
    }

    /// Circuit input form: the raw string.
    pub fn encode(&self) -> InputValue {
        InputValue::String(self.0.clone())
    }
}

impl From<&str> for TextValue {
    fn from(value: &str) -> Self {
        TextValue::new(value)
    }
}

impl From<String> for TextValue {
    fn from(value: String) -> Self {
        TextValue(value)
    }
}
