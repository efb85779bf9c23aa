//! Fixed-length arrays.

use crate::error::{ErrorCode, InputResult};

/// An ordered sequence whose length is fixed at construction.
///
/// Every slot is always logically valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedArray<T> {
    items: Vec<T>,
}

/// Resolve a possibly negative index against `len`.
pub(crate) fn resolve_index(index: isize, len: usize) -> InputResult<usize> {
    let resolved = if index < 0 {
        len as i128 + index as i128
    } else {
        index as i128
    };
    if resolved < 0 || resolved >= len as i128 {
        return Err(ErrorCode::E401_IndexOutOfBounds {
            index: index as i64,
            len: len as u64,
        });
    }
    Ok(resolved as usize)
}

pub(crate) fn out_of_bounds(index: usize, len: usize) -> ErrorCode {
    ErrorCode::E401_IndexOutOfBounds {
        index: index as i64,
        len: len as u64,
    }
}

impl<T> FixedArray<T> {
    /// Build an array of `length` items; fails unless `items.len() == length`.
    pub fn new(length: usize, items: Vec<T>) -> InputResult<Self> {
        if items.len() != length {
            return Err(ErrorCode::E400_LengthMismatch {
                expected: length as u64,
                got: items.len() as u64,
            });
        }
        Ok(Self { items })
    }

    /// Build an array whose length is that of `items`.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Build an array of `length` items produced by `f(index)`.
    pub fn from_fn(length: usize, f: impl FnMut(usize) -> T) -> Self {
        Self {
            items: (0..length).map(f).collect(),
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the array has no slots.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> InputResult<&T> {
        self.items
            .get(index)
            .ok_or_else(|| out_of_bounds(index, self.items.len()))
    }

    /// Mutable element at `index`.
    pub fn get_mut(&mut self, index: usize) -> InputResult<&mut T> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or_else(|| out_of_bounds(index, len))
    }

    /// Replace the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> InputResult<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Element at `index`, where negative indices count from the end.
    pub fn at(&self, index: isize) -> InputResult<&T> {
        let i = resolve_index(index, self.items.len())?;
        Ok(&self.items[i])
    }

    /// Iterate in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Visit every element with its index, in index order.
    pub fn for_each(&self, mut f: impl FnMut(usize, &T)) {
        for (i, item) in self.items.iter().enumerate() {
            f(i, item);
        }
    }

    /// Map every element, preserving order and length.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> FixedArray<U> {
        FixedArray {
            items: self.items.iter().map(f).collect(),
        }
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume into the underlying vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<'a, T> IntoIterator for &'a FixedArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            items: items.into(),
        }
    }
}
