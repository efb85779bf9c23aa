//! Bounded vectors with fully materialized storage.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::fixed::{out_of_bounds, resolve_index};
use crate::error::{ErrorCode, InputResult};

type Factory<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// A variable-length sequence with a fixed capacity.
///
/// Storage always holds exactly `max_len` slots. Slots at or past `len`
/// hold fresh values from the default factory; the factory is called once
/// per slot so no two slots share state.
pub struct BoundedVec<T> {
    storage: Vec<T>,
    len: usize,
    factory: Factory<T>,
}

impl<T> BoundedVec<T> {
    /// Create an empty vector of capacity `max_len`, filling every slot
    /// with `factory()`.
    pub fn new<F>(max_len: usize, factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::with_factory(max_len, Arc::new(factory))
    }

    fn with_factory(max_len: usize, factory: Factory<T>) -> Self {
        let storage = (0..max_len).map(|_| factory()).collect();
        Self {
            storage,
            len: 0,
            factory,
        }
    }

    /// Current logical length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Capacity fixed at construction.
    pub fn max_len(&self) -> usize {
        self.storage.len()
    }

    /// Whether no element is logically present.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `len == max_len`.
    pub fn is_full(&self) -> bool {
        self.len == self.storage.len()
    }

    /// Append `item`; fails with `E402_ContainerFull` at capacity.
    pub fn push(&mut self, item: T) -> InputResult<()> {
        if self.is_full() {
            debug!(capacity = self.max_len(), "push rejected: bounded vec is full");
            return Err(ErrorCode::E402_ContainerFull(self.max_len() as u64));
        }
        self.storage[self.len] = item;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element, resetting its slot to a default.
    pub fn pop(&mut self) -> InputResult<T> {
        if self.len == 0 {
            return Err(ErrorCode::E403_ContainerEmpty);
        }
        self.len -= 1;
        let fresh = (self.factory)();
        Ok(std::mem::replace(&mut self.storage[self.len], fresh))
    }

    /// Element at `index < len`.
    pub fn get(&self, index: usize) -> InputResult<&T> {
        if index >= self.len {
            return Err(out_of_bounds(index, self.len));
        }
        Ok(&self.storage[index])
    }

    /// Replace the element at `index < len`.
    pub fn set(&mut self, index: usize, value: T) -> InputResult<()> {
        if index >= self.len {
            return Err(out_of_bounds(index, self.len));
        }
        self.storage[index] = value;
        Ok(())
    }

    /// Element at `index`, where negative indices count back from `len`.
    pub fn at(&self, index: isize) -> InputResult<&T> {
        let i = resolve_index(index, self.len)?;
        Ok(&self.storage[i])
    }

    /// Append all of `items`, or none of them if they do not fit.
    pub fn extend_from_slice(&mut self, items: &[T]) -> InputResult<()>
    where
        T: Clone,
    {
        if self.len + items.len() > self.max_len() {
            debug!(
                len = self.len,
                extra = items.len(),
                capacity = self.max_len(),
                "extend rejected: bounded vec would overflow"
            );
            return Err(ErrorCode::E404_ContainerOverflow {
                len: self.len as u64,
                extra: items.len() as u64,
                capacity: self.max_len() as u64,
            });
        }
        for item in items {
            self.storage[self.len] = item.clone();
            self.len += 1;
        }
        Ok(())
    }

    /// Drop every logical element, refilling their slots with defaults.
    pub fn clear(&mut self) {
        for slot in &mut self.storage[..self.len] {
            *slot = (self.factory)();
        }
        self.len = 0;
    }

    /// Iterate over the logical elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage[..self.len].iter()
    }

    /// All `max_len` slots, including unused default-filled ones.
    pub fn storage(&self) -> &[T] {
        &self.storage
    }

    /// Convert every slot and the factory with `f`, keeping `len`.
    pub fn map_into<U, F>(self, f: F) -> BoundedVec<U>
    where
        T: 'static,
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        let factory = self.factory;
        let fg = Arc::clone(&f);
        let storage = self.storage.into_iter().map(|item| f(item)).collect();
        BoundedVec {
            storage,
            len: self.len,
            factory: Arc::new(move || fg(factory())),
        }
    }
}

impl<T: Default + 'static> BoundedVec<T> {
    /// Create an empty vector whose unused slots hold `T::default()`.
    pub fn with_default(max_len: usize) -> Self {
        Self::new(max_len, T::default)
    }
}

impl<T: Clone> Clone for BoundedVec<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            len: self.len,
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<T: PartialEq> PartialEq for BoundedVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.storage == other.storage
    }
}

impl<T: Eq> Eq for BoundedVec<T> {}

impl<T: fmt::Debug> fmt::Debug for BoundedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedVec")
            .field("storage", &self.storage)
            .field("len", &self.len)
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a BoundedVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_storage_is_default_filled() {
        let v: BoundedVec<u32> = BoundedVec::new(3, || 7);
        assert_eq!(v.len(), 0);
        assert_eq!(v.max_len(), 3);
        assert_eq!(v.storage(), &[7, 7, 7]);
    }

    #[test]
    fn test_factory_called_per_slot() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let v: BoundedVec<usize> = BoundedVec::new(4, move || counter.fetch_add(1, Ordering::SeqCst));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert_eq!(v.storage(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_push_until_full() {
        let mut v = BoundedVec::<u8>::with_default(2);
        v.push(1).unwrap();
        v.push(2).unwrap();
        assert!(v.is_full());
        assert_eq!(v.push(3), Err(ErrorCode::E402_ContainerFull(2)));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn test_pop() {
        let mut v = BoundedVec::<u8>::with_default(3);
        assert_eq!(v.pop(), Err(ErrorCode::E403_ContainerEmpty));
        v.push(5).unwrap();
        v.push(6).unwrap();
        assert_eq!(v.pop().unwrap(), 6);
        assert_eq!(v.len(), 1);
        assert_eq!(v.storage(), &[5, 0, 0]);
    }

    #[test]
    fn test_bounds_use_len_not_capacity() {
        let mut v = BoundedVec::<u8>::with_default(4);
        v.push(9).unwrap();
        assert_eq!(*v.get(0).unwrap(), 9);
        assert_eq!(v.get(1), Err(ErrorCode::E401_IndexOutOfBounds { index: 1, len: 1 }));
        assert!(v.set(2, 1).is_err());
        assert_eq!(*v.at(-1).unwrap(), 9);
        assert!(v.at(-2).is_err());
    }

    #[test]
    fn test_extend_is_atomic() {
        let mut v = BoundedVec::<u8>::with_default(3);
        v.push(1).unwrap();
        assert_eq!(
            v.extend_from_slice(&[2, 3, 4]),
            Err(ErrorCode::E404_ContainerOverflow { len: 1, extra: 3, capacity: 3 })
        );
        assert_eq!(v.len(), 1);
        assert_eq!(v.storage(), &[1, 0, 0]);

        v.extend_from_slice(&[2, 3]).unwrap();
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut v = BoundedVec::<u8>::with_default(0);
        assert!(v.is_full());
        assert!(v.push(1).is_err());
        assert!(v.storage().is_empty());
    }

    #[test]
    fn test_map_into_keeps_len_and_factory() {
        let mut v = BoundedVec::<u8>::with_default(3);
        v.push(4).unwrap();
        let mut mapped = v.map_into(|x| x as u32 * 10);
        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped.storage(), &[40, 0, 0]);
        mapped.push(1).unwrap();
        assert_eq!(mapped.pop().unwrap(), 1);
        assert_eq!(mapped.storage(), &[40, 0, 0]);
    }

    #[test]
    fn test_clear() {
        let mut v: BoundedVec<u8> = BoundedVec::new(2, || 9);
        v.extend_from_slice(&[1, 2]).unwrap();
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.storage(), &[9, 9]);
    }
}
