//! Fixed-length backing store for [`DynamicArray`](crate::dynamic_array::DynamicArray)
//!
//! A [`FixedArray`] is a contiguous block of slots whose length is chosen at
//! construction and never changes. Growing or shrinking a dynamic array means
//! allocating a new `FixedArray` and moving the live elements across.
//!
//! Slots that have never been written (or whose value has been moved out) hold
//! no value, so positions past a dynamic array's logical size never keep old
//! elements alive.

use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// A fixed-length block of optionally occupied slots
#[derive(Debug, Clone)]
pub struct FixedArray<T> {
    slots: Box<[Option<T>]>,
}

impl<T> FixedArray<T> {
    /// Creates a store of `len` empty slots
    pub fn new(len: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    /// Number of slots (occupied or not)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the store has no slots at all
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the value in slot `index`, or `None` if the slot is out of
    /// range or unoccupied
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Mutable counterpart of [`get`](Self::get)
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Stores `value` in slot `index`, dropping whatever the slot held
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`. The store is
    /// left untouched and `value` is dropped.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        *slot = Some(value);
        Ok(())
    }

    /// Moves the value out of slot `index`, leaving it empty
    ///
    /// Returns `None` if the slot is out of range or already empty.
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Swaps the contents of two slots
    ///
    /// # Panics
    /// Panics if either index is out of range, like [`slice::swap`].
    pub fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }
}

/// Raw slot access; panics on an out-of-range index
impl<T> Index<usize> for FixedArray<T> {
    type Output = Option<T>;

    fn index(&self, index: usize) -> &Option<T> {
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for FixedArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Option<T> {
        &mut self.slots[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_unoccupied() {
        let store: FixedArray<i32> = FixedArray::new(4);
        assert_eq!(store.len(), 4);
        assert!(!store.is_empty());
        for i in 0..4 {
            assert_eq!(store.get(i), None);
        }
    }

    #[test]
    fn test_zero_length() {
        let store: FixedArray<u8> = FixedArray::new(0);
        assert!(store.is_empty());
        assert_eq!(store.get(0), None);
    }

    #[test]
    fn test_set_and_take() {
        let mut store = FixedArray::new(3);
        assert_eq!(store.set(2, 'c'), Ok(()));
        assert_eq!(store.set(0, 'a'), Ok(()));
        assert_eq!(store.get(0), Some(&'a'));
        assert_eq!(store.get(1), None);

        assert_eq!(store.set(0, 'z'), Ok(()));
        assert_eq!(store.take(0), Some('z'));
        assert_eq!(store.get(0), None);
        assert_eq!(store.take(2), Some('c'));
    }

    #[test]
    fn test_set_past_end_is_rejected() {
        let mut store = FixedArray::new(2);
        store.set(1, 7).unwrap();
        assert_eq!(
            store.set(2, 8),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            store.set(usize::MAX, 9),
            Err(Error::IndexOutOfRange {
                index: usize::MAX,
                len: 2
            })
        );
        assert_eq!(store.get(1), Some(&7));
        assert_eq!(store.len(), 2);

        let mut empty: FixedArray<i32> = FixedArray::new(0);
        assert_eq!(
            empty.set(0, 1),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_take_empty_or_out_of_range() {
        let mut store: FixedArray<String> = FixedArray::new(2);
        assert_eq!(store.take(0), None);
        assert_eq!(store.take(5), None);
        store.set(1, String::from("kept")).unwrap();
        assert_eq!(store.take(0), None);
        assert_eq!(store.get(1).map(String::as_str), Some("kept"));
    }

    #[test]
    fn test_index_and_get_mut() {
        let mut store = FixedArray::new(2);
        store[0] = Some(String::from("x"));
        if let Some(value) = store.get_mut(0) {
            value.push('y');
        }
        assert_eq!(store[0].as_deref(), Some("xy"));
        assert_eq!(store[0].take(), Some(String::from("xy")));
        assert_eq!(store.get(0), None);
    }

    #[test]
    fn test_swap() {
        let mut store = FixedArray::new(3);
        store.set(0, 1).unwrap();
        store.set(1, 2).unwrap();
        store.swap(0, 1);
        assert_eq!(store.get(0), Some(&2));
        assert_eq!(store.get(1), Some(&1));
        store.swap(1, 2);
        assert_eq!(store.get(1), None);
        assert_eq!(store.get(2), Some(&1));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let store: FixedArray<i32> = FixedArray::new(1);
        let _ = &store[1];
    }
}
