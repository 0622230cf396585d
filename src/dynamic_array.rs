//! Resizable array over a fixed-length backing store
//!
//! [`DynamicArray`] tracks a logical `size` separately from the `capacity`
//! of its [`FixedArray`] backing store. Elements at indices `[0, size)` are
//! live; the remaining slots are empty.
//!
//! # Growth and shrink policy
//!
//! - Appending or inserting into a full array first doubles the capacity.
//! - Removing from an array whose size is below a quarter of its capacity,
//!   when that capacity exceeds [`SHRINK_FLOOR`], first shrinks the capacity to
//!   `max(2 * size, SHRINK_FLOOR)`. The check uses the size *before* the
//!   element is removed.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity     |
//! |-------------|----------------|
//! | `get`/`set` | O(1)           |
//! | `append`    | O(1) amortized |
//! | `insert_at` | O(n)           |
//! | `remove_at` | O(n)           |
//! | `slice`     | O(length)      |
//!
//! # Example
//!
//! ```rust
//! use rust_array_heaps::DynamicArray;
//!
//! let mut arr = DynamicArray::new();
//! for i in 0..5 {
//!     arr.append(i * 10);
//! }
//! assert_eq!(arr.length(), 5);
//! assert_eq!(arr.capacity(), 8);
//!
//! arr.insert_at(0, -10).unwrap();
//! assert_eq!(arr.remove_at(5).unwrap(), 40);
//! assert_eq!(arr, [-10, 0, 10, 20, 30]);
//! assert_eq!(arr.to_string(), "DYN_ARR Size/Cap: 5/8 [-10, 0, 10, 20, 30]");
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};
use crate::storage::FixedArray;

/// Capacity of an array created with [`DynamicArray::new`]
pub const DEFAULT_CAPACITY: usize = 4;

/// Smallest capacity a shrink will produce; arrays at or below this capacity
/// never shrink
pub const SHRINK_FLOOR: usize = 10;

/// A contiguous, capacity-tracked array
#[derive(Debug, Clone)]
pub struct DynamicArray<T> {
    size: usize,
    data: FixedArray<T>,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with room for `capacity` elements
    ///
    /// A capacity of zero is raised to one so that doubling can make progress.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            size: 0,
            data: FixedArray::new(capacity.max(1)),
        }
    }

    /// Number of logically present elements
    pub fn length(&self) -> usize {
        self.size
    }

    /// Returns true if the array holds no elements
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Length of the backing store
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::IndexOutOfRange {
            index,
            len: self.size,
        }
    }

    /// Returns a reference to the element at `index`
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] unless `index < length()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        match self.data.get(index) {
            Some(value) if index < self.size => Ok(value),
            _ => Err(self.out_of_range(index)),
        }
    }

    /// Returns a mutable reference to the element at `index`
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] unless `index < length()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let err = self.out_of_range(index);
        match self.data.get_mut(index) {
            Some(value) if index < self.size => Ok(value),
            _ => Err(err),
        }
    }

    /// Overwrites the element at `index`
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] unless `index < length()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Swaps the elements at `a` and `b`
    ///
    /// # Panics
    /// Panics if either index is not below `length()`, like [`slice::swap`].
    pub fn swap(&mut self, a: usize, b: usize) {
        for index in [a, b] {
            if index >= self.size {
                panic!("{}", self.out_of_range(index));
            }
        }
        self.data.swap(a, b);
    }

    /// Moves the live elements into a fresh backing store of `new_capacity`
    ///
    /// Does nothing if `new_capacity` is zero or smaller than `length()`.
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity == 0 || new_capacity < self.size {
            return;
        }
        let mut old = std::mem::replace(&mut self.data, FixedArray::new(new_capacity));
        // Slot positions are kept, including any slot emptied by `remove_at`.
        for index in 0..self.size {
            self.data[index] = old.take(index);
        }
    }

    /// Adds `value` at the end, doubling the capacity first if the array is full
    pub fn append(&mut self, value: T) {
        if self.size == self.capacity() {
            self.resize(self.capacity() * 2);
        }
        // Slot `size` exists once the array is not full.
        if let Err(err) = self.data.set(self.size, value) {
            unreachable!("{err}");
        }
        self.size += 1;
    }

    /// Inserts `value` at `index`, shifting later elements one slot right
    ///
    /// `index == length()` appends.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index > length()`; the array is
    /// left untouched.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.size {
            return Err(self.out_of_range(index));
        }
        if self.size == self.capacity() {
            self.resize(self.capacity() * 2);
        }
        // The empty slot at `size` walks down to `index`.
        for i in (index + 1..=self.size).rev() {
            self.data.swap(i, i - 1);
        }
        self.data.set(index, value)?;
        self.size += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements one
    /// slot left
    ///
    /// Before shifting, the capacity shrinks to `max(2 * size, SHRINK_FLOOR)`
    /// when `size < capacity / 4` and `capacity > SHRINK_FLOOR`, where `size`
    /// is the length prior to this removal.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] unless `index < length()`; the array
    /// is left untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.size {
            return Err(self.out_of_range(index));
        }
        // Live slots are always occupied, so only the bounds check can fail.
        let Some(removed) = self.data.take(index) else {
            return Err(self.out_of_range(index));
        };
        if 4 * self.size < self.capacity() && self.capacity() > SHRINK_FLOOR {
            self.resize((self.size * 2).max(SHRINK_FLOOR));
        }
        // The emptied slot walks up to `size - 1`.
        for i in index..self.size - 1 {
            self.data.swap(i, i + 1);
        }
        self.size -= 1;
        Ok(removed)
    }

    /// Iterates over the elements in index order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            array: self,
            index: 0,
        }
    }

    /// Returns a new array holding `f` applied to every element, in order
    pub fn map<U, F>(&self, f: F) -> DynamicArray<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    /// Folds the elements from left to right into an accumulator of any type
    ///
    /// An empty array returns `initial`.
    ///
    /// ```rust
    /// use rust_array_heaps::DynamicArray;
    ///
    /// let words = DynamicArray::from_slice(&["heap", "array", "run"]);
    /// assert_eq!(words.fold(0, |total, word| total + word.len()), 12);
    /// ```
    pub fn fold<U, F>(&self, initial: U, f: F) -> U
    where
        F: FnMut(U, &T) -> U,
    {
        self.iter().fold(initial, f)
    }

    /// Like [`fold`](Self::fold), but the accumulator has the element type
    ///
    /// With `initial` present, folding starts at the first element using it as
    /// the seed. Without it, the first element is the seed and folding starts
    /// at the second. An empty array returns `initial` as given.
    pub fn reduce<F>(&self, f: F, initial: Option<T>) -> Option<T>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        match initial {
            Some(seed) => Some(self.fold(seed, f)),
            None => {
                let mut values = self.iter();
                let seed = values.next()?.clone();
                Some(values.fold(seed, f))
            }
        }
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Builds an array by appending a copy of each element of `values`
    pub fn from_slice(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }

    /// Returns a new array with copies of `length` elements starting at `start`
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] unless `start < length()` and
    /// `start + length <= length()`. In particular an empty array cannot be
    /// sliced, even with `length == 0`.
    pub fn slice(&self, start: usize, length: usize) -> Result<Self> {
        if start >= self.size {
            return Err(self.out_of_range(start));
        }
        let end = start
            .checked_add(length)
            .filter(|&end| end <= self.size)
            .ok_or(self.out_of_range(start.saturating_add(length)))?;
        Ok(self.iter().skip(start).take(end - start).cloned().collect())
    }

    /// Returns a new array with the elements for which `predicate` holds,
    /// in their original order
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|&value| predicate(value)).cloned().collect()
    }

    /// Copies the elements into a `Vec`
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        for value in iter {
            array.append(value);
        }
        array
    }
}

/// Checked like [`DynamicArray::get`]; panics on an out-of-range index
impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Arrays compare by their elements; capacity is ignored
impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.size == N && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for DynamicArray<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.size == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DYN_ARR Size/Cap: {}/{} [", self.size, self.capacity())?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

/// Borrowing iterator over a [`DynamicArray`]
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    array: &'a DynamicArray<T>,
    index: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let value = self.array.get(self.index).ok()?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.size.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
