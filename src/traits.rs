//! Common trait for heap data structures
//!
//! [`Heap`] is the interface the binary min-heap in this crate implements.
//! Code written against it (including the integration test helpers) does not
//! depend on how the heap stores its elements.

use crate::error::Result;

/// A min-ordered priority queue of values
///
/// The stored values act as their own priorities, so `T` must be totally
/// ordered.
///
/// [`MinHeap`](crate::MinHeap) is the only implementation. The trait exists so
/// the generic helpers in `tests/generic_heap_tests.rs` can be written once
/// against `H: Heap<T>` and run against any heap.
///
/// # Example
///
/// ```rust
/// use rust_array_heaps::{Error, Heap, MinHeap};
///
/// let mut heap = MinHeap::new();
/// heap.add(3);
/// heap.add(1);
/// heap.add(2);
///
/// assert_eq!(heap.get_min(), Ok(&1));
/// assert_eq!(heap.remove_min(), Ok(1));
/// assert_eq!(heap.size(), 2);
///
/// heap.clear();
/// assert_eq!(heap.remove_min(), Err(Error::EmptyCollection));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn size(&self) -> usize;

    /// Inserts a value
    ///
    /// # Time Complexity
    /// O(log n)
    fn add(&mut self, value: T);

    /// Returns the minimum value without removing it
    ///
    /// # Errors
    /// Returns [`Error::EmptyCollection`](crate::Error::EmptyCollection) if the
    /// heap is empty.
    fn get_min(&self) -> Result<&T>;

    /// Removes and returns the minimum value
    ///
    /// # Errors
    /// Returns [`Error::EmptyCollection`](crate::Error::EmptyCollection) if the
    /// heap is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove_min(&mut self) -> Result<T>;

    /// Removes every element
    fn clear(&mut self);
}
