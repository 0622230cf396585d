//! Binary min-heap backed by a [`DynamicArray`]
//!
//! The backing array is read as a complete binary tree: the node at index `i`
//! has its parent at `(i - 1) / 2` and its children at `2i + 1` and `2i + 2`.
//! Every non-root node is greater than or equal to its parent.
//!
//! This module also provides the free functions [`percolate_down`] and
//! [`heapsort`], which run the same sift-down over any `DynamicArray`.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `add`        | O(log n)   |
//! | `remove_min` | O(log n)   |
//! | `get_min`    | O(1)       |
//! | `build_heap` | O(n)       |
//! | `heapsort`   | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use rust_array_heaps::{heapsort, DynamicArray, Heap, MinHeap};
//!
//! let mut source = DynamicArray::from_slice(&[100, 20, 6, 200, 90, 150, 300]);
//!
//! let mut heap = MinHeap::new();
//! heap.build_heap(&source);
//! source.set(0, 500).unwrap();
//! assert_eq!(heap.get_min(), Ok(&6));
//!
//! heapsort(&mut source);
//! assert_eq!(source, [500, 300, 200, 150, 90, 20, 6]);
//! ```

use std::fmt;

use crate::dynamic_array::DynamicArray;
use crate::error::{Error, Result};
use crate::traits::Heap;

/// A binary min-heap
///
/// Unlike `std::collections::BinaryHeap`, which is a max-heap, this heap
/// always yields its smallest element first.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    /// Complete binary tree in level order
    heap: DynamicArray<T>,
}

impl<T: Ord> Heap<T> for MinHeap<T> {
    fn new() -> Self {
        Self {
            heap: DynamicArray::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn size(&self) -> usize {
        self.heap.length()
    }

    fn add(&mut self, value: T) {
        self.heap.append(value);
        self.sift_up(self.heap.length() - 1);
    }

    fn get_min(&self) -> Result<&T> {
        self.heap.get(0).map_err(|_| Error::EmptyCollection)
    }

    fn remove_min(&mut self) -> Result<T> {
        if self.heap.is_empty() {
            return Err(Error::EmptyCollection);
        }

        let last_idx = self.heap.length() - 1;
        self.heap.swap(0, last_idx);
        let min = self.heap.remove_at(last_idx)?;

        let len = self.heap.length();
        percolate_down(&mut self.heap, 0, len);

        Ok(min)
    }

    fn clear(&mut self) {
        self.heap = DynamicArray::new();
    }
}

impl<T: Ord> MinHeap<T> {
    /// Replaces the contents with a copy of `source` and restores heap order
    ///
    /// The heap owns its copy; later changes to `source` are not observed.
    pub fn build_heap(&mut self, source: &DynamicArray<T>)
    where
        T: Clone,
    {
        self.heap = source.iter().cloned().collect();
        heapify(&mut self.heap);
    }

    /// Read-only view of the backing array in level order
    pub fn as_array(&self) -> &DynamicArray<T> {
        &self.heap
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index] < self.heap[parent] {
                self.heap.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        for value in iter {
            heap.add(value);
        }
        heap
    }
}

impl<T: fmt::Display> fmt::Display for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HEAP [")?;
        for (i, value) in self.heap.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

/// Moves the element at `parent` down until neither child within `bound` is
/// smaller
///
/// Only indices below `bound` (clamped to the array length) take part, which
/// lets [`heapsort`] leave its sorted tail alone. When both children are
/// smaller, the right child is chosen only if it is strictly smaller than the
/// left.
pub fn percolate_down<T: Ord>(array: &mut DynamicArray<T>, mut parent: usize, bound: usize) {
    let bound = bound.min(array.length());
    loop {
        let left = 2 * parent + 1;
        let right = 2 * parent + 2;
        let mut smallest = parent;

        if left < bound && array[left] < array[smallest] {
            smallest = left;
        }
        if right < bound && array[right] < array[smallest] {
            smallest = right;
        }

        if smallest == parent {
            break;
        }
        array.swap(parent, smallest);
        parent = smallest;
    }
}

/// Sifts down every non-leaf node, last one first
fn heapify<T: Ord>(array: &mut DynamicArray<T>) {
    let len = array.length();
    if len < 2 {
        return;
    }
    for index in (0..=(len - 2) / 2).rev() {
        percolate_down(array, index, len);
    }
}

/// Sorts `array` in place into non-ascending order
///
/// Builds a min-heap over the whole array, then repeatedly swaps the root
/// into the last unsorted position and sifts the new root down within the
/// shrinking bound. Each minimum lands at the high end, so the result is
/// descending.
pub fn heapsort<T: Ord>(array: &mut DynamicArray<T>) {
    heapify(array);
    for end in (1..array.length()).rev() {
        array.swap(0, end);
        percolate_down(array, 0, end);
    }
}
