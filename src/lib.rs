//! Dynamic Array and Binary Min-Heap for Rust
//!
//! This crate provides a capacity-tracked resizable array and a binary
//! min-heap that uses it as backing storage, plus a few algorithms built on
//! top of them.
//!
//! # Features
//!
//! - **Dynamic Array**: amortized O(1) append with capacity doubling; O(n) positional insert and
//!   remove with quarter-full shrinking; slicing, `map`, `filter` and `reduce`
//! - **Min-Heap**: O(log n) `add` and `remove_min` by sift-up/sift-down; O(n) `build_heap`
//! - **Heapsort**: in-place, producing non-ascending order
//! - **Run algorithms**: `chunk` into non-descending runs and `find_mode` over adjacent runs
//!
//! # Example
//!
//! ```rust
//! use rust_array_heaps::{DynamicArray, Heap, MinHeap};
//!
//! let array: DynamicArray<i32> = [5, 3, 8, 1].into_iter().collect();
//! let mut heap = MinHeap::new();
//! heap.build_heap(&array);
//!
//! assert_eq!(heap.remove_min(), Ok(1));
//! assert_eq!(heap.get_min(), Ok(&3));
//! ```

pub mod algorithms;
pub mod dynamic_array;
pub mod error;
pub mod min_heap;
pub mod storage;
pub mod traits;

// Re-export the main types for convenience
pub use algorithms::{chunk, find_mode, Chunked};
pub use dynamic_array::DynamicArray;
pub use error::{Error, Result};
pub use min_heap::{heapsort, percolate_down, MinHeap};
pub use traits::Heap;
