//! Error type shared by the dynamic array and the heap

use thiserror::Error;

/// Errors raised by array and heap operations
///
/// Every check happens before any mutation, so a failed call leaves the
/// collection exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An index (or slice bound) fell outside the logically present elements
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index or slice end
        index: usize,
        /// The number of elements present when the access was attempted
        len: usize,
    },
    /// `get_min`/`remove_min` on a heap with no elements
    #[error("heap is empty")]
    EmptyCollection,
}

/// Result type for array and heap operations
pub type Result<T> = std::result::Result<T, Error>;
