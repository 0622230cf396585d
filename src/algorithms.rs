//! Run-based algorithms over [`DynamicArray`]
//!
//! - [`chunk`] splits an array into maximal non-descending runs.
//! - [`find_mode`] reports the most frequent values, assuming equal values
//!   sit next to each other (e.g. the array is sorted).

use crate::dynamic_array::DynamicArray;

/// Result of [`chunk`]
#[derive(Debug, Clone, PartialEq)]
pub enum Chunked<'a, T> {
    /// The input was empty and is handed back as-is
    Unchanged(&'a DynamicArray<T>),
    /// Maximal non-descending runs, in their original order
    Runs(DynamicArray<DynamicArray<T>>),
}

impl<T> Chunked<'_, T> {
    /// Returns the runs, or `None` for an empty input
    pub fn runs(&self) -> Option<&DynamicArray<DynamicArray<T>>> {
        match self {
            Chunked::Runs(runs) => Some(runs),
            Chunked::Unchanged(_) => None,
        }
    }

    /// Consuming counterpart of [`runs`](Self::runs)
    pub fn into_runs(self) -> Option<DynamicArray<DynamicArray<T>>> {
        match self {
            Chunked::Runs(runs) => Some(runs),
            Chunked::Unchanged(_) => None,
        }
    }
}

/// Splits `array` into maximal runs where each element is `>=` the one
/// before it
///
/// Each run is an independent copy. An empty array is returned unchanged as
/// [`Chunked::Unchanged`] rather than as an empty list of runs.
///
/// ```rust
/// use rust_array_heaps::{chunk, DynamicArray};
///
/// let array = DynamicArray::from_slice(&[10, 20, 30, 30, 5, 10, 1, 2, 3, 4]);
/// let runs = chunk(&array).into_runs().unwrap();
/// assert_eq!(runs.length(), 3);
/// assert_eq!(runs[0], [10, 20, 30, 30]);
/// assert_eq!(runs[1], [5, 10]);
/// assert_eq!(runs[2], [1, 2, 3, 4]);
/// ```
pub fn chunk<T: Ord + Clone>(array: &DynamicArray<T>) -> Chunked<'_, T> {
    let mut values = array.iter();
    let Some(first) = values.next() else {
        return Chunked::Unchanged(array);
    };

    let mut runs = DynamicArray::new();
    let mut current = DynamicArray::new();
    current.append(first.clone());

    let mut previous = first;
    for value in values {
        if value < previous {
            runs.append(std::mem::take(&mut current));
        }
        current.append(value.clone());
        previous = value;
    }
    runs.append(current);

    Chunked::Runs(runs)
}

/// Returns every value whose run of adjacent equal elements is longest,
/// together with that run length
///
/// Values appear in the order their runs occur. An empty array yields no
/// values and a frequency of 0.
///
/// ```rust
/// use rust_array_heaps::{find_mode, DynamicArray};
///
/// let array = DynamicArray::from_slice(&[1, 1, 2, 3, 3, 4]);
/// let (modes, frequency) = find_mode(&array);
/// assert_eq!(modes, [1, 3]);
/// assert_eq!(frequency, 2);
/// ```
pub fn find_mode<T: Ord + Clone>(array: &DynamicArray<T>) -> (DynamicArray<T>, usize) {
    let mut modes = DynamicArray::new();
    let mut values = array.iter();
    let Some(mut current) = values.next() else {
        return (modes, 0);
    };

    let mut max_frequency = 1;
    let mut run = 1;
    for value in values {
        if value == current {
            run += 1;
            continue;
        }
        record_run(&mut modes, &mut max_frequency, current, run);
        current = value;
        run = 1;
    }
    record_run(&mut modes, &mut max_frequency, current, run);

    (modes, max_frequency)
}

fn record_run<T: Clone>(
    modes: &mut DynamicArray<T>,
    max_frequency: &mut usize,
    value: &T,
    run: usize,
) {
    if run > *max_frequency {
        *max_frequency = run;
        *modes = DynamicArray::new();
        modes.append(value.clone());
    } else if run == *max_frequency {
        modes.append(value.clone());
    }
}
