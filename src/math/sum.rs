//! Recursive slice summation.
//!
//! ## Purpose
//!
//! Sums a slice of integers by recursing on an index cursor: each call
//! adds the element at the cursor to the sum of everything after it.
//! The public function fixes the cursor at zero; the private helper
//! carries it.
//!
//! ## Invariants
//!
//! * The empty slice sums to zero.
//! * Elements are added strictly left to right.
//! * Recursion depth is `values.len() + 1`.

// External dependencies
use num_traits::PrimInt;

// ============================================================================
// Sum
// ============================================================================

/// Sum the elements of `values` recursively.
///
/// # Examples
///
/// ```
/// use recur_rs::prelude::sum;
///
/// assert_eq!(sum(&[1, 2, 3, 4, 5]), 15);
/// assert_eq!(sum::<i32>(&[]), 0);
/// ```
#[inline]
pub fn sum<T: PrimInt>(values: &[T]) -> T {
    sum_from(0, values)
}

/// Sum `values[index..]`, one element per call.
fn sum_from<T: PrimInt>(index: usize, values: &[T]) -> T {
    if index < values.len() {
        values[index] + sum_from(index + 1, values)
    } else {
        T::zero()
    }
}
