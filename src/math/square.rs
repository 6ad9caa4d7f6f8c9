//! Squaring by recursive addition.
//!
//! ## Purpose
//!
//! Computes `x²` without any multiplication, using the identity
//! `x² = 2x - 1 + (x - 1)²` with base case `0² = 0`. Negative inputs
//! recurse onto their negation, so `square(-x) == square(x)`.
//!
//! ## Invariants
//!
//! * `square(x) >= 0` for every `x` within range.
//! * Recursion depth is `|x| + 1`.

// External dependencies
use num_traits::{PrimInt, Signed};

// ============================================================================
// Square
// ============================================================================

/// Compute `x * x` by recursive addition.
///
/// # Examples
///
/// ```
/// use recur_rs::prelude::square;
///
/// assert_eq!(square(5i32), 25);
/// assert_eq!(square(-5i32), 25);
/// assert_eq!(square(0i32), 0);
/// ```
pub fn square<T: PrimInt + Signed>(x: T) -> T {
    if x == T::zero() {
        T::zero()
    } else if x < T::zero() {
        square(-x)
    } else {
        x + x - T::one() + square(x - T::one())
    }
}
