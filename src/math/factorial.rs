//! Recursive factorial over a wide result type.
//!
//! ## Purpose
//!
//! Single-recursion factorial. Negative inputs are folded onto their
//! absolute value, so `factorial(n) == factorial(-n)` for every `n`.
//!
//! ## Design notes
//!
//! * **Wide result**: The result type is `u128` to push the overflow
//!   horizon out (to `n = 34`), not to eliminate it.
//! * **No checking**: Overflow is the caller's responsibility; the
//!   multiplication is unchecked.
//!
//! ## Invariants
//!
//! * `factorial(0) == 1`.
//! * Recursion depth is `|n|`.

// ============================================================================
// Factorial
// ============================================================================

/// Compute `|n|!` recursively.
///
/// A negative `n` operates on its absolute value, so the function is
/// total over `i64`.
///
/// # Examples
///
/// ```
/// use recur_rs::prelude::factorial;
///
/// assert_eq!(factorial(5), 120);
/// assert_eq!(factorial(-3), 6);
/// assert_eq!(factorial(0), 1);
/// ```
#[inline]
pub fn factorial(n: i64) -> u128 {
    descend(u128::from(n.unsigned_abs()))
}

fn descend(n: u128) -> u128 {
    if n == 0 {
        1
    } else {
        n * descend(n - 1)
    }
}
