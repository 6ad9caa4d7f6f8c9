//! Naive doubly-recursive Fibonacci.
//!
//! ## Purpose
//!
//! The textbook definition, verbatim: `fib(n) = fib(n-1) + fib(n-2)`
//! with `fib(0) = 0` and `fib(1) = 1`.
//!
//! ## Design notes
//!
//! * **No memoization**: Exponential time is the documented contract,
//!   not a bug.
//! * **Unsigned input**: The parameter is `u32`, so a negative input
//!   is unrepresentable rather than unchecked.
//!
//! ## Non-goals
//!
//! * No iterative or matrix-power fast path.

// ============================================================================
// Fibonacci
// ============================================================================

/// Compute the `n`-th Fibonacci number by double recursion.
///
/// # Examples
///
/// ```
/// use recur_rs::prelude::fibonacci;
///
/// assert_eq!(fibonacci(0), 0);
/// assert_eq!(fibonacci(1), 1);
/// assert_eq!(fibonacci(10), 55);
/// ```
pub fn fibonacci(n: u32) -> u64 {
    if n < 2 {
        u64::from(n)
    } else {
        fibonacci(n - 1) + fibonacci(n - 2)
    }
}
