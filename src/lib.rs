//! # recur-rs — Recursive arithmetic and naive substring search
//!
//! A small, dependency-light toolkit of self-contained recursive
//! algorithms: factorial, integer power built on recursive
//! multiplication, additive squaring, slice summation, naive Fibonacci,
//! and a recursive substring-search family with a byte-stream entry
//! point.
//!
//! Every function is pure (or near-pure: the stream entry point reads
//! from I/O sources) and shares no state with any other. The crate is
//! deliberately naive: `fibonacci` is doubly recursive with no
//! memoization, and the substring search restarts the needle on
//! mismatch rather than reusing partial matches (no KMP). Exponential
//! or O(n·m) behavior on large inputs is the documented contract, not
//! a defect.
//!
//! ## Quick Start
//!
//! ```rust
//! use recur_rs::prelude::*;
//!
//! assert_eq!(factorial(5), 120);
//! assert_eq!(square(-5i32), 25);
//! assert_eq!(sum(&[1, 2, 3, 4, 5]), 15);
//! assert_eq!(fibonacci(10), 55);
//!
//! let p = power(10i64, 2)?;
//! assert_eq!(p, 100);
//!
//! assert!(is_substring("hello world", "orl"));
//! assert!(!is_substring("hello world", "xyz"));
//! # Result::<(), RecursionError>::Ok(())
//! ```
//!
//! ### Searching byte streams
//!
//! With the `std` feature (on by default), the search can be driven
//! directly from two [`std::io::Read`] sources. Both sources are
//! drained fully before the recursion starts; a read error aborts the
//! whole comparison.
//!
//! ```rust
//! use recur_rs::prelude::*;
//!
//! let haystack = "hello world".as_bytes();
//! let needle = "orl".as_bytes();
//!
//! assert!(is_substring_readers(haystack, needle)?);
//! # Result::<(), RecursionError>::Ok(())
//! ```
//!
//! ## The two search paths
//!
//! Two independent implementations share one contract (does the needle
//! occur as a contiguous subsequence of the haystack?):
//!
//! * [`prelude::contains`] recurses on slice *views*: a recursive
//!   prefix check at the current position, OR the same search on the
//!   haystack with its first element dropped.
//! * [`prelude::contains_indexed`] never slices. It walks two integer
//!   cursors over fixed slices, advancing both on a match and
//!   restarting the needle one position past the current attempt on a
//!   mismatch.
//!
//! The two paths return identical results for every input. The indexed
//! path is the one the stream entry point uses, since its inputs are
//! materialized as flat arrays anyway.
//!
//! ## Recursion depth
//!
//! Recursion depth is bounded by input magnitude: haystack length for
//! the search family, `n` for the arithmetic functions (and
//! `|multiplier|` for [`prelude::multiply`], which recurses once per
//! repeated addition). Bounding input sizes so the call stack is not
//! exhausted is the caller's responsibility; the crate does not convert
//! any recursion to iteration.
//!
//! ## Feature Flags
//!
//! * `std` (default) — enables the stream adapter and
//!   `std::error::Error` on the error type. Without it the crate is
//!   `no_std` + `alloc`.
//! * `dev` — re-exports internal layers for integration testing.
//!
//! ## Errors
//!
//! Only two operations can fail, and both fail with
//! [`prelude::RecursionError`]:
//!
//! * `power` with a negative exponent — a precondition violation,
//!   reported before any recursion begins.
//! * the stream entry point, when an underlying source reports a read
//!   error — propagated immediately, with no partial result and no
//!   retry.
//!
//! Everything else is total over its documented input domain.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - the error type and the stream byte buffer.
mod primitives;

// Layer 2: Math - pure recursive arithmetic.
//
// Factorial, power (via recursive multiplication), additive squaring,
// slice summation, and naive Fibonacci.
mod math;

// Layer 3: Algorithms - the substring-search core.
//
// One implementation recurses on slice views; the other walks index
// cursors over fixed slices.
mod algorithms;

// Layer 4: Adapters - input-format entry points.
//
// Currently a single adapter: draining two `io::Read` sources into
// character arrays and handing them to the indexed search.
#[cfg(feature = "std")]
mod adapters;

// Thin public surface: `&str` wrappers for the search family plus
// re-exports of the arithmetic functions and the error type.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard recur-rs prelude.
///
/// This module is intended to be wildcard-imported for convenient
/// access to the whole (small) public surface:
///
/// ```
/// use recur_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        contains, contains_indexed, factorial, fibonacci, is_substring, is_substring_indexed,
        multiply, power, square, sum, RecursionError,
    };

    #[cfg(feature = "std")]
    pub use crate::api::is_substring_readers;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal recursive arithmetic.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal substring-search algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal input adapters.
    #[cfg(feature = "std")]
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API surface.
    pub mod api {
        pub use crate::api::*;
    }
}
