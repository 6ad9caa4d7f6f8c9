//! Public API surface.
//!
//! ## Purpose
//!
//! This module gathers the crate's public functions in one place: the
//! arithmetic functions and slice-level searches are re-exported from
//! their layers, and the `&str` conveniences defined here materialize
//! character sequences before handing them to the search core.
//!
//! ## Design notes
//!
//! * **Thin**: Nothing here adds behavior; the wrappers only convert
//!   `&str` to owned `char` sequences.
//! * **Two wrappers, two paths**: `is_substring` exercises the
//!   slice-view search, `is_substring_indexed` the cursor search. They
//!   agree on every input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::{cursor, substring};

// Publicly re-exported functions and types
#[cfg(feature = "std")]
pub use crate::adapters::stream::is_substring_readers;
pub use crate::algorithms::cursor::contains as contains_indexed;
pub use crate::algorithms::substring::contains;
pub use crate::math::factorial::factorial;
pub use crate::math::fibonacci::fibonacci;
pub use crate::math::power::{multiply, power};
pub use crate::math::square::square;
pub use crate::math::sum::sum;
pub use crate::primitives::errors::RecursionError;

// ============================================================================
// String Conveniences
// ============================================================================

/// Test whether `pattern` occurs as a contiguous substring of `text`,
/// using the slice-view search.
///
/// # Examples
///
/// ```
/// use recur_rs::prelude::is_substring;
///
/// assert!(is_substring("hello world", "hello"));
/// assert!(is_substring("hello world", "ld"));
/// assert!(is_substring("hello", ""));
/// assert!(!is_substring("", "hello"));
/// ```
pub fn is_substring(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    substring::contains(&text, &pattern)
}

/// Test whether `pattern` occurs as a contiguous substring of `text`,
/// using the index-cursor search.
///
/// Always agrees with [`is_substring`].
///
/// # Examples
///
/// ```
/// use recur_rs::prelude::is_substring_indexed;
///
/// assert!(is_substring_indexed("hello world", "orl"));
/// assert!(!is_substring_indexed("hello world", "xyz"));
/// ```
pub fn is_substring_indexed(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    cursor::contains(&text, &pattern)
}
