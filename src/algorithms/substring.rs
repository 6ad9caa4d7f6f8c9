//! Slice-view substring search.
//!
//! ## Purpose
//!
//! The first of the two search paths. At each haystack position it
//! asks two questions, joined by a short-circuit OR: does the needle
//! match *here* (a recursive prefix check), and if not, does it match
//! anywhere in the haystack with its first element dropped?
//!
//! ## Design notes
//!
//! * **Views, not copies**: Advancing the haystack reslices the same
//!   backing storage (`&haystack[1..]`); nothing is reallocated.
//! * **One early exit**: The only non-recursive shortcut is the length
//!   check — a needle longer than the remaining haystack can never
//!   match.
//! * **No backtracking in the prefix check**: The first mismatch ends
//!   the prefix attempt immediately; restarting at the next position
//!   is the outer recursion's job.
//!
//! ## Invariants
//!
//! * `contains(h, &[])` is true for every haystack, including the
//!   empty one.
//! * Whenever `is_prefix` is entered, `haystack.len() >= needle.len()`.
//! * Recursion depth is bounded by `haystack.len()` for the outer
//!   search plus `needle.len()` for a prefix attempt.
//!
//! ## Non-goals
//!
//! * No partial-match reuse (KMP); worst case is O(n·m) by design.

// ============================================================================
// Slice-View Search
// ============================================================================

/// Test whether `needle` occurs as a contiguous subsequence of
/// `haystack`, recursing on slice views.
///
/// # Examples
///
/// ```
/// use recur_rs::prelude::contains;
///
/// let haystack: Vec<char> = "hello world".chars().collect();
/// let needle: Vec<char> = "lo w".chars().collect();
///
/// assert!(contains(&haystack, &needle));
/// assert!(contains(&haystack, &[]));
/// assert!(!contains(&needle, &haystack));
/// ```
pub fn contains<T: PartialEq>(haystack: &[T], needle: &[T]) -> bool {
    haystack.len() >= needle.len()
        && (is_prefix(haystack, needle) || contains(&haystack[1..], needle))
}

/// Test whether `needle` matches at position 0 of `haystack`.
///
/// Callers guarantee `haystack.len() >= needle.len()`, so indexing the
/// haystack head is safe whenever the needle is non-empty.
fn is_prefix<T: PartialEq>(haystack: &[T], needle: &[T]) -> bool {
    needle.is_empty() || (haystack[0] == needle[0] && is_prefix(&haystack[1..], &needle[1..]))
}
