//! Index-cursor substring search.
//!
//! ## Purpose
//!
//! The second search path, for inputs where slicing is unwanted or
//! unavailable (the stream adapter materializes sources as flat
//! arrays and searches them through this module). The haystack and
//! needle slices stay fixed; only a pair of integer cursors moves.
//!
//! ## Design notes
//!
//! * **Decision order per call**: needle consumed → found; haystack
//!   exhausted → not found; elements at the cursors equal → advance
//!   both; mismatch → restart the needle one position past where the
//!   current attempt began.
//! * **Naive restart**: The mismatch rule backtracks the haystack
//!   cursor to `haystack_index - needle_index + 1`, the classic
//!   O(n·m) restart. No partial-match reuse (KMP).
//! * **Predicate helpers**: The end-of-needle, end-of-haystack, and
//!   element-match tests are their own small functions.
//!
//! ## Invariants
//!
//! * Cursors stay within `[0, length]`; a cursor equal to its slice
//!   length means "exhausted".
//! * `haystack_index >= needle_index` at every call, so the mismatch
//!   backtrack cannot underflow.
//! * Agrees with the slice-view search on every (haystack, needle)
//!   pair.
//!
//! ## Non-goals
//!
//! * No slicing of either input, ever.

// ============================================================================
// Index-Cursor Search
// ============================================================================

/// Test whether `needle` occurs as a contiguous subsequence of
/// `haystack`, moving index cursors over fixed slices.
///
/// # Examples
///
/// ```
/// use recur_rs::prelude::contains_indexed;
///
/// let haystack: Vec<char> = "hello world".chars().collect();
/// let needle: Vec<char> = "orl".chars().collect();
///
/// assert!(contains_indexed(&haystack, &needle));
/// assert!(contains_indexed(&haystack, &[]));
/// assert!(!contains_indexed(&[], &needle));
/// ```
#[inline]
pub fn contains<T: PartialEq>(haystack: &[T], needle: &[T]) -> bool {
    search(haystack, needle, 0, 0)
}

/// One step of the cursor recursion.
fn search<T: PartialEq>(
    haystack: &[T],
    needle: &[T],
    haystack_index: usize,
    needle_index: usize,
) -> bool {
    if needle_consumed(needle, needle_index) {
        true
    } else if haystack_exhausted(haystack, haystack_index) {
        false
    } else if elements_match(haystack, needle, haystack_index, needle_index) {
        search(haystack, needle, haystack_index + 1, needle_index + 1)
    } else {
        // Restart one past the start of the current attempt, so an
        // overlapping occurrence (e.g. "ab" in "aab") is not skipped.
        search(haystack, needle, haystack_index - needle_index + 1, 0)
    }
}

/// The needle cursor has reached the end of the needle.
fn needle_consumed<T>(needle: &[T], needle_index: usize) -> bool {
    needle_index == needle.len()
}

/// The haystack cursor has reached the end of the haystack.
fn haystack_exhausted<T>(haystack: &[T], haystack_index: usize) -> bool {
    haystack_index == haystack.len()
}

/// The elements under the two cursors are equal.
fn elements_match<T: PartialEq>(
    haystack: &[T],
    needle: &[T],
    haystack_index: usize,
    needle_index: usize,
) -> bool {
    haystack[haystack_index] == needle[needle_index]
}
