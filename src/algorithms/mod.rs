//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the substring-search core: two independent
//! recursive implementations of one contract — does the needle occur
//! as a contiguous subsequence of the haystack?
//!
//! - `substring` recurses on slice views (a prefix check OR the search
//!   on the haystack with its head dropped).
//! - `cursor` never slices; it walks a pair of integer cursors over
//!   fixed slices.
//!
//! The two modules return identical results for every input. Both are
//! generic over the element type, so the same code searches `char`
//! data and raw bytes.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Slice-view substring search (prefix check + head drop).
pub mod substring;

/// Index-cursor substring search (no slicing).
pub mod cursor;
