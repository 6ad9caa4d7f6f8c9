//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer adapts foreign input formats to the search core. There
//! is one adapter: `stream`, which drains two `std::io::Read` sources
//! into character arrays and hands them to the index-cursor search.
//!
//! The whole layer requires the `std` feature; the rest of the crate
//! does not.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Byte-stream entry point for the substring search.
pub mod stream;
