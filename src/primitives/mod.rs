//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the building blocks the rest of the crate sits on:
//! - The crate-wide error type
//! - The growable byte buffer used when draining streams
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Crate-wide error type.
pub mod errors;

/// Growable byte buffer for stream draining.
pub mod buffer;
