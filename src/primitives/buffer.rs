//! Growable byte buffer for stream draining.
//!
//! ## Purpose
//!
//! This module provides `ByteBuffer`, the scratch buffer the stream
//! adapter fills one byte at a time while draining a source, and the
//! single conversion from accumulated bytes to the fixed character
//! array the cursor search operates on.
//!
//! ## Design notes
//!
//! * **Local ownership**: A buffer is owned by the draining call that
//!   creates it and is consumed by the conversion; nothing is shared.
//! * **One conversion**: Bytes are appended while draining and
//!   converted to characters exactly once, after end-of-data.
//! * **Byte-as-character**: Each byte maps to one `char` via
//!   `char::from`, i.e. its Latin-1 code point.
//!
//! ## Invariants
//!
//! * The buffer only grows; nothing is removed before conversion.
//! * `into_chars` yields exactly one `char` per appended byte, in
//!   append order.
//!
//! ## Non-goals
//!
//! * This module does not perform I/O; the adapter layer owns the read
//!   loop.
//! * This module does not decode multi-byte text encodings.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::boxed::Box;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// ByteBuffer
// ============================================================================

/// Growable buffer of raw bytes, filled while draining a source.
#[derive(Debug, Clone, Default)]
pub struct ByteBuffer(Vec<u8>);

impl ByteBuffer {
    /// Create an empty buffer.
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append one byte read from the source.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.0.push(byte);
    }

    /// Number of bytes accumulated so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no bytes have been accumulated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// View the accumulated bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the buffer, converting each byte into one character.
    ///
    /// The result is a fixed-size array: the search recursion indexes
    /// it but never grows or shrinks it.
    #[inline]
    pub fn into_chars(self) -> Box<[char]> {
        self.0.into_iter().map(char::from).collect()
    }
}
