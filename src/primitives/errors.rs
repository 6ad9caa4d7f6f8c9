//! Error types for recursive computation and stream draining.
//!
//! ## Purpose
//!
//! This module defines the single error enum used across the crate.
//! Only two operations can fail: `power` (precondition violation) and
//! the stream entry point (I/O failure while draining a source).
//!
//! ## Design notes
//!
//! * **Fail-Fast**: The precondition variant is raised before any
//!   recursion begins.
//! * **No wrapping**: An I/O failure carries the underlying
//!   `std::io::Error` unchanged; nothing is retried and no partial
//!   result is surfaced alongside it.
//! * **no_std**: `Display` is implemented over `core::fmt`; the I/O
//!   variant and the `std::error::Error` impl exist only with the
//!   `std` feature.
//!
//! ## Invariants
//!
//! * Every other function in the crate is total over its documented
//!   input domain and never constructs one of these values.

use core::fmt;

// ============================================================================
// Error Enum
// ============================================================================

/// Error raised by the fallible operations of the crate.
#[derive(Debug)]
pub enum RecursionError {
    /// `power` was called with a negative exponent.
    ///
    /// This is a programmer-error signal, reported before any
    /// recursion begins.
    NegativeExponent(i32),

    /// A byte source reported a read error while being drained.
    ///
    /// Propagated immediately to the stream-entry-point caller; the
    /// partially filled buffer is discarded.
    #[cfg(feature = "std")]
    StreamRead(std::io::Error),
}

impl fmt::Display for RecursionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecursionError::NegativeExponent(exponent) => {
                write!(f, "Invalid exponent: {} (must be >= 0)", exponent)
            }
            #[cfg(feature = "std")]
            RecursionError::StreamRead(source) => {
                write!(f, "Stream read failed: {}", source)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RecursionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecursionError::NegativeExponent(_) => None,
            RecursionError::StreamRead(source) => Some(source),
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for RecursionError {
    fn from(source: std::io::Error) -> Self {
        RecursionError::StreamRead(source)
    }
}
