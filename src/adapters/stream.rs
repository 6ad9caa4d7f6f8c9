//! Byte-stream entry point for the substring search.
//!
//! ## Purpose
//!
//! This module runs the substring search over two raw byte sources.
//! Each source is drained fully, byte by byte, into a growable
//! [`ByteBuffer`]; after end-of-data the buffer is converted once into
//! a fixed character array, and the two arrays go to the index-cursor
//! search.
//!
//! ## Design notes
//!
//! * **Drain first, recurse later**: No searching starts until both
//!   sources have signalled end-of-data.
//! * **Blocking**: Each read blocks until a byte arrives, end-of-data
//!   is signalled, or the source fails. This is the only blocking in
//!   the crate.
//! * **No retry**: A read error propagates immediately as
//!   [`RecursionError::StreamRead`]; the partial buffer is discarded
//!   and nothing is re-read.
//!
//! ## Key concepts
//!
//! * **Byte-as-character**: Each byte becomes one `char` (its Latin-1
//!   code point), matching the byte-wise reading.
//!
//! ## Invariants
//!
//! * On success, each source was read to end-of-data exactly once.
//! * On failure, no partial result is observable.
//!
//! ## Non-goals
//!
//! * No UTF-8 (or any multi-byte) decoding.
//! * No buffered or chunked reading; the contract is byte-by-byte.

use std::io::Read;

// Internal dependencies
use crate::algorithms::cursor;
use crate::primitives::buffer::ByteBuffer;
use crate::primitives::errors::RecursionError;

// ============================================================================
// Stream Entry Point
// ============================================================================

/// Test whether the bytes of `needle` occur contiguously within the
/// bytes of `haystack`, draining both sources first.
///
/// Fails with [`RecursionError::StreamRead`] if either source reports
/// a read error; the error is propagated without retry and without a
/// partial result.
///
/// # Examples
///
/// ```
/// use recur_rs::prelude::{is_substring_readers, RecursionError};
///
/// assert!(is_substring_readers("hello world".as_bytes(), "orl".as_bytes())?);
/// assert!(!is_substring_readers("hello world".as_bytes(), "xyz".as_bytes())?);
/// # Result::<(), RecursionError>::Ok(())
/// ```
pub fn is_substring_readers<H: Read, N: Read>(
    haystack: H,
    needle: N,
) -> Result<bool, RecursionError> {
    let haystack = drain(haystack)?;
    let needle = drain(needle)?;

    Ok(cursor::contains(&haystack, &needle))
}

/// Read `source` to end-of-data, one byte per read call, and convert
/// the accumulated bytes into a fixed character array.
fn drain<R: Read>(mut source: R) -> Result<Box<[char]>, RecursionError> {
    let mut buffer = ByteBuffer::new();
    let mut byte = [0u8; 1];

    loop {
        match source.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => buffer.push(byte[0]),
            Err(source) => return Err(RecursionError::StreamRead(source)),
        }
    }

    Ok(buffer.into_chars())
}
