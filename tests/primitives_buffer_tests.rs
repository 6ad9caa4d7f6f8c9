#![cfg(feature = "dev")]

use recur_rs::internals::primitives::buffer::ByteBuffer;

#[test]
fn test_buffer_starts_empty() {
    let buffer = ByteBuffer::new();
    assert!(buffer.is_empty());
    assert_eq!(buffer.len(), 0);
    assert_eq!(buffer.as_bytes(), &[] as &[u8]);
}

#[test]
fn test_buffer_accumulates_in_order() {
    let mut buffer = ByteBuffer::new();
    for &b in b"abc" {
        buffer.push(b);
    }

    assert_eq!(buffer.len(), 3);
    assert_eq!(buffer.as_bytes(), b"abc");
}

#[test]
fn test_buffer_into_chars_is_one_to_one() {
    let mut buffer = ByteBuffer::new();
    for &b in b"hello" {
        buffer.push(b);
    }

    let chars = buffer.into_chars();
    assert_eq!(&*chars, &['h', 'e', 'l', 'l', 'o']);
}

#[test]
fn test_buffer_into_chars_latin1_mapping() {
    let mut buffer = ByteBuffer::new();
    buffer.push(0x00);
    buffer.push(0x7F);
    buffer.push(0xE9);

    let chars = buffer.into_chars();
    assert_eq!(&*chars, &['\u{0}', '\u{7F}', 'é']);
}

#[test]
fn test_empty_buffer_into_chars() {
    let chars = ByteBuffer::new().into_chars();
    assert!(chars.is_empty());
}
