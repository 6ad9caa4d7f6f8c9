use recur_rs::prelude::*;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn test_contains_empty_needle_always_matches() {
    assert!(contains(&chars("hello"), &chars("")));
    assert!(contains(&chars(""), &chars("")));
}

#[test]
fn test_contains_empty_haystack_rejects_nonempty_needle() {
    assert!(!contains(&chars(""), &chars("hello")));
}

#[test]
fn test_contains_self_match() {
    assert!(contains(&chars("hello"), &chars("hello")));
    assert!(contains(&chars("a"), &chars("a")));
}

#[test]
fn test_contains_needle_longer_than_haystack() {
    assert!(!contains(&chars("hi"), &chars("hello")));
}

#[test]
fn test_contains_prefix_middle_suffix() {
    let haystack = chars("hello world");
    assert!(contains(&haystack, &chars("hello")));
    assert!(contains(&haystack, &chars("lo w")));
    assert!(contains(&haystack, &chars("world")));
    assert!(contains(&haystack, &chars("ld")));
}

#[test]
fn test_contains_absent_needle() {
    assert!(!contains(&chars("hello world"), &chars("xyz")));
    assert!(!contains(&chars("hello world"), &chars("worlds")));
}

#[test]
fn test_contains_repeated_prefix() {
    // The failed attempt at position 0 must not consume position 1.
    assert!(contains(&chars("aab"), &chars("ab")));
    assert!(contains(&chars("aaab"), &chars("aab")));
    assert!(!contains(&chars("aaa"), &chars("ab")));
}

#[test]
fn test_contains_works_over_bytes() {
    assert!(contains(b"hello world".as_slice(), b"orl".as_slice()));
    assert!(!contains(b"hello world".as_slice(), b"xyz".as_slice()));
}
