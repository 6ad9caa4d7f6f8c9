use recur_rs::prelude::*;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn test_cursor_empty_needle_always_matches() {
    assert!(contains_indexed(&chars("hello"), &chars("")));
    assert!(contains_indexed(&chars(""), &chars("")));
}

#[test]
fn test_cursor_empty_haystack_rejects_nonempty_needle() {
    assert!(!contains_indexed(&chars(""), &chars("hello")));
}

#[test]
fn test_cursor_self_match() {
    assert!(contains_indexed(&chars("hello"), &chars("hello")));
}

#[test]
fn test_cursor_needle_longer_than_haystack() {
    assert!(!contains_indexed(&chars("hi"), &chars("hello")));
}

#[test]
fn test_cursor_found_and_not_found() {
    let haystack = chars("hello world");
    assert!(contains_indexed(&haystack, &chars("orl")));
    assert!(contains_indexed(&haystack, &chars("hello")));
    assert!(contains_indexed(&haystack, &chars("ld")));
    assert!(!contains_indexed(&haystack, &chars("xyz")));
}

#[test]
fn test_cursor_overlapping_prefix_restart() {
    // A mismatch mid-attempt must restart one past the attempt start,
    // not at the mismatch position.
    assert!(contains_indexed(&chars("aab"), &chars("ab")));
    assert!(contains_indexed(&chars("aaab"), &chars("aab")));
    assert!(contains_indexed(&chars("ababc"), &chars("abc")));
    assert!(!contains_indexed(&chars("aaa"), &chars("ab")));
}

#[test]
fn test_cursor_agrees_with_slice_view_search() {
    let corpus = [
        ("", ""),
        ("", "a"),
        ("a", ""),
        ("a", "a"),
        ("a", "b"),
        ("hello world", "hello"),
        ("hello world", "world"),
        ("hello world", "orl"),
        ("hello world", "xyz"),
        ("hello world", "hello world"),
        ("hello", "hello world"),
        ("aab", "ab"),
        ("aaab", "aab"),
        ("ababab", "abab"),
        ("ababac", "abac"),
        ("mississippi", "issip"),
        ("mississippi", "sipp"),
        ("mississippi", "pipi"),
    ];

    for (haystack, needle) in corpus {
        let h = chars(haystack);
        let n = chars(needle);
        assert_eq!(
            contains(&h, &n),
            contains_indexed(&h, &n),
            "paths disagree on ({:?}, {:?})",
            haystack,
            needle
        );
    }
}

#[test]
fn test_cursor_exhaustive_small_alphabet_agreement() {
    // Every (haystack, needle) pair over {a, b} up to lengths 5 and 3.
    let alphabet = ['a', 'b'];
    let mut haystacks: Vec<Vec<char>> = vec![vec![]];
    let mut frontier: Vec<Vec<char>> = vec![vec![]];
    for _ in 0..5 {
        let mut next = Vec::new();
        for h in &frontier {
            for &c in &alphabet {
                let mut grown = h.clone();
                grown.push(c);
                next.push(grown);
            }
        }
        haystacks.extend(next.iter().cloned());
        frontier = next;
    }

    let needles: Vec<Vec<char>> = haystacks
        .iter()
        .filter(|n| n.len() <= 3)
        .cloned()
        .collect();

    for h in &haystacks {
        for n in &needles {
            assert_eq!(
                contains(h, n),
                contains_indexed(h, n),
                "paths disagree on ({:?}, {:?})",
                h,
                n
            );
        }
    }
}
