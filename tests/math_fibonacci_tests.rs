use recur_rs::prelude::*;

#[test]
fn test_fibonacci_base_cases() {
    assert_eq!(fibonacci(0), 0);
    assert_eq!(fibonacci(1), 1);
}

#[test]
fn test_fibonacci_known_values() {
    assert_eq!(fibonacci(2), 1);
    assert_eq!(fibonacci(3), 2);
    assert_eq!(fibonacci(4), 3);
    assert_eq!(fibonacci(10), 55);
    assert_eq!(fibonacci(20), 6765);
}

#[test]
fn test_fibonacci_recurrence_holds() {
    for n in 2..=20 {
        assert_eq!(
            fibonacci(n),
            fibonacci(n - 1) + fibonacci(n - 2),
            "recurrence at n = {}",
            n
        );
    }
}
