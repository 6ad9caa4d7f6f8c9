use recur_rs::prelude::*;

#[test]
fn test_factorial_base_case() {
    assert_eq!(factorial(0), 1);
}

#[test]
fn test_factorial_known_values() {
    assert_eq!(factorial(1), 1);
    assert_eq!(factorial(5), 120);
    assert_eq!(factorial(10), 3_628_800);
}

#[test]
fn test_factorial_negative_uses_absolute_value() {
    assert_eq!(factorial(-3), 6);
    assert_eq!(factorial(-1), 1);
}

#[test]
fn test_factorial_symmetric_in_sign() {
    for n in 0..=20i64 {
        assert_eq!(factorial(n), factorial(-n), "factorial({}) vs factorial({})", n, -n);
    }
}

#[test]
fn test_factorial_wide_result() {
    // 25! does not fit in u64; the u128 result type must carry it.
    assert_eq!(factorial(25), 15_511_210_043_330_985_984_000_000);
}
