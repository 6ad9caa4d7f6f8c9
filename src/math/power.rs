//! Integer power built on a recursive-multiply primitive.
//!
//! ## Purpose
//!
//! This module provides `power`, which raises an integer base to a
//! non-negative exponent, and `multiply`, the repeated-addition
//! primitive it is built on. `power` never uses native multiplication:
//! each step multiplies through `multiply`, which itself only adds.
//!
//! ## Design notes
//!
//! * **Precondition**: A negative exponent is rejected before any
//!   recursion begins.
//! * **Sign normalization**: `multiply` negates both operands when the
//!   multiplier is negative, so the addition loop always counts down
//!   from a non-negative multiplier.
//! * **Generics**: Both functions are generic over
//!   `PrimInt + Signed`, so any signed primitive integer works.
//!
//! ## Invariants
//!
//! * `power(base, 0) == 1` for every base.
//! * `multiply(x, n)` recursion depth is `|n|`; `power(base, e)`
//!   stacks one `multiply` descent per exponent step.
//!
//! ## Non-goals
//!
//! * No fast exponentiation (squaring); the naive chain is the
//!   contract.
//! * No overflow checking.

// External dependencies
use num_traits::{PrimInt, Signed};

// Internal dependencies
use crate::primitives::errors::RecursionError;

// ============================================================================
// Power
// ============================================================================

/// Raise `base` to `exponent` using only recursive multiplication.
///
/// Fails with [`RecursionError::NegativeExponent`] when `exponent < 0`.
///
/// # Examples
///
/// ```
/// use recur_rs::prelude::{power, RecursionError};
///
/// assert_eq!(power(10i32, 2)?, 100);
/// assert_eq!(power(-10i32, 3)?, -1000);
/// assert_eq!(power(7i32, 0)?, 1);
/// assert!(power(10i32, -3).is_err());
/// # Result::<(), RecursionError>::Ok(())
/// ```
pub fn power<T: PrimInt + Signed>(base: T, exponent: i32) -> Result<T, RecursionError> {
    if exponent < 0 {
        return Err(RecursionError::NegativeExponent(exponent));
    }

    let result = if exponent == 0 {
        T::one()
    } else {
        multiply(base, power(base, exponent - 1)?)
    };

    Ok(result)
}

// ============================================================================
// Recursive Multiplication
// ============================================================================

/// Multiply two integers by recursive repeated addition.
///
/// When the multiplier is negative, both operands are negated first,
/// which preserves the product and leaves a non-negative count of
/// additions.
///
/// # Examples
///
/// ```
/// use recur_rs::prelude::multiply;
///
/// assert_eq!(multiply(4i32, 3), 12);
/// assert_eq!(multiply(4i32, -3), -12);
/// assert_eq!(multiply(-4i32, -3), 12);
/// assert_eq!(multiply(5i32, 0), 0);
/// ```
pub fn multiply<T: PrimInt + Signed>(multiplicand: T, multiplier: T) -> T {
    if multiplier < T::zero() {
        multiply(-multiplicand, -multiplier)
    } else if multiplier == T::zero() {
        T::zero()
    } else {
        multiplicand + multiply(multiplicand, multiplier - T::one())
    }
}
