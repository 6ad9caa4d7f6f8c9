//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure recursive arithmetic functions:
//! - Factorial over a wide result type
//! - Integer power built on recursive repeated-addition multiplication
//! - Additive squaring
//! - Index-accumulating slice summation
//! - Naive doubly-recursive Fibonacci
//!
//! Each function is a leaf: none of them depends on any other layer
//! except `power`, which can fail and therefore uses the Layer 1 error
//! type.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Factorial with a wide result type.
pub mod factorial;

/// Integer power and the recursive-multiply primitive.
pub mod power;

/// Squaring by recursive addition.
pub mod square;

/// Recursive slice summation.
pub mod sum;

/// Naive doubly-recursive Fibonacci.
pub mod fibonacci;
