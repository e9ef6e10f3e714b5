//! # Number types
//!
//! The matrix, the Simplex tableau and the game reduction are written against the `Real` trait
//! rather than against `f64` directly. Only the primitive floats implement it; exact arithmetic is
//! not supported.
pub mod traits;
