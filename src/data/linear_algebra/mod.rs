//! # Linear algebra primitives
//!
//! A dense, bounds-checked matrix. It is both the input format for payoff matrices and the working
//! storage of the Simplex tableau.

pub mod error;
pub mod matrix;

pub use error::{Axis, MatrixError};
pub use matrix::DenseMatrix;
