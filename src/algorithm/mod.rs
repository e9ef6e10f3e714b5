//! # Algorithms
//!
//! The Simplex method for linear programs and the reduction of matrix games to linear programs.
pub mod error;
pub mod game;
pub mod simplex;
