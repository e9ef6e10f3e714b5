//! # Zero-sum matrix games
//!
//! Two-player zero-sum games are solved by reducing them to a pair of linear programs, which are
//! solved using a primal Simplex method on a dense tableau.
//!
//! ```
//! use zerosum::algorithm::game::solve_game;
//! use zerosum::algorithm::simplex::settings::Settings;
//! use zerosum::data::games::matching_pennies;
//!
//! let result = solve_game(&matching_pennies::<f64>(), &Settings::default()).unwrap();
//! assert!(result.value().abs() < 1e-9);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;
