//! # Classic zero-sum games
//!
//! Payoff matrices of a few well known games, from the perspective of the row player.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::str::FromStr;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::Real;

/// Rock beats scissors, scissors beat paper, paper beats rock.
///
/// Strategies are ordered rock, paper, scissors.
pub fn rock_paper_scissors<F: Real>() -> DenseMatrix<F> {
    DenseMatrix::from_fn(3, 3, |i, j| match (3 + j - i) % 3 {
        0 => F::zero(),
        1 => -F::one(),
        _ => F::one(),
    })
}

/// The row player wins when both coins show the same side, the column player otherwise.
pub fn matching_pennies<F: Real>() -> DenseMatrix<F> {
    DenseMatrix::from_fn(2, 2, |i, j| if i == j { F::one() } else { -F::one() })
}

/// Morra with up to `fingers` fingers.
///
/// Both players simultaneously show between 1 and `fingers` fingers and guess how many the
/// opponent shows. If exactly one of them guesses right, that player wins the total number of
/// fingers shown. Otherwise, nobody wins.
///
/// The pure strategy `(show, guess)` has index `(show - 1) * fingers + (guess - 1)`.
pub fn morra<F: Real>(fingers: usize) -> DenseMatrix<F> {
    let strategy = |index: usize| (index / fingers + 1, index % fingers + 1);
    let size = fingers * fingers;

    DenseMatrix::from_fn(size, size, |i, j| {
        let (row_shows, row_guesses) = strategy(i);
        let (column_shows, column_guesses) = strategy(j);
        let total = F::from_literal((row_shows + column_shows) as f64);

        match (row_guesses == column_shows, column_guesses == row_shows) {
            (true, false) => total,
            (false, true) => -total,
            _ => F::zero(),
        }
    })
}

/// Selection of a built-in game, used for configuration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Game {
    /// See `rock_paper_scissors`.
    RockPaperScissors,
    /// See `matching_pennies`.
    MatchingPennies,
    /// See `morra`.
    Morra,
}

impl Game {
    /// Payoff matrix of this game.
    ///
    /// # Arguments
    ///
    /// * `fingers`: Only used for `Morra`.
    pub fn payoff_matrix<F: Real>(self, fingers: usize) -> DenseMatrix<F> {
        match self {
            Game::RockPaperScissors => rock_paper_scissors(),
            Game::MatchingPennies => matching_pennies(),
            Game::Morra => morra(fingers),
        }
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        match self {
            Game::RockPaperScissors => f.write_str("rock-paper-scissors"),
            Game::MatchingPennies => f.write_str("matching-pennies"),
            Game::Morra => f.write_str("morra"),
        }
    }
}

impl FromStr for Game {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rock-paper-scissors" => Ok(Game::RockPaperScissors),
            "matching-pennies" => Ok(Game::MatchingPennies),
            "morra" => Ok(Game::Morra),
            other => Err(format!(
                "unknown game \"{}\", expected \"rock-paper-scissors\", \"matching-pennies\" or \"morra\"",
                other,
            )),
        }
    }
}
