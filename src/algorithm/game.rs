//! # Two-player zero-sum games
//!
//! A matrix game is reduced to a pair of linear programs. After shifting the payoff matrix `A` to
//! be strictly positive, the column player solves
//!
//! ```text
//! max 1^T y s.t. A y <= 1, y >= 0
//! ```
//!
//! and the row player solves
//!
//! ```text
//! min 1^T x s.t. A^T x >= 1, x >= 0.
//! ```
//!
//! These programs are each other's dual. The row player's program has no trivial basic feasible
//! solution, so instead of solving it directly, its optimum is read from the dual values of the
//! column player's final tableau. Normalizing both optima gives the optimal mixed strategies; the
//! reciprocal of their common objective value is the value of the shifted game.
//!
//! The Simplex tolerance is absolute. The shifted matrix is therefore divided by its largest value
//! before solving, so that payoffs of any magnitude are solved with the same relative precision.
use log::{debug, info};

use crate::algorithm::error::SolveError;
use crate::algorithm::simplex::settings::Settings;
use crate::algorithm::simplex::solve;
use crate::data::linear_algebra::error::MatrixError;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::LinearProgram;
use crate::data::number_types::traits::Real;

/// Optimal mixed strategies of both players and the value of the game.
///
/// The value is from the perspective of the row player: the payoff they can guarantee themselves,
/// and the most the column player can be forced to pay.
#[derive(Clone, Debug, PartialEq)]
pub struct GameResult<F> {
    strategy_x: Vec<F>,
    strategy_y: Vec<F>,
    value: F,
}

impl<F: Real> GameResult<F> {
    /// Probability of each row being played by the row player.
    pub fn strategy_x(&self) -> &[F] {
        &self.strategy_x
    }

    /// Probability of each column being played by the column player.
    pub fn strategy_y(&self) -> &[F] {
        &self.strategy_y
    }

    /// Expected payoff to the row player when both play optimally.
    pub fn value(&self) -> F {
        self.value
    }
}

/// The row player's program `min 1^T x s.t. A^T x >= 1, x >= 0` in `<=` form.
///
/// Written as `(-A^T) x <= -1`, the right hand side is negative. It can't be solved without a first
/// phase, so `solve_game` doesn't use it; the Simplex method rejects it with `InfeasibleInput`.
///
/// # Arguments
///
/// * `positive`: Strictly positive payoff matrix.
pub fn player_one_program<F: Real>(positive: &DenseMatrix<F>) -> Result<LinearProgram<F>, MatrixError> {
    LinearProgram::new(
        vec![F::one(); positive.nr_rows()],
        positive.transpose().map(|value| -value),
        vec![-F::one(); positive.nr_columns()],
    ).map(|program| program.with_objective(Objective::Minimize))
}

/// The column player's program `max 1^T y s.t. A y <= 1, y >= 0`.
///
/// The slacks form a feasible basis, so this program is solved directly.
///
/// # Arguments
///
/// * `positive`: Strictly positive payoff matrix.
pub fn player_two_program<F: Real>(positive: &DenseMatrix<F>) -> Result<LinearProgram<F>, MatrixError> {
    LinearProgram::new(
        vec![F::one(); positive.nr_columns()],
        positive.clone(),
        vec![F::one(); positive.nr_rows()],
    )
}

/// Solve a zero-sum game.
///
/// # Arguments
///
/// * `payoff`: Payoff to the row player for each pair of pure strategies. May contain values of any
/// sign.
/// * `settings`: Passed on to the Simplex method.
///
/// # Return value
///
/// Optimal strategies for both players and the value of the game.
///
/// # Errors
///
/// `DimensionMismatch` when the matrix has no rows or no columns, or any error the Simplex method
/// reports for the column player's program.
pub fn solve_game<F: Real>(
    payoff: &DenseMatrix<F>,
    settings: &Settings<F>,
) -> Result<GameResult<F>, SolveError> {
    if payoff.is_empty() {
        return Err(MatrixError::DimensionMismatch {
            expected: 1,
            found: 0,
            context: "payoff matrix",
        }.into());
    }

    let (positive, shift) = payoff.make_positive();
    // Strictly positive, and so is its maximum
    let scale = positive.max_value().unwrap_or_else(F::one);
    let scaled = positive.map(|value| value / scale);
    debug!("Shifted payoff matrix by {} and scaled it by 1 / {}", shift, scale);

    let solution = solve(&player_two_program(&scaled)?, settings)?;
    debug!("Column player's program solved in {} iterations", solution.nr_iterations());

    // Slightly negative dual values are round-off
    let x = solution.dual_values().iter()
        .map(|&value| value.max(F::zero()))
        .collect::<Vec<_>>();
    let (strategy_x, theta) = normalize(x);
    let (strategy_y, _) = normalize(solution.values().to_vec());

    let positive_value = if theta > F::zero() { theta.recip() } else { F::one() };
    let value = positive_value * scale - shift;
    info!("Game value {:.4}", value);

    Ok(GameResult { strategy_x, strategy_y, value })
}

/// Scale values to sum to one, all zeros if they sum to zero.
///
/// # Return value
///
/// The scaled values and their original sum.
fn normalize<F: Real>(mut values: Vec<F>) -> (Vec<F>, F) {
    let total = values.iter().copied().sum::<F>();
    if total > F::zero() {
        for value in &mut values {
            *value /= total;
        }
    } else {
        values.fill(F::zero());
    }

    (values, total)
}
