//! # Error reporting for solving
//!
//! Every way in which a solve can fail without producing an optimum. None of these are retried: a
//! failed solve is definitive for its input.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

use crate::data::linear_algebra::error::MatrixError;

/// A `SolveError` is returned when the Simplex method can't produce an optimal solution.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// The problem or an intermediate result had inconsistent dimensions, or was indexed out of
    /// range.
    Matrix(MatrixError),
    /// A provided starting basis doesn't form an identity matrix in the extended constraint
    /// matrix.
    InvalidBasis {
        /// Row of the basis entry that was rejected.
        row: usize,
        /// Column that was claimed to be basic for that row.
        column: usize,
    },
    /// The right hand side has a negative value, so that the slack basis isn't feasible.
    ///
    /// A first phase with artificial variables would be needed; it is deliberately not
    /// implemented. The caller should shift the problem instead.
    InfeasibleInput {
        /// First row with a negative right hand side.
        row: usize,
        /// The offending value.
        value: f64,
    },
    /// The entering column has no positive entry, so there is no leaving row: the objective
    /// function can be improved without limit.
    Unbounded {
        /// Column that could enter the basis without bound.
        column: usize,
    },
    /// No optimum was found within the configured number of iterations.
    IterationLimitExceeded {
        /// The configured maximum.
        limit: usize,
    },
}

impl Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::Matrix(error) => error.fmt(f),
            SolveError::InvalidBasis { row, column } => write!(
                f, "invalid initial basis: column {} is not a unit vector for row {}", column, row,
            ),
            SolveError::InfeasibleInput { row, value } => write!(
                f, "infeasible initial right hand side: b[{}] = {} (needs a first phase with artificial variables)",
                row, value,
            ),
            SolveError::Unbounded { column } => write!(
                f, "problem is unbounded: no pivot row for column {}", column,
            ),
            SolveError::IterationLimitExceeded { limit } => write!(
                f, "no optimum found within {} iterations", limit,
            ),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SolveError::Matrix(error) => Some(error),
            _ => None,
        }
    }
}

impl From<MatrixError> for SolveError {
    fn from(error: MatrixError) -> Self {
        SolveError::Matrix(error)
    }
}
