//! # Errors for matrix operations
//!
//! Shape and index violations are caller errors. They are returned instead of panicking, such that
//! a malformed payoff matrix can be reported to the end user.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// Direction along which an index is taken.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Axis {
    Row,
    Column,
}

impl Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// A `MatrixError` is created when a matrix is constructed or accessed inconsistently.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatrixError {
    /// A vector or row had a different length than the matrix requires.
    ///
    /// The contained `&'static str` describes which operation was attempted.
    DimensionMismatch {
        /// Length that was needed.
        expected: usize,
        /// Length that was provided.
        found: usize,
        /// Operation or object that has the wrong shape.
        context: &'static str,
    },
    /// An index was not in the range `0..bound`.
    IndexOutOfBounds {
        /// Index that was requested.
        index: usize,
        /// Number of rows or columns of the matrix.
        bound: usize,
        /// Whether a row or a column was indexed.
        axis: Axis,
    },
}

impl MatrixError {
    pub(crate) fn check_index(index: usize, bound: usize, axis: Axis) -> Result<(), MatrixError> {
        if index < bound {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfBounds { index, bound, axis })
        }
    }

    pub(crate) fn check_length(
        expected: usize,
        found: usize,
        context: &'static str,
    ) -> Result<(), MatrixError> {
        if expected == found {
            Ok(())
        } else {
            Err(MatrixError::DimensionMismatch { expected, found, context })
        }
    }
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::DimensionMismatch { expected, found, context } => write!(
                f, "dimension mismatch in {}: expected length {}, found {}", context, expected, found,
            ),
            MatrixError::IndexOutOfBounds { index, bound, axis } => write!(
                f, "{} index {} out of bounds for {} {}s", axis, index, bound, axis,
            ),
        }
    }
}

impl Error for MatrixError {}
