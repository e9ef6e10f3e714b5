//! # Representing linear programs
//!
//! Linear programs are given as `max c^T x` (or `min`) subject to `Ax <= b` and `x >= 0`. A slack
//! variable is added for every constraint when the program is brought into tableau form.
use crate::data::linear_algebra::error::{Axis, MatrixError};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::Objective;
use crate::data::number_types::traits::Real;

pub mod elements;
pub mod solution;

/// A linear program with only `<=` constraints and nonnegative variables.
///
/// Invariant: there is one right hand side value per constraint row, and one cost coefficient per
/// constraint column.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram<F> {
    /// Cost coefficients `c`, one per original variable.
    cost: Vec<F>,
    /// Constraint matrix `A` of size m x n.
    constraints: DenseMatrix<F>,
    /// Right hand side `b` of length m.
    b: Vec<F>,
    /// Optional starting basis, indexing into the n + m columns of the problem extended with
    /// slacks.
    basis: Option<Vec<usize>>,
    objective: Objective,
}

impl<F: Real> LinearProgram<F> {
    /// Create a new maximization problem.
    ///
    /// # Arguments
    ///
    /// * `cost`: Objective coefficients, length n.
    /// * `constraints`: Matrix of size m x n.
    /// * `b`: Right hand side, length m.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the lengths don't agree. A matrix without rows is compatible with
    /// any cost vector.
    pub fn new(cost: Vec<F>, constraints: DenseMatrix<F>, b: Vec<F>) -> Result<Self, MatrixError> {
        MatrixError::check_length(constraints.nr_rows(), b.len(), "right hand side")?;
        if constraints.nr_rows() > 0 {
            MatrixError::check_length(constraints.nr_columns(), cost.len(), "objective")?;
        }

        Ok(Self { cost, constraints, b, basis: None, objective: Objective::Maximize })
    }

    /// Change the direction of optimization.
    #[must_use]
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Provide a starting basis instead of the slack basis.
    ///
    /// # Arguments
    ///
    /// * `basis`: For each row, the index of its basic variable in the range `0..n + m`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if there isn't one index per row, `IndexOutOfBounds` if an index is
    /// outside of the extended variable range. Whether the basis columns form an identity is only
    /// known after the slacks are added, and checked when the tableau is created.
    pub fn with_basis(mut self, basis: Vec<usize>) -> Result<Self, MatrixError> {
        MatrixError::check_length(self.nr_constraints(), basis.len(), "initial basis")?;
        let nr_columns = self.nr_variables() + self.nr_constraints();
        for &column in &basis {
            MatrixError::check_index(column, nr_columns, Axis::Column)?;
        }

        self.basis = Some(basis);
        Ok(self)
    }

    /// Cost coefficients of the original variables.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Constraint matrix, without slack columns.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// Right hand side.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Starting basis, if one was provided.
    pub fn basis(&self) -> Option<&[usize]> {
        self.basis.as_deref()
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Number of original variables, n.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Number of constraints, m.
    pub fn nr_constraints(&self) -> usize {
        self.b.len()
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::error::{Axis, MatrixError};
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::data::linear_program::elements::Objective;
    use crate::data::linear_program::LinearProgram;

    fn constraints() -> DenseMatrix<f64> {
        DenseMatrix::from_data(vec![vec![1f64, 0f64], vec![0f64, 1f64]]).unwrap()
    }

    #[test]
    fn new() {
        let program = LinearProgram::new(vec![1f64, 1f64], constraints(), vec![4f64, 4f64]).unwrap();
        assert_eq!(program.nr_variables(), 2);
        assert_eq!(program.nr_constraints(), 2);
        assert_eq!(program.objective(), Objective::Maximize);
        assert_eq!(program.basis(), None);

        let program = program.with_objective(Objective::Minimize);
        assert_eq!(program.objective(), Objective::Minimize);
    }

    #[test]
    fn dimension_mismatch() {
        assert_eq!(
            LinearProgram::new(vec![1f64, 1f64], constraints(), vec![4f64]),
            Err(MatrixError::DimensionMismatch { expected: 2, found: 1, context: "right hand side" }),
        );
        assert_eq!(
            LinearProgram::new(vec![1f64], constraints(), vec![4f64, 4f64]),
            Err(MatrixError::DimensionMismatch { expected: 2, found: 1, context: "objective" }),
        );
    }

    #[test]
    fn with_basis() {
        let program = LinearProgram::new(vec![1f64, 1f64], constraints(), vec![4f64, 4f64]).unwrap();

        assert!(program.clone().with_basis(vec![0, 1]).is_ok());
        assert_eq!(
            program.clone().with_basis(vec![0]),
            Err(MatrixError::DimensionMismatch { expected: 2, found: 1, context: "initial basis" }),
        );
        assert_eq!(
            program.with_basis(vec![0, 4]),
            Err(MatrixError::IndexOutOfBounds { index: 4, bound: 4, axis: Axis::Column }),
        );
    }
}
