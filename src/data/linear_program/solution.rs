//! # Representation of optimal solutions
//!
//! Once the Simplex method terminates with an optimum, a `Solution` is derived from the final
//! tableau. Besides the variable values, it keeps the final tableau itself, which is what the game
//! reduction reads the dual values from.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::Real;

/// An optimal basic feasible solution, together with the final state of the tableau.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Value of each original variable; zero for the nonbasic ones.
    values: Vec<F>,
    /// Value of the objective function, in the direction of the original problem.
    objective_value: F,
    /// Dual value (shadow price) of each constraint.
    dual_values: Vec<F>,
    /// Number of iterations, including the final iteration that proved optimality.
    nr_iterations: usize,
    /// Final basis: for each row, the index of its basic variable.
    basis: Vec<usize>,
    /// Final constraint matrix, including slack columns, in canonical form w.r.t. `basis`.
    tableau: DenseMatrix<F>,
    /// Final right hand side; the values of the basic variables.
    b: Vec<F>,
}

impl<F: Real> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(
        values: Vec<F>,
        objective_value: F,
        dual_values: Vec<F>,
        nr_iterations: usize,
        basis: Vec<usize>,
        tableau: DenseMatrix<F>,
        b: Vec<F>,
    ) -> Self {
        debug_assert_eq!(basis.len(), b.len());
        debug_assert_eq!(dual_values.len(), b.len());

        Self { values, objective_value, dual_values, nr_iterations, basis, tableau, b }
    }

    /// Values of the original variables.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Objective function value of this solution.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Dual values, one per constraint.
    ///
    /// For a maximization problem these solve the dual minimization problem; they are nonnegative
    /// up to the tolerance of the solve.
    pub fn dual_values(&self) -> &[F] {
        &self.dual_values
    }

    /// How many iterations the Simplex method needed.
    pub fn nr_iterations(&self) -> usize {
        self.nr_iterations
    }

    /// Final basis.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Final tableau matrix, of size m x (n + m).
    pub fn tableau(&self) -> &DenseMatrix<F> {
        &self.tableau
    }

    /// Final right hand side.
    pub fn b(&self) -> &[F] {
        &self.b
    }
}
