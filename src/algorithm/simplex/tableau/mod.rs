//! # The Simplex tableau
//!
//! Contains the dense tableau and the elementary operations performed upon it. The tableau holds
//! the constraint matrix extended with one slack column per row, kept in canonical form with
//! respect to the current basis: the basis columns together form an identity matrix.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::{izip, repeat_n, Itertools};

use crate::algorithm::error::SolveError;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::LinearProgram;
use crate::data::number_types::traits::Real;

/// Dense Simplex tableau of a maximization problem with `<=` constraints.
///
/// It owns a copy of the problem data, which is overwritten with every basis change.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Matrix of size m x (n + m); the last m columns belong to the slack variables.
    ///
    /// This attribute changes with a basis change.
    constraints: DenseMatrix<F>,
    /// Cost of each of the n + m variables, in the maximization convention. Slacks cost zero.
    cost: Vec<F>,
    /// Current value of the basic variable of each row.
    ///
    /// This attribute changes with a basis change.
    b: Vec<F>,
    /// Maps the rows to the column containing its pivot.
    ///
    /// This attribute changes with a basis change.
    basis_indices: Vec<usize>,
    /// Number of variables before slacks were added, n.
    nr_original_variables: usize,
    /// Direction of the problem this tableau was created for.
    objective: Objective,
}

impl<F: Real> Tableau<F> {
    /// Create the initial tableau of a linear program.
    ///
    /// An identity block is appended to the constraint matrix, one slack per row, and the cost
    /// vector is extended with zeros. Unless the problem provides a basis, the slacks form the
    /// initial basis.
    ///
    /// # Arguments
    ///
    /// * `program`: Problem to solve.
    /// * `tolerance`: Used to check that a provided basis forms an identity.
    ///
    /// # Errors
    ///
    /// `InvalidBasis` if a provided basis is not in canonical form.
    pub fn new(program: &LinearProgram<F>, tolerance: F) -> Result<Self, SolveError> {
        let (m, n) = (program.nr_constraints(), program.nr_variables());
        let original = if m == 0 {
            DenseMatrix::zeros(0, n)
        } else {
            program.constraints().clone()
        };

        let constraints = original.hcat(DenseMatrix::identity(m))?;
        let objective = program.objective();
        let cost = program.cost().iter()
            .map(|&value| objective.to_maximization(value))
            .chain(repeat_n(F::zero(), m))
            .collect();
        let basis_indices = match program.basis() {
            Some(basis) => basis.to_vec(),
            None => (n..n + m).collect(),
        };

        let tableau = Self {
            constraints,
            cost,
            b: program.b().to_vec(),
            basis_indices,
            nr_original_variables: n,
            objective,
        };
        tableau.check_canonical(tolerance)?;

        Ok(tableau)
    }

    /// Calculates the relative cost (net evaluation) of a column.
    ///
    /// # Arguments
    ///
    /// * `j`: Index of column, in range `0` until `self.nr_columns()`.
    ///
    /// # Return value
    ///
    /// `c_j - sum_i c_{basis[i]} A_{ij}`. Zero for basis columns, up to rounding.
    pub fn relative_cost(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        let basis_cost = izip!(&self.basis_indices, self.constraints.rows())
            .map(|(&basic, row)| self.cost[basic] * row[j])
            .sum::<F>();

        self.cost[j] - basis_cost
    }

    /// The net evaluation row: the relative cost of every column.
    ///
    /// # Return value
    ///
    /// Vector of length n + m. When no value is positive, the current solution is optimal.
    pub fn net_evaluation_row(&self) -> Vec<F> {
        (0..self.nr_columns()).map(|j| self.relative_cost(j)).collect()
    }

    /// Value of the objective function in the maximization convention of the tableau.
    pub fn objective_function_value(&self) -> F {
        izip!(&self.basis_indices, &self.b)
            .map(|(&basic, &value)| self.cost[basic] * value)
            .sum()
    }

    /// Determine the row to pivot on, given the column.
    ///
    /// This is the row with the minimal ratio between the right hand side and a positive column
    /// value. On ties, the first row wins.
    ///
    /// # Arguments
    ///
    /// * `column_index`: Column that enters the basis.
    /// * `tolerance`: Column values not larger than this are not considered positive.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded.
    pub fn select_primal_pivot_row(
        &self,
        column_index: usize,
        tolerance: F,
    ) -> Result<Option<usize>, SolveError> {
        let column = self.constraints.column(column_index)?;

        let mut minimum: Option<(usize, F)> = None;
        for (row, &value, &b) in izip!(0.., &column, &self.b) {
            if value > tolerance {
                let ratio = b / value;
                if minimum.is_none_or(|(_, min_ratio)| ratio < min_ratio) {
                    minimum = Some((row, ratio));
                }
            }
        }

        Ok(minimum.map(|(row, _)| row))
    }

    /// Brings a column into the basis with a Gauss-Jordan elimination step.
    ///
    /// The pivot row is divided by the pivot element, after which the pivot column is eliminated
    /// from all other rows. Values that end up within `tolerance` of zero are set to zero.
    ///
    /// # Arguments
    ///
    /// * `pivot_row_index`: Row whose basic variable leaves the basis.
    /// * `pivot_column_index`: Column that enters the basis. The value at the pivot coordinate
    ///   should be positive.
    pub fn bring_into_basis(
        &mut self,
        pivot_row_index: usize,
        pivot_column_index: usize,
        tolerance: F,
    ) -> Result<(), SolveError> {
        let pivot_value = self.constraints.element(pivot_row_index, pivot_column_index)?;
        debug_assert!(pivot_value > F::zero());

        self.constraints.multiply_row(pivot_row_index, pivot_value.recip())?;
        self.b[pivot_row_index] /= pivot_value;
        let pivot_b = self.b[pivot_row_index];

        for row in 0..self.nr_rows() {
            if row == pivot_row_index {
                continue;
            }

            let factor = self.constraints.element(row, pivot_column_index)?;
            if factor == F::zero() {
                continue;
            }

            self.constraints.mul_add_rows(pivot_row_index, row, -factor)?;
            self.b[row] -= factor * pivot_b;
        }

        let mut unit_column = vec![F::zero(); self.nr_rows()];
        unit_column[pivot_row_index] = F::one();
        self.constraints.set_column(pivot_column_index, &unit_column)?;
        self.constraints.round_to_zero(tolerance);
        for value in &mut self.b {
            if value.is_negligible(tolerance) {
                *value = F::zero();
            }
        }

        self.basis_indices[pivot_row_index] = pivot_column_index;

        Ok(())
    }

    /// Get the current basic feasible solution.
    ///
    /// # Return value
    ///
    /// Values of the original variables, zero for those that are not basic.
    pub fn current_bfs(&self) -> Vec<F> {
        let mut values = vec![F::zero(); self.nr_original_variables];
        for (&basic, &value) in izip!(&self.basis_indices, &self.b) {
            if basic < self.nr_original_variables {
                values[basic] = value;
            }
        }

        values
    }

    /// Dual values of the constraints, read from the slack columns of the net evaluation row.
    ///
    /// Expressed in the direction of the original problem: the rate at which the objective value
    /// changes with each right hand side value.
    pub fn dual_values(&self, net_evaluation_row: &[F]) -> Vec<F> {
        debug_assert_eq!(net_evaluation_row.len(), self.nr_columns());

        net_evaluation_row[self.nr_original_variables..].iter()
            .map(|&value| self.objective.to_maximization(-value))
            .collect()
    }

    /// Whether the basis columns form an identity matrix, up to `tolerance`.
    pub fn is_canonical(&self, tolerance: F) -> bool {
        self.check_canonical(tolerance).is_ok()
    }

    /// Whether all basic variables are nonnegative, up to `tolerance`.
    pub fn is_primal_feasible(&self, tolerance: F) -> bool {
        self.b.iter().all(|&value| value >= -tolerance)
    }

    fn check_canonical(&self, tolerance: F) -> Result<(), SolveError> {
        for (row, &column) in self.basis_indices.iter().enumerate() {
            let values = self.constraints.column(column)?;
            let is_unit = values.iter().enumerate().all(|(i, &value)| {
                let expected = if i == row { F::one() } else { F::zero() };
                (value - expected).is_negligible(tolerance)
            });
            if !is_unit {
                return Err(SolveError::InvalidBasis { row, column });
            }
        }

        Ok(())
    }

    fn variable_name(&self, j: usize) -> String {
        if j < self.nr_original_variables {
            format!("x{}", j + 1)
        } else {
            format!("s{}", j - self.nr_original_variables + 1)
        }
    }

    /// Constraint matrix including slack columns.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// Cost vector including slack columns, in the maximization convention.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Current right hand side.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// For each row, the column of its basic variable.
    pub fn basis_indices(&self) -> &[usize] {
        &self.basis_indices
    }

    /// Direction of the problem this tableau was created for.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Number of rows in the tableau, m.
    pub fn nr_rows(&self) -> usize {
        self.b.len()
    }

    /// Number of variables including slacks, n + m.
    pub fn nr_columns(&self) -> usize {
        self.cost.len()
    }
}

impl<F: Real> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let net_evaluation = self.net_evaluation_row();
        let cells = |values: &mut dyn Iterator<Item = F>| {
            values.map(|value| format!("{:>9.3}", value)).join("")
        };
        let names = (0..self.nr_columns()).map(|j| self.variable_name(j)).collect::<Vec<_>>();

        writeln!(f, "{:>14} |{} |{:>10}", "", names.iter().map(|name| format!("{:>9}", name)).join(""), "b")?;
        writeln!(f, "{:>14} |{} |", "cost", cells(&mut self.cost.iter().copied()))?;
        let separator = format!("{}+{}+{}", "-".repeat(15), "-".repeat(9 * self.nr_columns() + 1), "-".repeat(10));
        writeln!(f, "{}", separator)?;
        for (row, &basic, &b) in izip!(self.constraints.rows(), &self.basis_indices, &self.b) {
            writeln!(
                f, "{:<5}{:>9.3} |{} |{:>10.3}",
                names[basic], self.cost[basic], cells(&mut row.iter().copied()), b,
            )?;
        }
        writeln!(f, "{}", separator)?;
        let mut z = izip!(&self.cost, &net_evaluation).map(|(&cost, &net)| cost - net);
        writeln!(f, "{:>14} |{} |{:>10.3}", "z", cells(&mut z), self.objective_function_value())?;
        writeln!(f, "{:>14} |{} |", "c - z", cells(&mut net_evaluation.iter().copied()))
    }
}
