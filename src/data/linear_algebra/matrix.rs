//! # Dense matrix
//!
//! Row-major `Vec<Vec<F>>` storage with checked access. Every accessor that takes an index or a
//! vector of values validates it and returns a `MatrixError` instead of panicking.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::data::linear_algebra::error::{Axis, MatrixError};
use crate::data::number_types::traits::Real;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
///
/// Cloning is deep: the Simplex method mutates its working copy destructively.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Real> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix, each of the same length.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the rows don't all have the length of the first row.
    pub fn from_data(data: Vec<Vec<F>>) -> Result<Self, MatrixError> {
        let nr_rows = data.len();
        let nr_columns = data.first().map_or(0, Vec::len);

        for row in &data {
            MatrixError::check_length(nr_columns, row.len(), "matrix construction")?;
        }

        Ok(Self { data, nr_rows, nr_columns })
    }

    /// Create a matrix of dimension `nr_rows` x `nr_columns` with every value equal to `value`.
    pub fn constant(value: F, nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: vec![vec![value; nr_columns]; nr_rows],
            nr_rows,
            nr_columns,
        }
    }

    /// Create a matrix of zeros of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self::constant(F::zero(), nr_rows, nr_columns)
    }

    /// Create a square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        let mut matrix = Self::zeros(len, len);
        for i in 0..len {
            matrix.data[i][i] = F::one();
        }

        matrix
    }

    /// Create a matrix of dimension `nr_rows` x `nr_columns` with value `f(i, j)` at `(i, j)`.
    pub fn from_fn(nr_rows: usize, nr_columns: usize, f: impl Fn(usize, usize) -> F) -> Self {
        Self {
            data: (0..nr_rows).map(|i| (0..nr_columns).map(|j| f(i, j)).collect()).collect(),
            nr_rows,
            nr_columns,
        }
    }

    /// Get a copy of the values in row `i`.
    pub fn row(&self, i: usize) -> Result<Vec<F>, MatrixError> {
        MatrixError::check_index(i, self.nr_rows, Axis::Row)?;

        Ok(self.data[i].clone())
    }

    /// Get a copy of the values in column `j`.
    pub fn column(&self, j: usize) -> Result<Vec<F>, MatrixError> {
        MatrixError::check_index(j, self.nr_columns, Axis::Column)?;

        Ok(self.data.iter().map(|row| row[j]).collect())
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn element(&self, i: usize, j: usize) -> Result<F, MatrixError> {
        self.check_coordinate(i, j)?;

        Ok(self.data[i][j])
    }

    /// Change row `i` to the provided `values`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` for a bad row index, `DimensionMismatch` when `values` doesn't have one
    /// value per column.
    pub fn set_row(&mut self, i: usize, values: Vec<F>) -> Result<(), MatrixError> {
        MatrixError::check_index(i, self.nr_rows, Axis::Row)?;
        MatrixError::check_length(self.nr_columns, values.len(), "set_row")?;

        self.data[i] = values;
        Ok(())
    }

    /// Change column `j` to the provided `values`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` for a bad column index, `DimensionMismatch` when `values` doesn't have
    /// one value per row.
    pub fn set_column(&mut self, j: usize, values: &[F]) -> Result<(), MatrixError> {
        MatrixError::check_index(j, self.nr_columns, Axis::Column)?;
        MatrixError::check_length(self.nr_rows, values.len(), "set_column")?;

        for (row, &value) in self.data.iter_mut().zip(values) {
            row[j] = value;
        }
        Ok(())
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set(&mut self, i: usize, j: usize, value: F) -> Result<(), MatrixError> {
        self.check_coordinate(i, j)?;

        self.data[i][j] = value;
        Ok(())
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: F) -> Result<(), MatrixError> {
        MatrixError::check_index(i, self.nr_rows, Axis::Row)?;

        for value in &mut self.data[i] {
            *value *= factor;
        }
        Ok(())
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(
        &mut self,
        read_row: usize,
        write_row: usize,
        factor: F,
    ) -> Result<(), MatrixError> {
        MatrixError::check_index(read_row, self.nr_rows, Axis::Row)?;
        MatrixError::check_index(write_row, self.nr_rows, Axis::Row)?;

        for j in 0..self.nr_columns {
            let read = self.data[read_row][j];
            self.data[write_row][j] += factor * read;
        }
        Ok(())
    }

    /// Set all values with an absolute value of at most `tolerance` to exactly zero.
    pub fn round_to_zero(&mut self, tolerance: F) {
        for value in self.data.iter_mut().flatten() {
            if value.is_negligible(tolerance) {
                *value = F::zero();
            }
        }
    }

    /// Concatenate another matrix to the "right" (high column indices) of this matrix.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the number of rows differs.
    pub fn hcat(mut self, other: DenseMatrix<F>) -> Result<Self, MatrixError> {
        MatrixError::check_length(self.nr_rows, other.nr_rows, "hcat")?;

        for (row, other_row) in self.data.iter_mut().zip(other.data) {
            row.extend(other_row);
        }
        self.nr_columns += other.nr_columns;

        Ok(self)
    }

    /// The transposed matrix, as a new instance.
    pub fn transpose(&self) -> Self {
        let data = (0..self.nr_columns)
            .map(|j| self.data.iter().map(|row| row[j]).collect())
            .collect();

        Self { data, nr_rows: self.nr_columns, nr_columns: self.nr_rows }
    }

    /// Apply `f` to every value, creating a new matrix.
    pub fn map(&self, f: impl Fn(F) -> F) -> Self {
        let data = self.data.iter()
            .map(|row| row.iter().map(|&value| f(value)).collect())
            .collect();

        Self { data, nr_rows: self.nr_rows, nr_columns: self.nr_columns }
    }

    /// Smallest value in the matrix, `None` if the matrix has no values.
    pub fn min_value(&self) -> Option<F> {
        self.values().reduce(F::min)
    }

    /// Largest value in the matrix, `None` if the matrix has no values.
    pub fn max_value(&self) -> Option<F> {
        self.values().reduce(F::max)
    }

    /// Shift all values such that the matrix becomes strictly positive.
    ///
    /// If the smallest value `m` is not positive, every value is increased by `|m| + 1`.
    /// Otherwise, the matrix is copied unchanged.
    ///
    /// # Return value
    ///
    /// The shifted matrix and the shift that was added to every value (zero if nothing changed).
    pub fn make_positive(&self) -> (Self, F) {
        match self.min_value() {
            Some(minimum) if minimum <= F::zero() => {
                let shift = minimum.abs() + F::one();
                (self.map(|value| value + shift), shift)
            },
            _ => (self.clone(), F::zero()),
        }
    }

    /// Iterate over all values, row by row.
    pub fn values(&self) -> impl Iterator<Item = F> + '_ {
        self.data.iter().flatten().copied()
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[F]> + '_ {
        self.data.iter().map(Vec::as_slice)
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Whether the matrix has no values at all.
    pub fn is_empty(&self) -> bool {
        self.nr_rows == 0 || self.nr_columns == 0
    }

    fn check_coordinate(&self, i: usize, j: usize) -> Result<(), MatrixError> {
        MatrixError::check_index(i, self.nr_rows, Axis::Row)?;
        MatrixError::check_index(j, self.nr_columns, Axis::Column)
    }
}

impl<F: Real> Display for DenseMatrix<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        for row in &self.data {
            writeln!(f, "[{} ]", row.iter().map(|value| format!("{:8.3}", value)).join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::*;

    fn test_matrix() -> DenseMatrix<f64> {
        DenseMatrix::from_data(vec![
            vec![1f64, 2f64, 0f64],
            vec![0f64, 5f64, 6f64],
        ]).unwrap()
    }

    #[test]
    fn from_data() {
        let m = test_matrix();
        assert_eq!(m.nr_rows(), 2);
        assert_eq!(m.nr_columns(), 3);
        assert_abs_diff_eq!(m.element(0, 0).unwrap(), 1f64);
        assert_abs_diff_eq!(m.element(1, 2).unwrap(), 6f64);

        let ragged = DenseMatrix::from_data(vec![vec![1f64, 2f64], vec![3f64]]);
        assert_eq!(ragged, Err(MatrixError::DimensionMismatch {
            expected: 2,
            found: 1,
            context: "matrix construction",
        }));

        let empty = DenseMatrix::<f64>::from_data(vec![]).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.min_value(), None);
    }

    #[test]
    fn zeros_identity() {
        let (rows, columns) = (29, 48);
        let m = DenseMatrix::<f64>::zeros(rows, columns);
        assert_abs_diff_eq!(m.element(0, 0).unwrap(), 0f64);
        assert_abs_diff_eq!(m.element(rows - 1, columns - 1).unwrap(), 0f64);

        let size = 13;
        let m = DenseMatrix::<f64>::identity(size);
        assert_abs_diff_eq!(m.element(0, 0).unwrap(), 1f64);
        assert_abs_diff_eq!(m.element(size - 1, size - 1).unwrap(), 1f64);
        assert_abs_diff_eq!(m.element(0, 1).unwrap(), 0f64);
        assert_abs_diff_eq!(m.element(size - 1, size - 2).unwrap(), 0f64);
    }

    #[test]
    fn from_fn() {
        let m = DenseMatrix::from_fn(2, 3, |i, j| (3 * i + j) as f64);
        assert_eq!(m.row(1).unwrap(), vec![3f64, 4f64, 5f64]);
        assert_eq!(m.transpose(), DenseMatrix::from_fn(3, 2, |i, j| (i + 3 * j) as f64));
    }

    #[test]
    fn get_set() {
        let mut m = test_matrix();

        let v = m.element(0, 1).unwrap();
        m.set(0, 1, v).unwrap();
        assert_abs_diff_eq!(m.element(0, 1).unwrap(), v);

        m.set(1, 1, 3f64).unwrap();
        assert_abs_diff_eq!(m.element(1, 1).unwrap(), 3f64);
    }

    #[test]
    fn out_of_bounds() {
        let mut m = test_matrix();

        assert_eq!(m.element(2, 0), Err(MatrixError::IndexOutOfBounds {
            index: 2,
            bound: 2,
            axis: Axis::Row,
        }));
        assert_eq!(m.element(0, 3), Err(MatrixError::IndexOutOfBounds {
            index: 3,
            bound: 3,
            axis: Axis::Column,
        }));
        assert!(m.row(2).is_err());
        assert!(m.column(3).is_err());
        assert!(m.set(2, 0, 4f64).is_err());
        assert!(m.set_row(5, vec![0f64; 3]).is_err());
        assert!(m.set_column(5, &[0f64; 2]).is_err());

        // Nothing changed
        assert_eq!(m, test_matrix());
    }

    #[test]
    fn row_column() {
        let m = test_matrix();

        assert_eq!(m.column(2).unwrap(), vec![0f64, 6f64]);
        assert_abs_diff_eq!(m.column(1).unwrap().iter().sum::<f64>(), 2f64 + 5f64);
        assert_eq!(m.row(0).unwrap(), vec![1f64, 2f64, 0f64]);
        assert_abs_diff_eq!(m.row(1).unwrap().iter().sum::<f64>(), 5f64 + 6f64);
    }

    #[test]
    fn set_row_column() {
        let mut m = test_matrix();

        m.set_row(0, vec![7f64, 8f64, 9f64]).unwrap();
        assert_eq!(m.row(0).unwrap(), vec![7f64, 8f64, 9f64]);
        assert_eq!(
            m.set_row(0, vec![1f64, 2f64]),
            Err(MatrixError::DimensionMismatch { expected: 3, found: 2, context: "set_row" }),
        );

        m.set_column(2, &[-1f64, -2f64]).unwrap();
        assert_eq!(m.column(2).unwrap(), vec![-1f64, -2f64]);
        assert_eq!(
            m.set_column(2, &[1f64, 2f64, 3f64]),
            Err(MatrixError::DimensionMismatch { expected: 2, found: 3, context: "set_column" }),
        );
    }

    #[test]
    fn copy_is_independent() {
        let original = test_matrix();
        let mut copy = original.clone();
        copy.set(0, 0, 100f64).unwrap();

        assert_abs_diff_eq!(original.element(0, 0).unwrap(), 1f64);
        assert_abs_diff_eq!(copy.element(0, 0).unwrap(), 100f64);
    }

    #[test]
    fn multiply_row() {
        let mut m = test_matrix();
        m.multiply_row(0, -1f64).unwrap();
        assert_abs_diff_eq!(m.element(0, 1).unwrap(), -2f64);

        let mut m = test_matrix();
        m.multiply_row(1, 0f64).unwrap();
        assert_abs_diff_eq!(m.element(1, 2).unwrap(), 0f64);
    }

    #[test]
    fn mul_add_rows() {
        // On a matrix with a 1f64 value, resulting in a 0f64 on the row being changed
        let mut m = test_matrix();

        let (pivot_row, pivot_column, test_row) = (1, 2, 0);
        m.set(test_row, pivot_column, 3f64).unwrap();
        m.set(pivot_row, pivot_column, 1f64).unwrap();
        let multiple = m.element(test_row, pivot_column).unwrap();
        let test_value = m.element(test_row, 1).unwrap();
        m.mul_add_rows(pivot_row, test_row, -multiple).unwrap();

        assert_abs_diff_eq!(m.element(test_row, pivot_column).unwrap(), 0f64);
        assert_abs_diff_eq!(
            m.element(test_row, 1).unwrap(),
            test_value - multiple * m.element(pivot_row, 1).unwrap(),
        );
    }

    #[test]
    fn round_to_zero() {
        let mut m = DenseMatrix::from_data(vec![vec![1e-12f64, -1e-12f64, 0.5f64]]).unwrap();
        m.round_to_zero(1e-9);
        assert_eq!(m.row(0).unwrap(), vec![0f64, 0f64, 0.5f64]);
    }

    #[test]
    fn hcat_transpose() {
        let m = test_matrix().hcat(DenseMatrix::identity(2)).unwrap();
        assert_eq!(m.nr_columns(), 5);
        assert_eq!(m.row(1).unwrap(), vec![0f64, 5f64, 6f64, 0f64, 1f64]);

        assert!(test_matrix().hcat(DenseMatrix::identity(3)).is_err());

        let t = test_matrix().transpose();
        assert_eq!((t.nr_rows(), t.nr_columns()), (3, 2));
        assert_eq!(t.row(2).unwrap(), vec![0f64, 6f64]);
        assert_eq!(t.transpose(), test_matrix());
    }

    #[test]
    fn make_positive() {
        let m = DenseMatrix::from_data(vec![vec![1f64, -2f64], vec![0f64, 3f64]]).unwrap();
        let (positive, shift) = m.make_positive();
        assert_abs_diff_eq!(shift, 3f64);
        assert_eq!(positive.row(0).unwrap(), vec![4f64, 1f64]);
        assert_abs_diff_eq!(positive.min_value().unwrap(), 1f64);

        // Zero is not strictly positive
        let m = DenseMatrix::from_data(vec![vec![0f64, 2f64]]).unwrap();
        let (positive, shift) = m.make_positive();
        assert_abs_diff_eq!(shift, 1f64);
        assert_eq!(positive.row(0).unwrap(), vec![1f64, 3f64]);

        // Already positive
        let m = DenseMatrix::from_data(vec![vec![0.5f64, 2f64]]).unwrap();
        let (positive, shift) = m.make_positive();
        assert_abs_diff_eq!(shift, 0f64);
        assert_eq!(positive, m);
    }

    #[test]
    fn display() {
        let m = DenseMatrix::from_data(vec![vec![1f64, -2.5f64]]).unwrap();
        assert_eq!(m.to_string(), "[   1.000   -2.500 ]\n");
    }

    proptest! {
        #[test]
        fn make_positive_round_trip(
            data in (1usize..6, 1usize..6).prop_flat_map(|(rows, columns)| {
                prop::collection::vec(prop::collection::vec(-100i32..100, columns), rows)
            }),
        ) {
            let data = data.into_iter()
                .map(|row| row.into_iter().map(f64::from).collect())
                .collect();
            let m = DenseMatrix::from_data(data).unwrap();
            let (positive, shift) = m.make_positive();

            prop_assert!(positive.min_value().unwrap() > 0f64);
            prop_assert_eq!(positive.map(|value| value - shift), m);
        }
    }
}
