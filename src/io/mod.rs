//! # Reading of payoff matrices
//!
//! Payoff matrices are stored as plain text, one row per line. Values are separated by whitespace,
//! commas or both, such that both space aligned tables and CSV files can be read. Empty lines and
//! lines starting with `#` are skipped.
//!
//! ```text
//! # Rock, paper, scissors
//!  0, -1,  1
//!  1,  0, -1
//! -1,  1,  0
//! ```
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::Real;
use crate::io::error::{ImportError, ParseError};

pub mod error;

/// Read a payoff matrix from a file.
///
/// # Errors
///
/// When the file cannot be found or read, contains values that are not finite numbers or has rows
/// of different lengths.
pub fn read_payoff_matrix<F: Real>(file_path: &Path) -> Result<DenseMatrix<F>, ImportError> {
    let mut text = String::new();
    File::open(file_path)?.read_to_string(&mut text)?;

    let matrix = parse_payoff_matrix(&text)?;
    debug!(
        "Read a {} x {} payoff matrix from {:?}",
        matrix.nr_rows(), matrix.nr_columns(), file_path,
    );

    Ok(matrix)
}

/// Parse a payoff matrix from text.
///
/// # Errors
///
/// A `ParseError` for values that are not finite numbers and for text without any values, a
/// `MatrixError` when rows differ in length.
pub fn parse_payoff_matrix<F: Real>(text: &str) -> Result<DenseMatrix<F>, ImportError> {
    let rows = text.lines()
        .zip(1..)
        .map(|(line, line_number)| (line_number, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(parse_row::<F>)
        .collect::<Result<Vec<_>, _>>()?;

    if rows.is_empty() {
        return Err(ParseError::new("no payoff values found").into());
    }

    Ok(DenseMatrix::from_data(rows)?)
}

fn parse_row<F: Real>((line_number, line): (u64, &str)) -> Result<Vec<F>, ParseError> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|field| !field.is_empty())
        .map(|field| match field.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(F::from_literal(value)),
            _ => Err(ParseError::with_file_location(
                format!("invalid number \"{}\"", field),
                (line_number, line),
            )),
        })
        .collect()
}
