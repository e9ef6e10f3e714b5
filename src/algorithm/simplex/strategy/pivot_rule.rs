//! # Pivot rules
//!
//! Strategies for moving from basis to basis in the primal Simplex method.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::str::FromStr;

use crate::data::number_types::traits::Real;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide which column enters the basis. The pivot rule
/// describes that behavior. Once the column has been selected, the leaving row follows from the
/// minimum ratio test, independent of the strategy.
pub trait PivotRule<F> {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Arguments
    ///
    /// * `net_evaluation_row`: Relative cost of every column, in the maximization convention.
    /// * `tolerance`: Relative costs not larger than this are not considered profitable.
    ///
    /// # Return value
    ///
    /// Index and relative cost of the entering column, or `None` if no column is profitable and
    /// the current basis is optimal.
    fn select_primal_pivot_column(
        &mut self,
        net_evaluation_row: &[F],
        tolerance: F,
    ) -> Option<(usize, F)>;
}

/// Pivot on the column with the largest positive relative cost (Dantzig's rule).
///
/// The search starts at index 0 with the threshold as the current best, and a column only replaces
/// the current best when it is strictly larger. As such, ties resolve to the lowest index.
pub struct LargestCoefficient;
impl<F: Real> PivotRule<F> for LargestCoefficient {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(
        &mut self,
        net_evaluation_row: &[F],
        tolerance: F,
    ) -> Option<(usize, F)> {
        let mut largest: Option<(usize, F)> = None;
        for (j, &cost) in net_evaluation_row.iter().enumerate() {
            let threshold = largest.map_or(tolerance, |(_, largest_cost)| largest_cost);
            if cost > threshold {
                largest = Some((j, cost));
            }
        }

        largest
    }
}

/// Simply pivot on the first column which has a positive relative cost.
///
/// This is the entering variable choice of Bland's rule, but the leaving row is still the first
/// row with the minimum ratio rather than the one with the lowest basic index. Termination on
/// degenerate problems is therefore not guaranteed; there, the iteration limit applies.
pub struct FirstProfitable;
impl<F: Real> PivotRule<F> for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(
        &mut self,
        net_evaluation_row: &[F],
        tolerance: F,
    ) -> Option<(usize, F)> {
        net_evaluation_row.iter()
            .copied()
            .enumerate()
            .find(|&(_, cost)| cost > tolerance)
    }
}

/// Runtime choice between the pivot rules, used for configuration.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum PivotRuleKind {
    /// See `LargestCoefficient`.
    #[default]
    LargestCoefficient,
    /// See `FirstProfitable`.
    FirstProfitable,
}

impl Display for PivotRuleKind {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        match self {
            PivotRuleKind::LargestCoefficient => f.write_str("largest-coefficient"),
            PivotRuleKind::FirstProfitable => f.write_str("first-profitable"),
        }
    }
}

impl FromStr for PivotRuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "largest-coefficient" => Ok(PivotRuleKind::LargestCoefficient),
            "first-profitable" => Ok(PivotRuleKind::FirstProfitable),
            other => Err(format!(
                "unknown pivot rule \"{}\", expected \"largest-coefficient\" or \"first-profitable\"",
                other,
            )),
        }
    }
}
