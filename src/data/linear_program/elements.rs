//! # Building blocks to describe linear programs.
use std::ops::Neg;

/// Direction of optimization.
///
/// The Simplex tableau in this crate is a maximization tableau: a column enters the basis when its
/// net evaluation is positive. Minimization is done by negating the cost vector.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Objective {
    #[default]
    Maximize,
    Minimize,
}

impl Objective {
    /// Express a cost coefficient in the maximization convention of the tableau.
    ///
    /// Applying it twice gives back the original value, so it also converts objective values and
    /// dual values back to the direction of the problem.
    #[must_use]
    pub fn to_maximization<F: Neg<Output = F>>(self, value: F) -> F {
        match self {
            Objective::Maximize => value,
            Objective::Minimize => -value,
        }
    }
}
