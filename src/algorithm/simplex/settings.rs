//! # Configuration of a solve
//!
//! An immutable value that is passed to every solve. There is no global state: two solves with
//! different settings can run side by side.
use crate::algorithm::simplex::strategy::pivot_rule::PivotRuleKind;
use crate::data::number_types::traits::Real;

/// Iteration cap used when none is configured.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;
/// Values within this distance of zero are treated as zero when none is configured.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Parameters of the Simplex method.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings<F> {
    max_iterations: usize,
    tolerance: F,
    pivot_rule: PivotRuleKind,
    trace: bool,
}

impl<F: Real> Default for Settings<F> {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: F::from_literal(DEFAULT_TOLERANCE),
            pivot_rule: PivotRuleKind::default(),
            trace: false,
        }
    }
}

impl<F: Real> Settings<F> {
    /// Stop with an error after this many iterations.
    ///
    /// A caller can use this as a time limit; there is no other way to cancel a solve.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Values within this distance of zero are treated as zero.
    ///
    /// This affects the optimality test, the ratio test and the clean-up after each pivot.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: F) -> Self {
        debug_assert!(tolerance >= F::zero());

        self.tolerance = tolerance;
        self
    }

    /// Rule for choosing the entering column.
    #[must_use]
    pub fn with_pivot_rule(mut self, pivot_rule: PivotRuleKind) -> Self {
        self.pivot_rule = pivot_rule;
        self
    }

    /// Log the full tableau at `info` level in every iteration.
    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Maximum number of iterations.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Zero tolerance.
    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    /// Configured pivot rule.
    pub fn pivot_rule(&self) -> PivotRuleKind {
        self.pivot_rule
    }

    /// Whether tableaus are traced.
    pub fn trace(&self) -> bool {
        self.trace
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::simplex::settings::Settings;
    use crate::algorithm::simplex::strategy::pivot_rule::PivotRuleKind;

    #[test]
    fn default() {
        let settings = Settings::<f64>::default();
        assert_eq!(settings.max_iterations(), 1000);
        assert_eq!(settings.tolerance(), 1e-9);
        assert_eq!(settings.pivot_rule(), PivotRuleKind::LargestCoefficient);
        assert!(!settings.trace());
    }

    #[test]
    fn builder() {
        let settings = Settings::<f64>::default()
            .with_max_iterations(5)
            .with_tolerance(0f64)
            .with_pivot_rule(PivotRuleKind::FirstProfitable)
            .with_trace(true);
        assert_eq!(settings.max_iterations(), 5);
        assert_eq!(settings.tolerance(), 0f64);
        assert_eq!(settings.pivot_rule(), PivotRuleKind::FirstProfitable);
        assert!(settings.trace());
    }
}
