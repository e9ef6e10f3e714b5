//! # The Simplex algorithm
//!
//! A primal Simplex method on a dense tableau, for problems of the form `max c^T x` subject to
//! `Ax <= b`, `x >= 0` with `b >= 0`. The slack variables form a trivial basic feasible solution,
//! so there is no first phase: a negative right hand side is rejected instead.
//!
//! The algorithm is a state machine. `Simplex::iterate` performs a single iteration and can be
//! used for tracing; `solve` iterates until a terminal state is reached.
use log::{debug, info, trace, warn};

use crate::algorithm::error::SolveError;
use crate::algorithm::simplex::settings::Settings;
use crate::algorithm::simplex::strategy::pivot_rule::{FirstProfitable, LargestCoefficient, PivotRule, PivotRuleKind};
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::Real;

pub mod settings;
pub mod strategy;
pub mod tableau;


/// Progress of the Simplex method.
///
/// `Optimal`, `Unbounded` and `IterationLimitExceeded` are terminal: once reached, iterating
/// doesn't change the state anymore.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    /// The tableau was created, no iteration has been done yet.
    Initialized,
    /// A pivot was performed in the last iteration.
    Iterating,
    /// No column has a positive net evaluation.
    Optimal,
    /// The entering column has no positive value to pivot on.
    Unbounded {
        /// Column that could enter the basis without bound.
        column: usize,
    },
    /// The configured maximum number of iterations was reached.
    IterationLimitExceeded,
}

impl State {
    /// Whether iterating further has no effect.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, State::Initialized | State::Iterating)
    }
}

/// Primal Simplex method with a pivot rule `PR`.
///
/// Owns the tableau it works on, so the problem it was created from is never modified.
pub struct Simplex<F, PR> {
    tableau: Tableau<F>,
    rule: PR,
    settings: Settings<F>,
    state: State,
    nr_iterations: usize,
    /// Net evaluation row computed in the last iteration.
    net_evaluation_row: Vec<F>,
}

impl<F, PR> Simplex<F, PR>
where
    F: Real,
    PR: PivotRule<F>,
{
    /// Set up the initial tableau.
    ///
    /// # Errors
    ///
    /// `InfeasibleInput` if a right hand side value is negative, before any tableau is built.
    /// `InvalidBasis` if the problem provides a basis that is not in canonical form.
    pub fn new(program: &LinearProgram<F>, settings: &Settings<F>) -> Result<Self, SolveError> {
        if let Some((row, &value)) = program.b().iter().enumerate().find(|&(_, &value)| value < F::zero()) {
            return Err(SolveError::InfeasibleInput {
                row,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }

        let tableau = Tableau::new(program, settings.tolerance())?;
        debug!(
            "Initialized tableau with {} constraints and {} variables ({} slacks)",
            tableau.nr_rows(), tableau.nr_columns(), tableau.nr_rows(),
        );

        Ok(Self {
            tableau,
            rule: PR::new(),
            settings: *settings,
            state: State::Initialized,
            nr_iterations: 0,
            net_evaluation_row: Vec::new(),
        })
    }

    /// Perform a single iteration.
    ///
    /// Computes the net evaluation row and either detects optimality, detects unboundedness or
    /// pivots once.
    ///
    /// # Return value
    ///
    /// The state after this iteration. In a terminal state, nothing is computed and the same state
    /// is returned.
    pub fn iterate(&mut self) -> Result<State, SolveError> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }
        if self.nr_iterations >= self.settings.max_iterations() {
            warn!("Iteration limit of {} reached", self.settings.max_iterations());
            self.state = State::IterationLimitExceeded;
            return Ok(self.state);
        }

        let tolerance = self.settings.tolerance();
        debug_assert!(self.tableau.is_canonical(tolerance));
        debug_assert!(self.tableau.is_primal_feasible(tolerance));

        self.nr_iterations += 1;
        self.net_evaluation_row = self.tableau.net_evaluation_row();
        if self.settings.trace() {
            info!("Iteration {}\n{}", self.nr_iterations, self.tableau);
        } else {
            trace!("Iteration {}\n{}", self.nr_iterations, self.tableau);
        }

        self.state = match self.rule.select_primal_pivot_column(&self.net_evaluation_row, tolerance) {
            None => {
                debug!(
                    "Optimal after {} iterations, objective value {}",
                    self.nr_iterations, self.objective_function_value(),
                );
                State::Optimal
            },
            Some((column, cost)) => match self.tableau.select_primal_pivot_row(column, tolerance)? {
                None => {
                    debug!("Column {} has no pivot row, problem is unbounded", column);
                    State::Unbounded { column }
                },
                Some(row) => {
                    debug!(
                        "Iteration {}: column {} (net evaluation {:e}) enters, column {} leaves at row {}",
                        self.nr_iterations, column, cost, self.tableau.basis_indices()[row], row,
                    );
                    self.tableau.bring_into_basis(row, column, tolerance)?;
                    State::Iterating
                },
            },
        };

        Ok(self.state)
    }

    /// Iterate until a terminal state is reached.
    ///
    /// # Return value
    ///
    /// The optimal solution.
    ///
    /// # Errors
    ///
    /// `Unbounded` or `IterationLimitExceeded` for the corresponding terminal states. A partial
    /// result is never returned.
    pub fn run(mut self) -> Result<Solution<F>, SolveError> {
        loop {
            match self.iterate()? {
                State::Optimal => break Ok(self.into_solution()),
                State::Unbounded { column } => break Err(SolveError::Unbounded { column }),
                State::IterationLimitExceeded => break Err(SolveError::IterationLimitExceeded {
                    limit: self.settings.max_iterations(),
                }),
                State::Initialized | State::Iterating => {},
            }
        }
    }

    /// Current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Current tableau.
    pub fn tableau(&self) -> &Tableau<F> {
        &self.tableau
    }

    /// Number of iterations performed so far.
    pub fn nr_iterations(&self) -> usize {
        self.nr_iterations
    }

    /// Net evaluation row of the last iteration, empty before the first iteration.
    pub fn net_evaluation_row(&self) -> &[F] {
        &self.net_evaluation_row
    }

    /// Objective function value of the current basic solution, in the direction of the problem.
    pub fn objective_function_value(&self) -> F {
        self.tableau.objective().to_maximization(self.tableau.objective_function_value())
    }

    fn into_solution(self) -> Solution<F> {
        debug_assert_eq!(self.state, State::Optimal);

        let objective_value = self.objective_function_value();
        let values = self.tableau.current_bfs();
        let dual_values = self.tableau.dual_values(&self.net_evaluation_row);
        let Self { tableau, nr_iterations, .. } = self;

        Solution::new(
            values,
            objective_value,
            dual_values,
            nr_iterations,
            tableau.basis_indices().to_vec(),
            tableau.constraints().clone(),
            tableau.b().to_vec(),
        )
    }
}

/// Solve a linear program with the Simplex method.
///
/// # Arguments
///
/// * `program`: Problem with a nonnegative right hand side.
/// * `settings`: Iteration limit, tolerance, pivot rule and tracing.
///
/// # Return value
///
/// The optimal solution.
///
/// # Errors
///
/// `InfeasibleInput` for a negative right hand side, `InvalidBasis` for a bad starting basis,
/// `Unbounded` if the objective can be improved without limit and `IterationLimitExceeded` if no
/// optimum was found in time.
pub fn solve<F: Real>(
    program: &LinearProgram<F>,
    settings: &Settings<F>,
) -> Result<Solution<F>, SolveError> {
    match settings.pivot_rule() {
        PivotRuleKind::LargestCoefficient => Simplex::<_, LargestCoefficient>::new(program, settings)?.run(),
        PivotRuleKind::FirstProfitable => Simplex::<_, FirstProfitable>::new(program, settings)?.run(),
    }
}
