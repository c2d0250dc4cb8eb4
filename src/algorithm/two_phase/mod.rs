//! # The two-phase bounded-variable Simplex algorithm
//!
//! The first phase finds a basic feasible solution by minimizing the sum of artificial variables,
//! the second phase improves it until it is optimal. Both phases use the same pivoting logic, in
//! which a nonbasic variable sits at either its lower or its upper bound.
use log::{debug, trace};

use crate::algorithm::{OptimizationResult, SolverConfig};
use crate::algorithm::two_phase::matrix_provider::matrix_data::MatrixData;
use crate::algorithm::two_phase::phase_one::FeasibilityResult;
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule, PivotRuleKind, SteepestDescentAlongVariable};
use crate::algorithm::two_phase::tableau::{debug_assert_in_basic_feasible_solution_state, Step, Tableau};
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::data::linear_program::model::Model;
use crate::data::number_types::float::Tolerance;

pub mod matrix_provider;
pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;

/// Solve a linear program.
///
/// All working state is created here and dropped on return; the model is only read.
pub fn solve_relaxation(model: &Model, config: &SolverConfig) -> OptimizationResult {
    let provider = MatrixData::new(model);
    let tolerance = Tolerance::new(config.tolerance);
    let mut iterations = IterationBudget::new(
        config.iteration_limit(model.nr_variables(), model.nr_constraints()),
    );

    let result = match config.pivot_rule {
        PivotRuleKind::FirstProfitable => {
            two_phase::<FirstProfitable>(&provider, tolerance, &mut iterations)
        },
        PivotRuleKind::SteepestDescentAlongVariable => {
            two_phase::<SteepestDescentAlongVariable>(&provider, tolerance, &mut iterations)
        },
    };

    debug!(
        "Finished after {} of at most {} iterations: {:?}",
        iterations.done(), iterations.limit(), result,
    );
    result
}

fn two_phase<PR: PivotRule>(
    provider: &MatrixData,
    tolerance: Tolerance,
    iterations: &mut IterationBudget,
) -> OptimizationResult {
    match phase_one::compute_bfs::<_, PR>(provider, tolerance, iterations) {
        FeasibilityResult::Feasible(mut tableau) => phase_two::primal::<PR>(&mut tableau, provider, iterations),
        FeasibilityResult::Infeasible => OptimizationResult::Infeasible,
        FeasibilityResult::IterationLimitExceeded => OptimizationResult::IterationLimitExceeded,
    }
}

/// Counts pivots and bound flips against a hard limit.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct IterationBudget {
    done: usize,
    limit: usize,
}

impl IterationBudget {
    /// Create a new budget.
    pub fn new(limit: usize) -> Self {
        Self { done: 0, limit }
    }

    /// Use one iteration.
    ///
    /// # Return value
    ///
    /// `false` if the budget was already exhausted.
    pub fn tick(&mut self) -> bool {
        if self.done < self.limit {
            self.done += 1;
            true
        } else {
            false
        }
    }

    /// Number of iterations used.
    pub fn done(&self) -> usize {
        self.done
    }

    /// Maximum number of iterations.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// How the pivoting loop ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PrimalResult {
    /// No column is profitable for the objective function of the tableau kind.
    Optimal,
    /// A profitable column could move without limit.
    Unbounded,
    /// The budget ran out.
    IterationLimitExceeded,
}

/// Improve the objective function of the tableau until no profitable column remains.
///
/// While calling this method, the tableau should be in a basic feasible solution state: all basic
/// variables within their bounds.
pub(crate) fn primal<K, PR>(
    tableau: &mut Tableau<K>,
    iterations: &mut IterationBudget,
) -> PrimalResult
where
    K: Kind,
    PR: PivotRule,
{
    let mut rule = PR::new();
    loop {
        debug_assert_in_basic_feasible_solution_state(tableau);

        match rule.select_primal_pivot_column(tableau) {
            Some((column, cost)) => {
                if !iterations.tick() {
                    break PrimalResult::IterationLimitExceeded;
                }

                match tableau.select_primal_pivot_row(column) {
                    Step::BasisChange { row, length, leaving_to } => {
                        trace!(
                            "Column {column} (relative cost {cost}) enters in row {row}, step {length}, leaving to {leaving_to:?}",
                        );
                        tableau.bring_into_basis(column, row, length, leaving_to);
                    },
                    Step::BoundFlip { length } => {
                        trace!("Column {column} (relative cost {cost}) flips bound, step {length}");
                        tableau.flip_bound(column, length);
                    },
                    Step::Unbounded => break PrimalResult::Unbounded,
                }
                trace!("{tableau}");
            },
            None => break PrimalResult::Optimal,
        }
    }
}
