//! # Phase two: improving a basic feasible solution
use log::debug;

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::{IterationBudget, primal as pivot_until_done, PrimalResult};
use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::tableau::kind::non_artificial::NonArtificial;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, the tableau should have a valid basis with all basic variables within
/// their bounds.
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal<PR: PivotRule>(
    tableau: &mut Tableau<NonArtificial>,
    provider: &impl MatrixProvider,
    iterations: &mut IterationBudget,
) -> OptimizationResult {
    let fixed_artificials = tableau.fixed_artificial_basis_columns();
    if !fixed_artificials.is_empty() {
        debug!("Starting the second phase with artificial columns {fixed_artificials:?} fixed at zero");
    }

    match pivot_until_done::<_, PR>(tableau, iterations) {
        PrimalResult::Optimal => {
            OptimizationResult::FiniteOptimum(tableau.current_bfs(provider.nr_structural_variables()))
        },
        PrimalResult::Unbounded => OptimizationResult::Unbounded,
        PrimalResult::IterationLimitExceeded => OptimizationResult::IterationLimitExceeded,
    }
}
