//! # Phase one: finding a basic feasible solution
use log::{debug, warn};

use crate::algorithm::two_phase::{IterationBudget, primal, PrimalResult};
use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::tableau::kind::artificial::Artificial;
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::kind::non_artificial::NonArtificial;
use crate::data::linear_program::elements::BoundDirection;
use crate::data::number_types::float::Tolerance;

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
#[derive(Debug, PartialEq)]
pub enum FeasibilityResult {
    /// The problem is feasible and the tableau is in a basic feasible solution state, ready for the
    /// second phase.
    Feasible(Tableau<NonArtificial>),
    /// The problem is not feasible.
    Infeasible,
    /// The first phase didn't finish within the iteration budget.
    IterationLimitExceeded,
}

/// Compute a basic feasible solution.
///
/// When all constraint values are nonnegative, the slack variables form a feasible basis and no
/// pivoting is needed. Otherwise, the sum of the artificial variables is minimized.
///
/// # Arguments
///
/// * `provider`: Problem in equality form.
/// * `tolerance`: Unscaled tolerance.
/// * `iterations`: Budget shared with the second phase.
pub fn compute_bfs<MP, PR>(
    provider: &MP,
    tolerance: Tolerance,
    iterations: &mut IterationBudget,
) -> FeasibilityResult
where
    MP: MatrixProvider,
    PR: PivotRule,
{
    let kind = NonArtificial::new((0..provider.nr_columns()).map(|j| provider.cost_value(j)).collect());

    if provider.rows_needing_artificial().is_empty() {
        debug!("Slack basis is feasible, skipping the first phase");
        return FeasibilityResult::Feasible(Tableau::new_with_slack_basis(provider, kind, tolerance));
    }

    let mut tableau = Tableau::<Artificial>::new(provider, tolerance);
    debug!("Starting the first phase with {} artificial variable(s)", tableau.nr_artificial_variables());

    match primal::<_, PR>(&mut tableau, iterations) {
        // Columns that nothing stops are never profitable for this kind, so the sum of the
        // artificial variables can't be unbounded. The residual decides either way.
        PrimalResult::Optimal | PrimalResult::Unbounded => {},
        PrimalResult::IterationLimitExceeded => return FeasibilityResult::IterationLimitExceeded,
    }

    let residual = tableau.objective_function_value();
    if !tolerance.scaled(provider.constraint_value_magnitude()).is_zero(residual) {
        debug!("Sum of artificial variables is {residual} at the end of the first phase");
        return FeasibilityResult::Infeasible;
    }

    if tableau.has_artificial_in_basis() {
        remove_artificial_basis_variables(&mut tableau);
    }

    FeasibilityResult::Feasible(tableau.into_non_artificial(kind))
}

/// Removes artificial variables from the basis by making a basis change "at zero level", that is,
/// without changing the value of any variable.
///
/// The entering column is the non-artificial nonbasic column with the largest absolute entry in the
/// row of the artificial variable; on ties, the lowest column index. An artificial variable for
/// which no such column exists stays in the basis. Its row is a linear combination of the other
/// rows.
///
/// # Arguments
///
/// * `tableau`: Tableau at the end of the first phase, with an objective function value of zero.
fn remove_artificial_basis_variables(tableau: &mut Tableau<Artificial>) {
    let first_artificial = tableau.kind().first_artificial();

    for artificial in tableau.artificial_basis_columns() {
        let row = tableau.pivot_row_from_artificial(artificial);

        let candidate = (0..first_artificial)
            .filter(|&j| !tableau.is_in_basis(j))
            .map(|j| (j, tableau.element(row, j).abs()))
            .filter(|&(j, magnitude)| tableau.pivot_tolerance(j).is_positive(magnitude))
            .fold(None, |best: Option<(usize, f64)>, (j, magnitude)| match best {
                Some((_, best_magnitude)) if best_magnitude >= magnitude => best,
                _ => Some((j, magnitude)),
            });

        match candidate {
            Some((column, _)) => {
                debug!("Artificial variable {artificial} leaves the basis in row {row} for column {column}");
                tableau.bring_into_basis(column, row, 0f64, BoundDirection::Lower);
            },
            None => warn!(
                "Artificial variable of row {} can't leave the basis, the row is redundant",
                tableau.original_row_of_artificial(artificial),
            ),
        }
    }
}
