//! # Non-Artificial Tableau
//!
//! Contains a tableau `Kind` type holding the true objective function and `Tableau` logic that is
//! only relevant in the second phase.
use itertools::Itertools;

use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::elements::BoundDirection;
use crate::data::number_types::float::numerical_precision::clamp_to_interval;
use crate::data::number_types::float::Tolerance;

/// The `Kind` in case the `Tableau` does not contain artificial variables that can still change
/// value.
///
/// This `Tableau` variant should only be constructed with a known feasible basis. It may still hold
/// artificial columns that couldn't be removed from the basis after the first phase; those are
/// fixed at zero.
#[derive(Clone, Debug, PartialEq)]
pub struct NonArtificial {
    /// Canonical (minimization) cost of each structural and slack variable.
    cost: Vec<f64>,
    first_artificial: usize,
}

impl NonArtificial {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `cost`: Cost of each structural and slack variable, so also the index of the first
    /// artificial column.
    pub fn new(cost: Vec<f64>) -> Self {
        let first_artificial = cost.len();
        Self { cost, first_artificial }
    }
}

impl Kind for NonArtificial {
    fn initial_cost_value(&self, j: usize) -> f64 {
        self.cost.get(j).copied().unwrap_or(0f64)
    }

    fn may_enter(&self, j: usize) -> bool {
        j < self.first_artificial
    }

    fn first_artificial(&self) -> usize {
        self.first_artificial
    }

    fn is_bounded_below(&self) -> bool {
        false
    }
}

impl Tableau<NonArtificial> {
    /// Create a tableau with all slack variables in the basis.
    ///
    /// This is a basic feasible solution if, and only if, all constraint values are nonnegative.
    pub fn new_with_slack_basis<MP: MatrixProvider>(
        provider: &MP,
        kind: NonArtificial,
        tolerance: Tolerance,
    ) -> Self {
        debug_assert!(provider.rows_needing_artificial().is_empty());
        debug_assert_eq!(kind.first_artificial, provider.nr_columns());

        Self::build(provider, &[], kind, tolerance)
    }

    /// Value of each structural variable at the current basic feasible solution.
    ///
    /// Values that are outside their bounds by rounding errors only are moved onto the bound.
    pub fn current_bfs(&self, nr_structural_variables: usize) -> Vec<f64> {
        debug_assert!(nr_structural_variables <= self.nr_columns());

        (0..nr_structural_variables)
            .map(|j| {
                let bounds = &self.bounds[j];
                clamp_to_interval(self.value(j), bounds[BoundDirection::Lower], bounds[BoundDirection::Upper])
            })
            .collect()
    }

    /// Columns of artificial variables that remained in the basis, fixed at zero.
    pub fn fixed_artificial_basis_columns(&self) -> Vec<usize> {
        self.basis_indices.iter()
            .copied()
            .filter(|&j| j >= self.kind.first_artificial)
            .sorted()
            .collect()
    }
}
