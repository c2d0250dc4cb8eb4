//! # Artificial variables in the tableau
//!
//! Rows with a negative constraint value can't start with their slack variable in the basis. For
//! each such row, an artificial variable with coefficient `-1` is appended; negating the row makes
//! that coefficient `1` and the initial value of the artificial variable `-b_i > 0`.
use itertools::Itertools;
use log::debug;

use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::kind::non_artificial::NonArtificial;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::elements::{BoundDirection, VariableStatus};
use crate::data::number_types::float::Tolerance;

/// The `Kind` of the first phase: the cost of each artificial variable is one, the cost of all
/// other variables is zero.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Artificial {
    /// Index of the first artificial column, equal to the number of structural and slack variables.
    first_artificial: usize,
    /// Row of each artificial variable, sorted.
    artificial_rows: Vec<usize>,
}

impl Kind for Artificial {
    fn initial_cost_value(&self, j: usize) -> f64 {
        if j < self.first_artificial { 0f64 } else { 1f64 }
    }

    fn may_enter(&self, j: usize) -> bool {
        j < self.first_artificial
    }

    fn first_artificial(&self) -> usize {
        self.first_artificial
    }

    /// A sum of nonnegative variables.
    fn is_bounded_below(&self) -> bool {
        true
    }
}

impl Tableau<Artificial> {
    /// Create a tableau with an artificial variable for every row with a negative constraint value
    /// and the slack variable of all other rows in the basis.
    pub fn new<MP: MatrixProvider>(provider: &MP, tolerance: Tolerance) -> Self {
        let artificial_rows = provider.rows_needing_artificial();
        let kind = Artificial {
            first_artificial: provider.nr_columns(),
            artificial_rows: artificial_rows.clone(),
        };

        Self::build(provider, &artificial_rows, kind, tolerance)
    }

    /// Number of artificial columns.
    pub fn nr_artificial_variables(&self) -> usize {
        self.kind.artificial_rows.len()
    }

    /// Whether any artificial variable is still basic.
    pub fn has_artificial_in_basis(&self) -> bool {
        self.basis_indices.iter().any(|&j| j >= self.kind.first_artificial)
    }

    /// Column indices of the artificial variables that are basic, sorted.
    pub fn artificial_basis_columns(&self) -> Vec<usize> {
        self.basis_indices.iter()
            .copied()
            .filter(|&j| j >= self.kind.first_artificial)
            .sorted()
            .collect()
    }

    /// Row in which an artificial variable is basic.
    ///
    /// # Arguments
    ///
    /// * `artificial`: Column index of an artificial variable that is in the basis.
    pub fn pivot_row_from_artificial(&self, artificial: usize) -> usize {
        debug_assert!(artificial >= self.kind.first_artificial);

        match self.status[artificial] {
            VariableStatus::Basic(row) => row,
            _ => panic!("Artificial variable {artificial} is not in the basis."),
        }
    }

    /// Row in which an artificial variable was introduced.
    pub fn original_row_of_artificial(&self, artificial: usize) -> usize {
        self.kind.artificial_rows[artificial - self.kind.first_artificial]
    }

    /// Switch to the objective function of the second phase.
    ///
    /// Artificial columns are dropped when none of them is basic anymore. Otherwise, all of them
    /// are kept with their upper bound set to zero, and none of them will enter the basis again.
    pub fn into_non_artificial(mut self, kind: NonArtificial) -> Tableau<NonArtificial> {
        let first_artificial = self.kind.first_artificial;
        debug_assert_eq!(kind.first_artificial(), first_artificial);

        if self.has_artificial_in_basis() {
            debug!(
                "Keeping {} artificial variable(s) fixed at zero in the basis",
                self.artificial_basis_columns().len(),
            );
            for bounds in &mut self.bounds[first_artificial..] {
                bounds[BoundDirection::Upper] = 0f64;
            }
        } else {
            for row in &mut self.rows {
                row.truncate(first_artificial);
            }
            self.status.truncate(first_artificial);
            self.bounds.truncate(first_artificial);
            self.relative_costs.truncate(first_artificial);
        }

        let mut tableau = Tableau {
            rows: self.rows,
            basic_values: self.basic_values,
            basis_indices: self.basis_indices,
            status: self.status,
            bounds: self.bounds,
            relative_costs: self.relative_costs,
            base_tolerance: self.base_tolerance,
            cost_tolerance: self.cost_tolerance,
            kind,
        };
        tableau.recompute_relative_costs();

        tableau
    }
}
