//! # Representing linear programs for rapid read access
//!
//! The Simplex method algorithms work on a tableau. The tableau is built once from a matrix in
//! equality form, provided by a type from this module, and then only changed by pivoting.
use enum_map::EnumMap;

use crate::data::linear_program::elements::BoundDirection;
use crate::data::number_types::float::numerical_precision::max_finite_magnitude;

pub mod matrix_data;

/// Abstract interface for a matrix and constraint vector in equality form.
///
/// This is the data of the "problem relative to the initial basis"; that is, nothing in data
/// structures implementing this trait determines a basis. The indexing for the variables and
/// constraints is as follows:
///
/// /                 || Vars of which we want a solution | Constraint slack vars ||
/// ==================||==================================|=======================||=====|
/// Constraints       ||            constants             |       identity        ||  b  |
/// -------------------------------------------------------------------------------------
///
/// Artificial variables are not part of the provided matrix; the tableau adds them when needed.
pub trait MatrixProvider {
    /// Number of constraints, `m`.
    fn nr_rows(&self) -> usize;

    /// Number of structural and slack variables together, `n + m`.
    fn nr_columns(&self) -> usize;

    /// Number of variables of which the caller wants a solution, `n`.
    fn nr_structural_variables(&self) -> usize;

    /// Coefficient in the equality form matrix `[A | I]`.
    fn coefficient(&self, row: usize, column: usize) -> f64;

    /// Right-hand side `b` of the equality form.
    fn constraint_values(&self) -> &[f64];

    /// Cost of a variable in the canonical, minimizing, objective function.
    fn cost_value(&self, column: usize) -> f64;

    /// Lower and upper bound of a variable.
    fn bounds(&self, column: usize) -> EnumMap<BoundDirection, f64>;

    /// Rows that can't use their slack variable in an initial basis, because their right-hand side
    /// is negative. Sorted.
    fn rows_needing_artificial(&self) -> Vec<usize> {
        self.constraint_values().iter()
            .enumerate()
            .filter(|&(_, &value)| value < 0f64)
            .map(|(i, _)| i)
            .collect()
    }

    /// Largest absolute right-hand side value.
    fn constraint_value_magnitude(&self) -> f64 {
        max_finite_magnitude(self.constraint_values())
    }
}
