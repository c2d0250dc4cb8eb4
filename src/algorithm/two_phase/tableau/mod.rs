//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//! The tableau is dense: the problems solved are small, and a full `B^-1 A` is both the simplest
//! and the fastest representation at that size.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::mem;

use enum_map::{EnumMap, enum_map};
use itertools::Itertools;

use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::data::linear_program::elements::{BoundDirection, VariableStatus};
use crate::data::number_types::float::numerical_precision::{close, relative_epsilon};
use crate::data::number_types::float::Tolerance;

pub mod kind;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It is created from, but holds no reference to, the problem it solves. It owns all data
/// structures that describe the current basis, and is discarded when the solve call returns.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<K> {
    /// `B^-1 A`, one row per constraint with a value for each column.
    ///
    /// This attribute changes with a basis change.
    rows: Vec<Vec<f64>>,
    /// Value of the basic variable of each row.
    basic_values: Vec<f64>,
    /// Column that is basic in each row.
    basis_indices: Vec<usize>,
    /// For each column, whether it is basic or at which bound it is pinned.
    status: Vec<VariableStatus>,
    /// Lower and upper bound of each column.
    bounds: Vec<EnumMap<BoundDirection, f64>>,
    /// Relative cost of each column, zero for the basic ones.
    relative_costs: Vec<f64>,

    /// Unscaled tolerance that the others are derived from.
    base_tolerance: Tolerance,
    /// Scaled to the magnitude of the cost coefficients of the current kind.
    cost_tolerance: Tolerance,

    /// Whether this tableau has artificial variables (and is in the first phase of the two-phase
    /// algorithm) or not. See the `Kind` trait for more information.
    kind: K,
}

/// How far an entering variable can move before something stops it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Step {
    /// The basic variable of `row` reaches one of its bounds first and leaves the basis.
    BasisChange {
        /// Row of the leaving variable.
        row: usize,
        /// Distance the entering variable moves.
        length: f64,
        /// The bound at which the leaving variable will be pinned.
        leaving_to: BoundDirection,
    },
    /// The entering variable reaches its opposite bound first; the basis doesn't change.
    BoundFlip {
        /// Distance between the two bounds of the entering variable.
        length: f64,
    },
    /// Nothing stops the entering variable.
    Unbounded,
}

impl<K: Kind> Tableau<K> {
    /// Create a tableau for a provider.
    ///
    /// # Arguments
    ///
    /// * `provider`: The problem in equality form.
    /// * `artificial_rows`: Sorted rows that get an artificial variable. The slack variables of
    /// the other rows form the rest of the initial basis.
    /// * `kind`: Objective function and entering rules.
    /// * `tolerance`: Unscaled tolerance.
    fn build<MP: MatrixProvider>(
        provider: &MP,
        artificial_rows: &[usize],
        kind: K,
        tolerance: Tolerance,
    ) -> Self {
        debug_assert!(artificial_rows.iter().tuple_windows().all(|(a, b)| a < b));

        let nr_rows = provider.nr_rows();
        let first_artificial = provider.nr_columns();
        let nr_columns = first_artificial + artificial_rows.len();
        let nr_structural = provider.nr_structural_variables();
        let b = provider.constraint_values();

        let mut rows = Vec::with_capacity(nr_rows);
        let mut basic_values = Vec::with_capacity(nr_rows);
        let mut basis_indices = Vec::with_capacity(nr_rows);
        let mut status = vec![VariableStatus::NonbasicLower; nr_columns];

        let mut artificials = artificial_rows.iter().enumerate().peekable();
        for i in 0..nr_rows {
            let mut row = (0..nr_columns)
                .map(|j| if j < first_artificial { provider.coefficient(i, j) } else { 0f64 })
                .collect::<Vec<_>>();

            let basic_column = match artificials.next_if(|&(_, &row_index)| row_index == i) {
                Some((k, _)) => {
                    for value in &mut row {
                        *value = -*value;
                    }
                    let column = first_artificial + k;
                    row[column] = 1f64;
                    basic_values.push(-b[i]);
                    column
                },
                None => {
                    basic_values.push(b[i]);
                    nr_structural + i
                },
            };

            status[basic_column] = VariableStatus::Basic(i);
            basis_indices.push(basic_column);
            rows.push(row);
        }

        let bounds = (0..nr_columns)
            .map(|j| if j < first_artificial {
                provider.bounds(j)
            } else {
                enum_map! {
                    BoundDirection::Lower => 0f64,
                    BoundDirection::Upper => f64::INFINITY,
                }
            })
            .collect();

        let mut tableau = Self {
            rows,
            basic_values,
            basis_indices,
            status,
            bounds,
            relative_costs: vec![0f64; nr_columns],
            base_tolerance: tolerance,
            cost_tolerance: tolerance,
            kind,
        };
        tableau.recompute_relative_costs();

        tableau
    }

    /// Compute the relative cost of all columns from scratch, using the objective function of the
    /// current kind.
    fn recompute_relative_costs(&mut self) {
        let basic_costs = self.basis_indices.iter()
            .map(|&j| self.kind.initial_cost_value(j))
            .collect::<Vec<_>>();

        let mut relative_costs = (0..self.nr_columns())
            .map(|j| {
                let reduction = self.rows.iter()
                    .zip(&basic_costs)
                    .map(|(row, cost)| cost * row[j])
                    .sum::<f64>();
                self.kind.initial_cost_value(j) - reduction
            })
            .collect::<Vec<_>>();
        for &j in &self.basis_indices {
            relative_costs[j] = 0f64;
        }
        self.relative_costs = relative_costs;

        let magnitude = (0..self.nr_columns())
            .map(|j| self.kind.initial_cost_value(j).abs())
            .fold(0f64, f64::max);
        self.cost_tolerance = self.base_tolerance.scaled(magnitude);
    }

    /// Whether a column can improve the objective function by entering the basis.
    ///
    /// That is the case for a variable at its lower bound with negative relative cost, and for a
    /// variable at its upper bound with positive relative cost. Fixed variables never improve.
    ///
    /// When the objective function of the kind is bounded from below, a column that no row limits
    /// and that has no opposite bound only looks profitable due to rounding errors; it is skipped.
    pub fn is_profitable(&self, j: usize) -> bool {
        debug_assert!(j < self.nr_columns());

        if !self.kind.may_enter(j) {
            return false;
        }
        let bounds = &self.bounds[j];
        if bounds[BoundDirection::Upper] <= bounds[BoundDirection::Lower] {
            return false;
        }

        let improves = match self.status[j] {
            VariableStatus::Basic(_) => false,
            VariableStatus::NonbasicLower => self.cost_tolerance.is_negative(self.relative_costs[j]),
            VariableStatus::NonbasicUpper => self.cost_tolerance.is_positive(self.relative_costs[j]),
        };

        improves && (!self.kind.is_bounded_below() || self.can_be_stopped(j))
    }

    /// Whether the movement of an entering column is limited by a row or by its own range.
    fn can_be_stopped(&self, column: usize) -> bool {
        let bounds = &self.bounds[column];
        if (bounds[BoundDirection::Upper] - bounds[BoundDirection::Lower]).is_finite() {
            return true;
        }

        let direction = self.entering_direction(column);
        let tolerance = self.pivot_tolerance(column);
        (0..self.nr_rows()).any(|row| self.row_limit(row, column, direction, tolerance).is_some())
    }

    /// How far an entering column can move before the basic variable of a row reaches a bound.
    ///
    /// # Return value
    ///
    /// The step length and the bound reached, or `None` if the row doesn't limit the movement.
    fn row_limit(
        &self,
        row: usize,
        column: usize,
        direction: f64,
        tolerance: Tolerance,
    ) -> Option<(f64, BoundDirection)> {
        let alpha = direction * self.rows[row][column];
        let leaving_bounds = &self.bounds[self.basis_indices[row]];

        if tolerance.is_positive(alpha) {
            let room = self.basic_values[row] - leaving_bounds[BoundDirection::Lower];
            Some((room.max(0f64) / alpha, BoundDirection::Lower))
        } else if tolerance.is_negative(alpha) {
            let upper = leaving_bounds[BoundDirection::Upper];
            if upper.is_infinite() {
                return None;
            }
            let room = upper - self.basic_values[row];
            Some((room.max(0f64) / -alpha, BoundDirection::Upper))
        } else {
            None
        }
    }

    /// Determine what limits the movement of an entering column.
    ///
    /// A basic variable limits the movement when it reaches one of its bounds. When multiple rows
    /// reach a bound at the same step length, the row of which the basic variable has the smallest
    /// column index is chosen (Bland's anti cycling rule). When the entering variable can reach its
    /// opposite bound at most as far, the bound flip is preferred.
    ///
    /// # Arguments
    ///
    /// * `column`: Nonbasic column that will enter.
    pub fn select_primal_pivot_row(&self, column: usize) -> Step {
        debug_assert!(column < self.nr_columns());
        debug_assert!(!self.is_in_basis(column));

        let direction = self.entering_direction(column);
        let tolerance = self.pivot_tolerance(column);
        let epsilon = tolerance.epsilon();

        // (chosen row, minimum ratio, bound reached, leaving column for Bland's rule)
        let mut min_values: Option<(usize, f64, BoundDirection, usize)> = None;
        for row in 0..self.nr_rows() {
            let Some((ratio, leaving_to)) = self.row_limit(row, column, direction, tolerance) else {
                continue;
            };
            let leaving_column = self.basis_indices[row];

            match &mut min_values {
                Some((min_row, min_ratio, min_leaving_to, min_leaving_column)) => {
                    let is_tie = close(ratio, *min_ratio, epsilon);
                    if (!is_tie && ratio < *min_ratio) || (is_tie && leaving_column < *min_leaving_column) {
                        *min_row = row;
                        *min_ratio = ratio;
                        *min_leaving_to = leaving_to;
                        *min_leaving_column = leaving_column;
                    }
                },
                None => min_values = Some((row, ratio, leaving_to, leaving_column)),
            }
        }

        let bounds = &self.bounds[column];
        let range = bounds[BoundDirection::Upper] - bounds[BoundDirection::Lower];
        match min_values {
            Some((_, ratio, _, _)) if range <= ratio + relative_epsilon(epsilon, ratio) => {
                Step::BoundFlip { length: range }
            },
            Some((row, length, leaving_to, _)) => Step::BasisChange { row, length, leaving_to },
            None if range.is_finite() => Step::BoundFlip { length: range },
            None => Step::Unbounded,
        }
    }

    /// Brings a column into the basis.
    ///
    /// The entering variable moves over `length` away from its current bound, all basic variables
    /// move accordingly and the basic variable of `pivot_row_index` leaves to `leaving_to`.
    pub fn bring_into_basis(
        &mut self,
        pivot_column_index: usize,
        pivot_row_index: usize,
        length: f64,
        leaving_to: BoundDirection,
    ) {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());
        debug_assert!(!self.is_in_basis(pivot_column_index));

        let shift = self.entering_direction(pivot_column_index) * length;
        let entering_value = self.value(pivot_column_index) + shift;
        self.shift_basic_values(pivot_column_index, shift);

        let leaving_column = self.basis_indices[pivot_row_index];
        self.pivot(pivot_row_index, pivot_column_index);

        self.basic_values[pivot_row_index] = entering_value;
        self.basis_indices[pivot_row_index] = pivot_column_index;
        self.status[pivot_column_index] = VariableStatus::Basic(pivot_row_index);
        self.status[leaving_column] = VariableStatus::at(leaving_to);
    }

    /// Move a nonbasic variable to its opposite bound.
    pub fn flip_bound(&mut self, column: usize, length: f64) {
        debug_assert!(!self.is_in_basis(column));

        let shift = self.entering_direction(column) * length;
        self.shift_basic_values(column, shift);

        if let Some(bound) = self.status[column].bound() {
            self.status[column] = VariableStatus::at(!bound);
        }
    }

    /// Update the basic variables for a change of a nonbasic variable.
    fn shift_basic_values(&mut self, column: usize, shift: f64) {
        if shift == 0f64 {
            return;
        }

        for (value, row) in self.basic_values.iter_mut().zip(&self.rows) {
            *value -= shift * row[column];
        }
    }

    /// Row reduce such that the pivot column becomes the unit vector of the pivot row, in the
    /// constraint rows as well as in the relative cost row.
    fn pivot(&mut self, pivot_row_index: usize, pivot_column_index: usize) {
        debug_assert!(
            !self.pivot_tolerance(pivot_column_index).is_zero(self.rows[pivot_row_index][pivot_column_index]),
            "Pivot element in column {pivot_column_index} is too small",
        );
        let mut pivot_row = mem::take(&mut self.rows[pivot_row_index]);
        let pivot_value = pivot_row[pivot_column_index];

        for value in &mut pivot_row {
            *value /= pivot_value;
        }
        pivot_row[pivot_column_index] = 1f64;

        for (i, row) in self.rows.iter_mut().enumerate() {
            if i == pivot_row_index {
                continue;
            }
            let factor = row[pivot_column_index];
            if factor != 0f64 {
                for (value, pivot) in row.iter_mut().zip(&pivot_row) {
                    *value -= factor * pivot;
                }
                row[pivot_column_index] = 0f64;
            }
        }

        let factor = self.relative_costs[pivot_column_index];
        if factor != 0f64 {
            for (cost, pivot) in self.relative_costs.iter_mut().zip(&pivot_row) {
                *cost -= factor * pivot;
            }
        }
        self.relative_costs[pivot_column_index] = 0f64;

        self.rows[pivot_row_index] = pivot_row;
    }

    /// Sign of the movement of a nonbasic variable when it enters.
    fn entering_direction(&self, column: usize) -> f64 {
        self.status[column].bound().map_or(0f64, BoundDirection::direction_away)
    }

    /// Calculates the relative cost of a column.
    ///
    /// # Note
    ///
    /// For basis columns this is always zero.
    pub fn relative_cost(&self, j: usize) -> f64 {
        debug_assert!(j < self.nr_columns());

        self.relative_costs[j]
    }

    /// Single element with respect to the current basis.
    pub fn element(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        self.rows[i][j]
    }

    /// Current value of a variable, basic or not.
    pub fn value(&self, j: usize) -> f64 {
        match self.status[j] {
            VariableStatus::Basic(row) => self.basic_values[row],
            VariableStatus::NonbasicLower => self.bounds[j][BoundDirection::Lower],
            VariableStatus::NonbasicUpper => self.bounds[j][BoundDirection::Upper],
        }
    }

    /// Whether a column is basic, or at which bound it is pinned.
    pub fn status(&self, j: usize) -> VariableStatus {
        self.status[j]
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, j: usize) -> bool {
        matches!(self.status[j], VariableStatus::Basic(_))
    }

    /// Get the cost of the current solution.
    ///
    /// # Note
    ///
    /// This function works for both artificial and non-artificial tableaus.
    pub fn objective_function_value(&self) -> f64 {
        (0..self.nr_columns())
            .map(|j| self.kind.initial_cost_value(j) * self.value(j))
            .sum()
    }

    /// Number of rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of variables in the tableau, including any artificial variables.
    pub fn nr_columns(&self) -> usize {
        self.status.len()
    }

    /// The kind of this tableau.
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// Threshold below which an entry of a column is not accepted as a pivot element.
    ///
    /// It is relative to the largest entry in that column of the current tableau, such that a
    /// column with only small entries can still be pivoted on.
    pub fn pivot_tolerance(&self, column: usize) -> Tolerance {
        let magnitude = self.rows.iter()
            .map(|row| row[column].abs())
            .fold(0f64, f64::max);
        self.base_tolerance.scaled(magnitude)
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn debug_assert_in_basic_feasible_solution_state<K: Kind>(tableau: &Tableau<K>) {
    debug_assert_eq!(tableau.basis_indices.len(), tableau.nr_rows());

    for (i, &j) in tableau.basis_indices.iter().enumerate() {
        debug_assert_eq!(tableau.status[j], VariableStatus::Basic(i), "Column {j} is not basic in row {i}");
        debug_assert_eq!(tableau.relative_costs[j], 0f64, "Relative cost of column {j} is not zero");
        debug_assert!(
            (tableau.rows[i][j] - 1f64).abs() < 1e-9,
            "Column {j} is not equal to e_{i}",
        );

        let value = tableau.basic_values[i];
        let bounds = &tableau.bounds[j];
        let slack = 1e-6 * value.abs().max(1f64);
        debug_assert!(
            value >= bounds[BoundDirection::Lower] - slack && value <= bounds[BoundDirection::Upper] + slack,
            "Basic variable {j} has value {value} outside of its bounds",
        );
    }
    debug_assert_eq!(
        tableau.status.iter().filter(|status| matches!(status, VariableStatus::Basic(_))).count(),
        tableau.nr_rows(),
    );
}

impl<K: Kind> Display for Tableau<K> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let width = 10;

        writeln!(f, "=== Tableau ===")?;
        write!(f, "{:>6} | {:>width$} |", "", "b")?;
        for j in 0..self.nr_columns() {
            write!(f, " {j:>width$}")?;
        }
        writeln!(f)?;

        write!(f, "{:>6} | {:>width$.4} |", "cost", self.objective_function_value())?;
        for cost in &self.relative_costs {
            write!(f, " {cost:>width$.4}")?;
        }
        writeln!(f)?;

        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "{i:>6} | {:>width$.4} |", self.basic_values[i])?;
            for value in row {
                write!(f, " {value:>width$.4}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "=== Nonbasic at upper bound ===")?;
        let at_upper = (0..self.nr_columns())
            .filter(|&j| self.status[j] == VariableStatus::NonbasicUpper)
            .join(", ");
        writeln!(f, "[{at_upper}]")?;

        writeln!(f, "=== Basis Columns ===")?;
        writeln!(f, "{:?}", self.basis_indices.iter().enumerate().collect::<Vec<_>>())
    }
}
