//! # Equality form of a `Model`
//!
//! Every constraint `row · x <= rhs` gets a slack variable with coefficient one in that row, zero
//! elsewhere and bounds `[0, inf)`. The structural variables keep their bounds, so the number of
//! rows stays equal to the number of constraints.
use enum_map::{EnumMap, enum_map};

use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::data::linear_program::elements::BoundDirection;
use crate::data::linear_program::model::Model;

/// Read-only view of a `Model` as the system `[A | I] [x; s] = b`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixData<'a> {
    model: &'a Model,
    /// Cost of the structural variables in minimization form.
    cost: Vec<f64>,
    b: Vec<f64>,
}

impl<'a> MatrixData<'a> {
    /// Create a new instance.
    pub fn new(model: &'a Model) -> Self {
        let sign = model.objective().canonical_sign();

        Self {
            model,
            cost: model.cost().iter().map(|&c| sign * c).collect(),
            b: model.constraints().iter().map(|constraint| constraint.rhs()).collect(),
        }
    }

    /// Cost of all structural and slack variables, in column order.
    pub fn cost_vector(&self) -> Vec<f64> {
        (0..self.nr_columns()).map(|j| self.cost_value(j)).collect()
    }
}

impl MatrixProvider for MatrixData<'_> {
    fn nr_rows(&self) -> usize {
        self.model.nr_constraints()
    }

    fn nr_columns(&self) -> usize {
        self.model.nr_variables() + self.model.nr_constraints()
    }

    fn nr_structural_variables(&self) -> usize {
        self.model.nr_variables()
    }

    fn coefficient(&self, row: usize, column: usize) -> f64 {
        debug_assert!(row < self.nr_rows());
        debug_assert!(column < self.nr_columns());

        let n = self.nr_structural_variables();
        if column < n {
            self.model.constraints()[row].coefficients()[column]
        } else if column - n == row {
            1f64
        } else {
            0f64
        }
    }

    fn constraint_values(&self) -> &[f64] {
        &self.b
    }

    fn cost_value(&self, column: usize) -> f64 {
        debug_assert!(column < self.nr_columns());

        self.cost.get(column).copied().unwrap_or(0f64)
    }

    fn bounds(&self, column: usize) -> EnumMap<BoundDirection, f64> {
        debug_assert!(column < self.nr_columns());

        let upper = match self.model.variables().get(column) {
            Some(variable) => variable.upper_bound(),
            None => f64::INFINITY,
        };

        enum_map! {
            BoundDirection::Lower => 0f64,
            BoundDirection::Upper => upper,
        }
    }
}
