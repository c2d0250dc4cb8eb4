//! # Derived quantities of an optimal point
//!
//! How much of each constraint and each variable capacity is in use. These are computed from the
//! model and a value vector only; the solver doesn't report them.
use crate::data::linear_program::model::Model;

/// Usage of a single constraint `row · x <= rhs` at a point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstraintUsage {
    /// `row · x`.
    pub usage: f64,
    /// `rhs`.
    pub limit: f64,
    /// `rhs - row · x`, nonnegative at a feasible point.
    pub slack: f64,
    /// Usage as a percentage of the limit, `None` when the limit is zero.
    pub utilization: Option<f64>,
}

/// Usage of every constraint, in row order.
pub fn constraint_usage(model: &Model, values: &[f64]) -> Vec<ConstraintUsage> {
    debug_assert_eq!(values.len(), model.nr_variables());

    model.constraints().iter()
        .map(|constraint| {
            let usage = constraint.activity(values);
            let limit = constraint.rhs();
            ConstraintUsage {
                usage,
                limit,
                slack: limit - usage,
                utilization: if limit == 0f64 { None } else { Some(100f64 * usage / limit) },
            }
        })
        .collect()
}

/// Each variable value as a percentage of its upper bound.
///
/// A variable with upper bound zero uses zero percent, a variable without upper bound has no
/// meaningful percentage.
pub fn capacity_usage(model: &Model, values: &[f64]) -> Vec<Option<f64>> {
    debug_assert_eq!(values.len(), model.nr_variables());

    model.variables().iter().zip(values)
        .map(|(variable, &value)| {
            let upper = variable.upper_bound();
            if upper.is_infinite() {
                None
            } else if upper > 0f64 {
                Some(100f64 * value / upper)
            } else {
                Some(0f64)
            }
        })
        .collect()
}

/// Contribution `c_j x_j` of each variable to the objective value.
pub fn contributions(model: &Model, values: &[f64]) -> Vec<f64> {
    model.cost().iter().zip(values).map(|(c, x)| c * x).collect()
}
