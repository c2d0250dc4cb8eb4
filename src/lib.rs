//! # A bounded-variable linear program solver
//!
//! Linear programs of the form
//!
//! ```text
//! maximize or minimize  c · x
//! subject to            A x <= b
//!                       0 <= x <= u
//! ```
//!
//! are solved using the two-phase Simplex Method. Upper bounds are handled implicitly: a nonbasic
//! variable sits at either of its bounds, so no extra rows are needed for them.
//!
//! ```
//! use bounded_simplex::{Objective, solve};
//!
//! let solution = solve(&[1f64], Objective::Maximize, &[(vec![1f64], 5f64)], &[10f64]).unwrap();
//! assert_eq!(solution.objective_value(), Some(5f64));
//! ```
#![warn(missing_docs)]

pub use crate::algorithm::SolverConfig;
pub use crate::algorithm::two_phase::strategy::pivot_rule::PivotRuleKind;
pub use crate::data::linear_program::elements::Objective;
pub use crate::data::linear_program::error::ModelError;
pub use crate::data::linear_program::model::Model;
pub use crate::data::linear_program::solution::Solution;

pub mod algorithm;
pub mod case_study;
pub mod data;

#[cfg(test)]
mod tests;

/// Solve a linear program with the default configuration.
///
/// # Arguments
///
/// * `objective`: Cost coefficient of each variable.
/// * `sense`: Whether to maximize or minimize.
/// * `constraints`: `(row, rhs)` pairs, each describing `row · x <= rhs`.
/// * `upper_bounds`: Upper bound of each variable, possibly infinite. All lower bounds are zero.
///
/// # Errors
///
/// When the input is malformed, see `Model::new`. An infeasible or unbounded problem is not an
/// error, it is reported through the `Solution`.
pub fn solve(
    objective: &[f64],
    sense: Objective,
    constraints: &[(Vec<f64>, f64)],
    upper_bounds: &[f64],
) -> Result<Solution, ModelError> {
    let model = Model::new(objective.to_vec(), sense, constraints.to_vec(), upper_bounds.to_vec())?;
    Ok(model.solve())
}
