//! # Representation of the outcome of solving
//!
//! Once a linear program is fully solved, a `Solution` is derived. It is created once and never
//! modified afterwards.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::algorithm::OptimizationResult;

/// Status of a solved linear program, with the optimal point if there is one.
#[derive(Clone, Debug, PartialEq)]
pub enum Solution {
    /// A finite optimum was found.
    Optimal {
        /// Value of each variable, in variable order.
        values: Vec<f64>,
        /// Objective function value at `values`, with the sign of the original objective.
        objective_value: f64,
    },
    /// No point satisfies all constraints and bounds.
    Infeasible,
    /// The objective function can be improved without limit.
    Unbounded,
    /// The pivot budget ran out before the algorithm terminated.
    IterationLimitExceeded,
}

impl Solution {
    /// Derive the solution from the result of the algorithm.
    ///
    /// The objective value is recomputed from the original cost coefficients rather than read from
    /// the tableau, so that rounding errors accumulated while pivoting don't propagate into it.
    pub(crate) fn from_result(result: OptimizationResult, cost: &[f64]) -> Self {
        match result {
            OptimizationResult::FiniteOptimum(values) => {
                debug_assert_eq!(values.len(), cost.len());

                let objective_value = cost.iter().zip(&values).map(|(c, x)| c * x).sum();
                Solution::Optimal { values, objective_value }
            },
            OptimizationResult::Infeasible => Solution::Infeasible,
            OptimizationResult::Unbounded => Solution::Unbounded,
            OptimizationResult::IterationLimitExceeded => Solution::IterationLimitExceeded,
        }
    }

    /// Whether a finite optimum was found.
    pub fn is_optimal(&self) -> bool {
        matches!(self, Solution::Optimal { .. })
    }

    /// The optimal point, if any.
    pub fn values(&self) -> Option<&[f64]> {
        match self {
            Solution::Optimal { values, .. } => Some(values),
            _ => None,
        }
    }

    /// The optimal objective function value, if any.
    pub fn objective_value(&self) -> Option<f64> {
        match self {
            Solution::Optimal { objective_value, .. } => Some(*objective_value),
            _ => None,
        }
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        match self {
            Solution::Optimal { values, objective_value } => {
                writeln!(f, "Optimal, objective value {objective_value}")?;
                write!(f, "[{}]", values.iter().join(", "))
            },
            Solution::Infeasible => write!(f, "Problem is not feasible."),
            Solution::Unbounded => write!(f, "Problem is unbounded."),
            Solution::IterationLimitExceeded => write!(f, "Iteration limit exceeded."),
        }
    }
}
