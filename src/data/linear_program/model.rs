//! # Linear programs with inequality constraints and bounded variables
//!
//! A `Model` is what the caller hands to the solver: `n` nonnegative variables with an upper bound
//! each, `m` constraints `row · x <= rhs` and a linear objective function. It is validated once,
//! on construction, and read-only afterwards.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::algorithm::SolverConfig;
use crate::algorithm::two_phase::solve_relaxation;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::error::ModelError;
use crate::data::linear_program::solution::Solution;

/// A single constraint `coefficients · x <= rhs`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    coefficients: Vec<f64>,
    rhs: f64,
}

impl Constraint {
    /// Coefficient of each variable, in variable order.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Right-hand side.
    pub fn rhs(&self) -> f64 {
        self.rhs
    }

    /// Value of the left-hand side at a point.
    pub fn activity(&self, values: &[f64]) -> f64 {
        debug_assert_eq!(values.len(), self.coefficients.len());

        self.coefficients.iter().zip(values).map(|(a, x)| a * x).sum()
    }
}

/// A variable with lower bound zero and a (possibly infinite) upper bound.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Variable {
    upper_bound: f64,
}

impl Variable {
    /// Always zero.
    pub fn lower_bound(&self) -> f64 {
        0f64
    }

    /// Nonnegative, may be `f64::INFINITY`.
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }
}

/// A validated linear program.
///
/// Constraints are kept in insertion order; that order is also the row order of the tableau and of
/// any reporting done on the model.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    objective: Objective,
    cost: Vec<f64>,
    constraints: Vec<Constraint>,
    variables: Vec<Variable>,
}

impl Model {
    /// Create a new linear program.
    ///
    /// # Arguments
    ///
    /// * `cost`: Objective function coefficient of each variable. Its length determines the number
    /// of variables.
    /// * `objective`: Whether to minimize or maximize.
    /// * `constraints`: `(row, rhs)` pairs, each describing `row · x <= rhs`.
    /// * `upper_bounds`: Upper bound of each variable, nonnegative and possibly infinite.
    ///
    /// # Errors
    ///
    /// When a vector has the wrong length, when an upper bound is negative or `NaN`, or when any
    /// other number is not finite.
    pub fn new(
        cost: Vec<f64>,
        objective: Objective,
        constraints: Vec<(Vec<f64>, f64)>,
        upper_bounds: Vec<f64>,
    ) -> Result<Self, ModelError> {
        let nr_variables = cost.len();

        check_finite("objective coefficient", &cost)?;
        check_length("upper bounds", nr_variables, upper_bounds.len())?;
        if let Some((index, &value)) = upper_bounds.iter()
            .find_position(|bound| bound.is_nan() || **bound < 0f64) {
            return Err(ModelError::InvalidBound { index, value });
        }

        let constraints = constraints.into_iter()
            .enumerate()
            .map(|(i, (coefficients, rhs))| {
                check_length(&format!("constraint row {i}"), nr_variables, coefficients.len())?;
                check_finite(&format!("coefficient of constraint row {i}"), &coefficients)?;
                if !rhs.is_finite() {
                    return Err(ModelError::NotFinite { what: "right-hand side".to_string(), index: i, value: rhs });
                }

                Ok(Constraint { coefficients, rhs })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let variables = upper_bounds.into_iter()
            .map(|upper_bound| Variable { upper_bound })
            .collect();

        Ok(Self { objective, cost, constraints, variables })
    }

    /// Solve this linear program with the default configuration.
    pub fn solve(&self) -> Solution {
        self.solve_with(&SolverConfig::default())
    }

    /// Solve this linear program.
    ///
    /// The model is not modified and no state is shared between calls, so a model can be solved
    /// from several threads at once.
    pub fn solve_with(&self, config: &SolverConfig) -> Solution {
        Solution::from_result(solve_relaxation(self, config), &self.cost)
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Objective function coefficients as provided, not negated for maximization.
    pub fn cost(&self) -> &[f64] {
        &self.cost
    }

    /// All constraints, in insertion order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// All variables, in index order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Number of variables, `n`.
    pub fn nr_variables(&self) -> usize {
        self.variables.len()
    }

    /// Number of constraints, `m`.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }
}

fn check_length(what: &str, expected: usize, found: usize) -> Result<(), ModelError> {
    if expected == found {
        Ok(())
    } else {
        Err(ModelError::DimensionMismatch { what: what.to_string(), expected, found })
    }
}

fn check_finite(what: &str, values: &[f64]) -> Result<(), ModelError> {
    match values.iter().find_position(|value| !value.is_finite()) {
        None => Ok(()),
        Some((index, &value)) => Err(ModelError::NotFinite { what: what.to_string(), index, value }),
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let sense = match self.objective {
            Objective::Maximize => "maximize",
            Objective::Minimize => "minimize",
        };
        writeln!(f, "{} {}", sense, self.cost.iter().join(" "))?;
        for constraint in &self.constraints {
            writeln!(f, "  {} <= {}", constraint.coefficients.iter().join(" "), constraint.rhs)?;
        }
        write!(f, "  0 <= x <= [{}]", self.variables.iter().map(Variable::upper_bound).join(", "))
    }
}
