//! # Case studies
//!
//! Two small planning problems with their default inputs, and a report that combines the solution
//! with the derived usage figures.
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::algorithm::SolverConfig;
use crate::data::linear_program::analysis::{capacity_usage, constraint_usage, contributions, ConstraintUsage};
use crate::data::linear_program::error::ModelError;
use crate::data::linear_program::model::Model;
use crate::data::linear_program::solution::Solution;

pub use crate::case_study::overtime::OvertimeAllocation;
pub use crate::case_study::production::ProductionPlanning;

pub mod overtime;
pub mod production;

/// A parametrized planning problem that can be formulated as a linear program.
pub trait CaseStudy {
    /// Short name of each variable, in variable order.
    const VARIABLE_NAMES: [&'static str; 4];
    /// Short name of each constraint, in row order.
    const CONSTRAINT_NAMES: &'static [&'static str];

    /// Formulate the linear program.
    ///
    /// # Errors
    ///
    /// When the parameters don't describe a valid model, for example because of a negative
    /// capacity.
    fn model(&self) -> Result<Model, ModelError>;

    /// Formulate, solve and analyze.
    ///
    /// # Errors
    ///
    /// See `CaseStudy::model`.
    fn solve_with(&self, config: &SolverConfig) -> Result<CaseStudyReport, ModelError> {
        let model = self.model()?;
        let solution = model.solve_with(config);

        Ok(CaseStudyReport::new(&model, &Self::VARIABLE_NAMES, Self::CONSTRAINT_NAMES, solution))
    }
}

/// Solution of a case study together with the quantities derived from it.
///
/// The derived quantities are empty unless the solution is optimal.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseStudyReport {
    /// Variable names, in variable order.
    pub variable_names: Vec<String>,
    /// Constraint names, in row order.
    pub constraint_names: Vec<String>,
    /// Outcome of the solve.
    pub solution: Solution,
    /// Usage of each constraint.
    pub constraint_usage: Vec<ConstraintUsage>,
    /// Value of each variable as a percentage of its capacity.
    pub capacity_usage: Vec<Option<f64>>,
    /// Contribution of each variable to the objective value.
    pub contributions: Vec<f64>,
}

impl CaseStudyReport {
    /// Derive a report from a solution.
    pub fn new(
        model: &Model,
        variable_names: &[&str],
        constraint_names: &[&str],
        solution: Solution,
    ) -> Self {
        let (constraint_usage, capacity_usage, contributions) = match solution.values() {
            Some(values) => (
                constraint_usage(model, values),
                capacity_usage(model, values),
                contributions(model, values),
            ),
            None => (Vec::new(), Vec::new(), Vec::new()),
        };

        Self {
            variable_names: variable_names.iter().map(ToString::to_string).collect(),
            constraint_names: constraint_names.iter().map(ToString::to_string).collect(),
            solution,
            constraint_usage,
            capacity_usage,
            contributions,
        }
    }
}

impl Display for CaseStudyReport {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let (values, objective_value) = match &self.solution {
            Solution::Optimal { values, objective_value } => (values, objective_value),
            other => return write!(f, "{other}"),
        };

        writeln!(f, "Optimal, objective value {objective_value:.2}")?;
        writeln!(f)?;
        writeln!(f, "{:<12}{:>14}{:>14}{:>12}", "variable", "value", "contribution", "capacity")?;
        for (((name, value), contribution), usage) in self.variable_names.iter()
            .zip(values)
            .zip(&self.contributions)
            .zip(&self.capacity_usage) {
            let usage = usage.map_or_else(|| "-".to_string(), |usage| format!("{usage:.1}%"));
            writeln!(f, "{name:<12}{value:>14.2}{contribution:>14.2}{usage:>12}")?;
        }

        writeln!(f)?;
        writeln!(f, "{:<12}{:>14}{:>14}{:>14}{:>12}", "constraint", "usage", "limit", "slack", "used")?;
        for (name, usage) in self.constraint_names.iter().zip(&self.constraint_usage) {
            let utilization = usage.utilization.map_or_else(|| "-".to_string(), |value| format!("{value:.1}%"));
            writeln!(
                f,
                "{name:<12}{:>14.2}{:>14.2}{:>14.2}{utilization:>12}",
                usage.usage, usage.limit, usage.slack,
            )?;
        }

        Ok(())
    }
}
