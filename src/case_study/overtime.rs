//! # Allocating a budget over regular time and overtime
//!
//! Two products can each be made in regular time and in overtime, at different unit costs. Output
//! is maximized within a single budget.
use crate::case_study::CaseStudy;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::error::ModelError;
use crate::data::linear_program::model::Model;

/// Maximize output within a budget.
#[derive(Clone, Debug, PartialEq)]
pub struct OvertimeAllocation {
    /// Output per unit of each option.
    pub output: [f64; 4],
    /// Cost per unit of each option.
    pub cost: [f64; 4],
    /// Total budget.
    pub budget: f64,
    /// Maximum number of units of each option.
    pub capacity: [f64; 4],
}

impl Default for OvertimeAllocation {
    fn default() -> Self {
        Self {
            output: [1f64; 4],
            cost: [15f64, 25f64, 16f64, 24f64],
            budget: 60_000f64,
            capacity: [2_000f64, 1_000f64, 1_000f64, 500f64],
        }
    }
}

impl CaseStudy for OvertimeAllocation {
    const VARIABLE_NAMES: [&'static str; 4] = ["x1R", "x1O", "x2R", "x2O"];
    const CONSTRAINT_NAMES: &'static [&'static str] = &["budget"];

    fn model(&self) -> Result<Model, ModelError> {
        Model::new(
            self.output.to_vec(),
            Objective::Maximize,
            vec![(self.cost.to_vec(), self.budget)],
            self.capacity.to_vec(),
        )
    }
}
