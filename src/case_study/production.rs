//! # Production planning with regular and overtime capacity
//!
//! Two machines, a saw and a drill, each produce in regular time and in overtime. The four
//! production options share two resource constraints and each has its own capacity.
use crate::case_study::CaseStudy;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::error::ModelError;
use crate::data::linear_program::model::Model;

/// Maximize profit over the four production options.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductionPlanning {
    /// Profit per unit of each option.
    pub profit: [f64; 4],
    /// Coefficients of the two resource constraints.
    pub rows: [[f64; 4]; 2],
    /// Available amount of each resource.
    pub rhs: [f64; 2],
    /// Maximum number of units of each option.
    pub capacity: [f64; 4],
}

impl Default for ProductionPlanning {
    fn default() -> Self {
        Self {
            profit: [150f64, 50f64, 100f64, 75f64],
            rows: [
                [1f64, 1f64, 1f64, 1f64],
                [2f64, 2f64, 1f64, 1f64],
            ],
            rhs: [10_000f64, 15_000f64],
            capacity: [3_000f64, 2_000f64, 5_000f64, 3_000f64],
        }
    }
}

impl CaseStudy for ProductionPlanning {
    const VARIABLE_NAMES: [&'static str; 4] = ["x11", "x12", "x21", "x22"];
    const CONSTRAINT_NAMES: &'static [&'static str] = &["resource 1", "resource 2"];

    fn model(&self) -> Result<Model, ModelError> {
        Model::new(
            self.profit.to_vec(),
            Objective::Maximize,
            self.rows.iter()
                .zip(self.rhs)
                .map(|(row, rhs)| (row.to_vec(), rhs))
                .collect(),
            self.capacity.to_vec(),
        )
    }
}
