//! # Algorithms
pub use crate::algorithm::config::SolverConfig;

pub mod config;
pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm, unless the algorithm runs out of iterations.
#[allow(missing_docs)]
#[derive(PartialEq, Debug)]
pub enum OptimizationResult {
    Infeasible,
    /// Value of each structural variable.
    FiniteOptimum(Vec<f64>),
    Unbounded,
    IterationLimitExceeded,
}
