//! # Solver configuration
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRuleKind;

/// Settings of a single solve call.
///
/// The defaults suit the small, dense problems this crate is meant for.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Base epsilon for all numerical comparisons. It is scaled to the magnitude of the data that
    /// is compared: cost coefficients for relative costs, constraint coefficients for pivot
    /// elements and right-hand side values for the remaining infeasibility after the first phase.
    pub tolerance: f64,
    /// Maximum number of pivots and bound flips over both phases together.
    ///
    /// When `None`, fifty times the number of variables and constraints is used.
    pub max_iterations: Option<usize>,
    /// Entering column selection.
    pub pivot_rule: PivotRuleKind,
}

impl SolverConfig {
    /// Use a different base epsilon.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Use a fixed iteration limit.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Use a different pivot rule.
    #[must_use]
    pub fn with_pivot_rule(mut self, pivot_rule: PivotRuleKind) -> Self {
        self.pivot_rule = pivot_rule;
        self
    }

    /// Iteration limit for a problem of a given size.
    pub fn iteration_limit(&self, nr_variables: usize, nr_constraints: usize) -> usize {
        self.max_iterations
            .unwrap_or_else(|| 50 * (nr_variables + nr_constraints).max(1))
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-9,
            max_iterations: None,
            pivot_rule: PivotRuleKind::default(),
        }
    }
}
