//! # Floating point numbers
//!
//! The simplex tableau is kept in `f64`. Correctness guarantees are harder to give than with exact
//! arithmetic due to (accumulating) rounding errors, so all sign and equality decisions go through
//! a `Tolerance`.
use crate::data::number_types::float::numerical_precision::relative_epsilon;

pub mod numerical_precision;

/// Sign decisions up to an epsilon.
///
/// The epsilon is fixed at creation, typically already scaled to the magnitude of the data that
/// will be compared using `Tolerance::scaled`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `epsilon`: Strictly positive, absolute threshold below which values are considered zero.
    pub fn new(epsilon: f64) -> Self {
        debug_assert!(epsilon > 0f64);

        Self { epsilon }
    }

    /// A tolerance for comparing values of about the given magnitude.
    #[must_use]
    pub fn scaled(self, magnitude: f64) -> Self {
        Self { epsilon: relative_epsilon(self.epsilon, magnitude) }
    }

    /// Absolute threshold used for the comparisons.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Within epsilon of zero.
    pub fn is_zero(&self, value: f64) -> bool {
        value.abs() <= self.epsilon
    }

    /// Larger than epsilon.
    pub fn is_positive(&self, value: f64) -> bool {
        value > self.epsilon
    }

    /// Smaller than minus epsilon.
    pub fn is_negative(&self, value: f64) -> bool {
        value < -self.epsilon
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(1e-9)
    }
}
