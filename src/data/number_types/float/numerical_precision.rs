//! Helper methods for the accuracy of floating point calculations.
use num_traits::Float;

/// Scale an absolute epsilon by the magnitude of the values it is compared against.
///
/// Magnitudes below one don't shrink the epsilon: values close to zero are compared absolutely.
pub fn relative_epsilon<F: Float>(epsilon: F, magnitude: F) -> F {
    debug_assert!(epsilon > F::zero());

    epsilon * magnitude.abs().max(F::one())
}

/// Largest absolute value in a collection, ignoring infinite values.
///
/// Returns zero for an empty collection.
pub fn max_finite_magnitude<'a, F: Float + 'a>(values: impl IntoIterator<Item = &'a F>) -> F {
    values.into_iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold(F::zero(), |maximum, value| maximum.max(value.abs()))
}

/// Whether two values are equal up to an epsilon relative to the largest of the two.
pub fn close<F: Float>(left: F, right: F, epsilon: F) -> bool {
    (left - right).abs() <= relative_epsilon(epsilon, left.abs().max(right.abs()))
}

/// Move a value that is slightly outside of an interval due to rounding back onto its bound.
pub fn clamp_to_interval<F: Float>(value: F, lower: F, upper: F) -> F {
    debug_assert!(lower <= upper);

    value.max(lower).min(upper)
}
