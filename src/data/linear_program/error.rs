//! # Errors in the description of a linear program
//!
//! These are only returned while a `Model` is built. A model that is infeasible or unbounded is
//! not an error: that is a regular outcome of solving it.
use thiserror::Error;

/// The input describing a linear program is malformed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The length of a vector doesn't match the number of variables.
    #[error("dimension mismatch in {what}: expected length {expected}, found {found}")]
    DimensionMismatch {
        /// Which part of the input has the wrong length.
        what: String,
        /// The number of variables.
        expected: usize,
        /// The length that was provided.
        found: usize,
    },
    /// An upper bound is negative or not a number, which leaves the variable without any values.
    #[error("invalid upper bound {value} for variable {index}")]
    InvalidBound {
        /// Index of the variable.
        index: usize,
        /// The offending bound.
        value: f64,
    },
    /// A coefficient or right-hand side is not a finite number.
    #[error("{what} at index {index} is not finite: {value}")]
    NotFinite {
        /// Which part of the input contains the value.
        what: String,
        /// Position within that part.
        index: usize,
        /// The offending value.
        value: f64,
    },
}
