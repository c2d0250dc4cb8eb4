//! # Strategies
//!
//! Choices in the Simplex method that don't affect correctness, only the path taken.
pub mod pivot_rule;
