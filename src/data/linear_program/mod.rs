//! # Representing linear programs
//!
//! A linear program is described by a `Model` of inequality constraints and bounded variables. The
//! outcome of solving it is a `Solution`, which can be analyzed further with the `analysis` module.
pub mod analysis;
pub mod elements;
pub mod error;
pub mod model;
pub mod solution;
