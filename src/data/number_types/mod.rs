//! # Number types
//!
//! The problems solved by this crate are small and dense, so the algorithms work on `f64` directly.
//! This module holds what is needed to make decisions on those values robustly.
pub mod float;
