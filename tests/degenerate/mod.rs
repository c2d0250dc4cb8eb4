//! # Degenerate and redundant models
//!
//! Models with ties in the ratio test, repeated rows and fixed variables. These are where a
//! simplex implementation tends to cycle or to stop at an artificial basis.

/// # Generation and execution
#[allow(missing_docs)]
mod test;
