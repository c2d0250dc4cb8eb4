//! # The bundled case studies
//!
//! Default inputs with their known optima, and variations on them.

/// # Generation and execution
#[allow(missing_docs)]
mod test;
