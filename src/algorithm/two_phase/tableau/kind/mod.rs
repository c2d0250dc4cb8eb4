//! # Tableau types: artificial or not
//!
//! A tableau can contain artificial variables. They can be used to find a feasible solution in a
//! two-phase algorithm: the first phase finds a basic feasible solution, the second improves it.
//!
//! The `Tableau` type and pivoting logic in the parent module are independent of whether a tableau
//! contains artificial variables, or not. This module enables those abstractions.
pub mod artificial;
pub mod non_artificial;

/// The tableau type provides two different objective functions and rules about which columns are
/// allowed to enter the basis.
pub trait Kind {
    /// Coefficient of variable `j` in the objective function.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index of the variable, in range `0` until the number of tableau columns.
    fn initial_cost_value(&self, j: usize) -> f64;

    /// Whether variable `j` may enter the basis.
    ///
    /// Artificial variables never (re)enter.
    fn may_enter(&self, j: usize) -> bool;

    /// Index of the first artificial column. All columns from this index on are artificial.
    fn first_artificial(&self) -> usize;

    /// Whether the objective function can't decrease below some value over the feasible region
    /// of the tableau, regardless of the constraints.
    fn is_bounded_below(&self) -> bool;
}
